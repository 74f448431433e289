//! AI assist client for deskline.
//!
//! Talks to the Gemini `generateContent` API for two things:
//!
//! - **[`AssistClient::analyze_ticket`]** - classify a new ticket into the
//!   domain's category/priority enums, with a short summary and three
//!   suggested fixes, via a structured-output schema
//! - **[`AssistClient::draft_reply`]** - draft a support reply from a
//!   ticket's description and full comment history
//!
//! Both operations are total: a missing credential or any transport, HTTP,
//! or parse failure is absorbed here and converted into a deterministic
//! fallback value. Nothing past this boundary ever sees an error, and the
//! client never touches the ticket store; callers feed results into
//! `create_ticket` or the reply composer themselves.
//!
//! # Example
//!
//! ```rust,ignore
//! use assist::{AssistClient, AssistConfig};
//!
//! // No GEMINI_API_KEY in the environment: every call takes the fallback
//! // path without attempting I/O.
//! let client = AssistClient::new(AssistConfig::from_env());
//! let analysis = client.analyze_ticket("VPN fails", "Gateway timeout").await;
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod prompt;

pub use client::{AssistClient, TicketAnalysis};
pub use config::AssistConfig;
pub use error::AssistError;
