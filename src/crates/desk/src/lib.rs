//! Terminal helpdesk client.
//!
//! Wires the core ticket store and the AI assist client into a ratatui
//! front end: sidebar navigation, ticket list, ticket detail with a reply
//! composer, a creation form that triages new tickets through the assist
//! client, an admin portal, and a dashboard stats strip.
//!
//! The presentation layer owns no helpdesk state: it renders store
//! snapshots filtered through the access policy and invokes exactly one
//! store or assist operation per user action.

pub mod config;
pub mod error;
pub mod tui;

pub use config::{ConfigLoader, DeskConfig};
pub use error::{DeskError, Result};
