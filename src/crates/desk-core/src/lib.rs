//! Core domain layer for deskline.
//!
//! This crate holds everything the helpdesk knows how to do without a
//! terminal or a network connection:
//!
//! - **[`model`]** - Ticket, User, Comment, and settings types with their
//!   wire-exact enum spellings
//! - **[`store`]** - The in-memory [`TicketStore`], sole owner of the ticket
//!   and user collections, handing out immutable snapshots
//! - **[`policy`]** - Pure role/visibility/filter functions that decide what
//!   the current user may see and do
//! - **[`stats`]** - Dashboard aggregates derived from the live collection
//! - **[`seed`]** - The demo users, tickets, and settings loaded at startup
//!
//! # Snapshot discipline
//!
//! Store collections live behind `Arc<Vec<_>>`. Every mutation rebuilds the
//! vector and swaps the `Arc`, so a snapshot handed to a reader keeps
//! observing the state it was taken from. Readers never see a half-applied
//! operation.
//!
//! ```rust
//! use desk_core::model::{Role, TicketCategory, TicketPriority};
//! use desk_core::store::{TicketDraft, TicketStore};
//!
//! let mut store = TicketStore::new();
//! let author = store.add_user("Eve Employee", Role::Employee);
//!
//! let before = store.tickets();
//! let ticket = store.create_ticket(&author, TicketDraft {
//!     title: "VPN fails".into(),
//!     description: "Gateway timeout on connect".into(),
//!     category: TicketCategory::Network,
//!     priority: TicketPriority::High,
//!     ai_summary: None,
//!     ai_suggested_fixes: Vec::new(),
//! });
//!
//! assert_eq!(before.len(), 0);            // old snapshot untouched
//! assert_eq!(store.tickets().len(), 1);   // new snapshot sees the ticket
//! assert_eq!(ticket.created_at, ticket.updated_at);
//! ```

pub mod error;
pub mod model;
pub mod policy;
pub mod seed;
pub mod stats;
pub mod store;

pub use error::{CoreError, Result};
pub use model::{
    AppSettings, Comment, DashboardStats, Role, Ticket, TicketCategory, TicketPriority,
    TicketStatus, User,
};
pub use policy::{NavTarget, TicketFilter};
pub use store::{TicketDraft, TicketStore};
