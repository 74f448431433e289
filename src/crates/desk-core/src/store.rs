//! In-memory ticket store with snapshot semantics.
//!
//! The store is the sole owner of the ticket collection, the user
//! collection, and the settings singleton. Collections sit behind
//! `Arc<Vec<_>>`: a mutation rebuilds the vector and swaps the `Arc`, so
//! snapshots already handed out keep observing the state they were taken
//! from. All operations are synchronous and atomic from the caller's
//! perspective.
//!
//! Mutations addressed at an unknown ticket id are silent no-ops (logged at
//! debug), matching the permissive behavior of the UI this store backs.

use crate::error::{CoreError, Result};
use crate::model::{
    AppSettings, Comment, Role, Ticket, TicketCategory, TicketPriority, TicketStatus, User,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Input for [`TicketStore::create_ticket`]. Category, priority, and the AI
/// fields normally come from the triage flow; fallback values are
/// legitimate input.
#[derive(Debug, Clone)]
pub struct TicketDraft {
    pub title: String,
    pub description: String,
    pub category: TicketCategory,
    pub priority: TicketPriority,
    pub ai_summary: Option<String>,
    pub ai_suggested_fixes: Vec<String>,
}

/// Authoritative owner of all helpdesk state for the process lifetime.
#[derive(Debug, Clone)]
pub struct TicketStore {
    tickets: Arc<Vec<Ticket>>,
    users: Arc<Vec<User>>,
    settings: AppSettings,
}

impl TicketStore {
    /// Create an empty store with default settings.
    pub fn new() -> Self {
        Self {
            tickets: Arc::new(Vec::new()),
            users: Arc::new(Vec::new()),
            settings: AppSettings::default(),
        }
    }

    /// Create a store pre-populated with seed data.
    pub fn from_parts(users: Vec<User>, tickets: Vec<Ticket>, settings: AppSettings) -> Self {
        Self {
            tickets: Arc::new(tickets),
            users: Arc::new(users),
            settings,
        }
    }

    /// Snapshot of the ticket collection, newest-first storage order.
    pub fn tickets(&self) -> Arc<Vec<Ticket>> {
        Arc::clone(&self.tickets)
    }

    /// Snapshot of the user collection.
    pub fn users(&self) -> Arc<Vec<User>> {
        Arc::clone(&self.users)
    }

    pub fn settings(&self) -> AppSettings {
        self.settings
    }

    pub fn ticket(&self, ticket_id: &str) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == ticket_id)
    }

    pub fn user(&self, user_id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == user_id)
    }

    /// Create a new ticket and prepend it to the collection.
    ///
    /// Always starts life as `Open` with an empty thread and
    /// `created_at == updated_at`.
    pub fn create_ticket(&mut self, author: &User, draft: TicketDraft) -> Ticket {
        let now = Utc::now();
        let ticket = Ticket {
            id: format!("t-{}", Uuid::new_v4()),
            title: draft.title,
            description: draft.description,
            status: TicketStatus::Open,
            priority: draft.priority,
            category: draft.category,
            created_by: author.clone(),
            assigned_to: None,
            created_at: now,
            updated_at: now,
            comments: Vec::new(),
            ai_summary: draft.ai_summary,
            ai_suggested_fixes: draft.ai_suggested_fixes,
            ai_sentiment_score: None,
        };

        let mut next: Vec<Ticket> = Vec::with_capacity(self.tickets.len() + 1);
        next.push(ticket.clone());
        next.extend(self.tickets.iter().cloned());
        self.tickets = Arc::new(next);

        debug!(ticket_id = %ticket.id, "Ticket created");
        ticket
    }

    /// Set a ticket's status and bump `updated_at`. The transition graph is
    /// flat: any status is reachable from any status.
    pub fn update_status(&mut self, ticket_id: &str, status: TicketStatus) {
        self.mutate_ticket(ticket_id, |t| t.status = status);
    }

    /// Assign a ticket to a user, or clear the assignment with `None`.
    ///
    /// An assignee id absent from the user collection clears the
    /// assignment. The store does not check the assignee's role; the
    /// candidate list is restricted at the policy layer.
    pub fn assign(&mut self, ticket_id: &str, user_id: Option<&str>) {
        let assignee = user_id.and_then(|id| self.user(id).cloned());
        self.mutate_ticket(ticket_id, |t| t.assigned_to = assignee);
    }

    /// Append a comment to a ticket's thread.
    ///
    /// Empty or whitespace-only content is rejected with
    /// [`CoreError::Validation`] and the thread is left untouched. An
    /// unknown ticket id is a silent no-op.
    pub fn add_comment(
        &mut self,
        ticket_id: &str,
        author: &User,
        content: &str,
        is_ai_generated: bool,
    ) -> Result<()> {
        if content.trim().is_empty() {
            return Err(CoreError::Validation("comment content is empty".into()));
        }

        let comment = Comment {
            id: format!("c-{}", Uuid::new_v4()),
            user_id: author.id.clone(),
            user_name: author.name.clone(),
            user_role: author.role,
            content: content.to_string(),
            timestamp: Utc::now(),
            is_ai_generated,
        };
        self.mutate_ticket(ticket_id, |t| t.comments.push(comment));
        Ok(())
    }

    /// Add a user with a placeholder avatar derived from the display name.
    /// Names are not required to be unique.
    pub fn add_user(&mut self, name: &str, role: Role) -> User {
        let user = User {
            id: format!("u-{}", Uuid::new_v4()),
            name: name.to_string(),
            role,
            avatar: placeholder_avatar(name),
        };

        let mut next: Vec<User> = self.users.iter().cloned().collect();
        next.push(user.clone());
        self.users = Arc::new(next);

        debug!(user_id = %user.id, role = %role, "User added");
        user
    }

    /// Replace the settings singleton wholesale. There is no partial-field
    /// API.
    pub fn replace_settings(&mut self, settings: AppSettings) {
        self.settings = settings;
    }

    /// Apply `f` to the matching ticket in a rebuilt collection, bumping
    /// `updated_at`. The bump is clamped so `updated_at` never moves
    /// backwards even if the wall clock does.
    fn mutate_ticket(&mut self, ticket_id: &str, f: impl FnOnce(&mut Ticket)) {
        if !self.tickets.iter().any(|t| t.id == ticket_id) {
            debug!(ticket_id, "Mutation addressed at unknown ticket id, ignoring");
            return;
        }

        let mut f = Some(f);
        let next: Vec<Ticket> = self
            .tickets
            .iter()
            .map(|t| {
                if t.id == ticket_id {
                    let mut updated = t.clone();
                    if let Some(f) = f.take() {
                        f(&mut updated);
                    }
                    updated.updated_at = Utc::now().max(updated.updated_at);
                    updated
                } else {
                    t.clone()
                }
            })
            .collect();
        self.tickets = Arc::new(next);
    }
}

impl Default for TicketStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Deterministic placeholder avatar URL for users created after seeding.
fn placeholder_avatar(name: &str) -> String {
    let mut encoded = String::with_capacity(name.len());
    for b in name.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' => {
                encoded.push(b as char)
            }
            b' ' => encoded.push('+'),
            other => encoded.push_str(&format!("%{other:02X}")),
        }
    }
    format!("https://ui-avatars.com/api/?name={encoded}&background=random")
}
