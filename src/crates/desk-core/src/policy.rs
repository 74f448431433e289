//! Access and view policy.
//!
//! Pure functions over `(current user, tickets, filter, destination)`. The
//! store stays unchecked; everything role-shaped is decided here and the
//! presentation layer only renders what these functions allow.

use crate::model::{Role, Ticket, TicketPriority, TicketStatus, User};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Navigation destinations reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavTarget {
    Dashboard,
    MyTickets,
    CreateTicket,
    AdminPortal,
}

impl NavTarget {
    pub const ALL: [NavTarget; 4] = [
        NavTarget::Dashboard,
        NavTarget::MyTickets,
        NavTarget::CreateTicket,
        NavTarget::AdminPortal,
    ];
}

impl fmt::Display for NavTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavTarget::Dashboard => write!(f, "Dashboard"),
            NavTarget::MyTickets => write!(f, "My Tickets"),
            NavTarget::CreateTicket => write!(f, "Create Ticket"),
            NavTarget::AdminPortal => write!(f, "Admin Portal"),
        }
    }
}

/// One flat filter domain: the sentinel `All`, or a single value drawn from
/// either the status set or the priority set. A non-`All` filter keeps
/// tickets matching on status *or* priority (union match).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketFilter {
    All,
    Status(TicketStatus),
    Priority(TicketPriority),
}

impl TicketFilter {
    /// Every selectable filter value, in display order.
    pub fn all_values() -> Vec<TicketFilter> {
        let mut values = vec![TicketFilter::All];
        values.extend(TicketStatus::ALL.into_iter().map(TicketFilter::Status));
        values.extend(TicketPriority::ALL.into_iter().map(TicketFilter::Priority));
        values
    }

    fn matches(&self, ticket: &Ticket) -> bool {
        match self {
            TicketFilter::All => true,
            TicketFilter::Status(status) => ticket.status == *status,
            TicketFilter::Priority(priority) => ticket.priority == *priority,
        }
    }
}

impl Default for TicketFilter {
    fn default() -> Self {
        TicketFilter::All
    }
}

impl fmt::Display for TicketFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketFilter::All => write!(f, "All"),
            TicketFilter::Status(status) => write!(f, "{status}"),
            TicketFilter::Priority(priority) => write!(f, "{priority}"),
        }
    }
}

impl FromStr for TicketFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            return Ok(TicketFilter::All);
        }
        if let Ok(status) = s.parse::<TicketStatus>() {
            return Ok(TicketFilter::Status(status));
        }
        if let Ok(priority) = s.parse::<TicketPriority>() {
            return Ok(TicketFilter::Priority(priority));
        }
        Err(format!("unknown filter: {s}"))
    }
}

/// Tickets the given user may see, filtered and sorted for display.
///
/// Employees are scoped to their own tickets; agent-class roles see the
/// full collection. The filter is applied after scoping, and the result is
/// sorted by creation time descending (most recent first).
pub fn visible_tickets<'a>(
    user: &User,
    tickets: &'a [Ticket],
    filter: TicketFilter,
) -> Vec<&'a Ticket> {
    let mut visible: Vec<&Ticket> = tickets
        .iter()
        .filter(|t| user.role.is_agent_class() || t.created_by.id == user.id)
        .filter(|t| filter.matches(t))
        .collect();
    visible.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    visible
}

/// Whether a role may navigate to a destination. Only the admin portal is
/// restricted.
pub fn can_navigate(role: Role, target: NavTarget) -> bool {
    match target {
        NavTarget::AdminPortal => role == Role::Admin,
        NavTarget::Dashboard | NavTarget::MyTickets | NavTarget::CreateTicket => true,
    }
}

/// Whether the dashboard shows the aggregate stats strip. Employees get
/// only their ticket list, no aggregates.
pub fn shows_dashboard_stats(role: Role) -> bool {
    role != Role::Employee
}

/// Whether status and assignment controls are rendered at all.
pub fn can_triage(role: Role) -> bool {
    role.is_agent_class()
}

/// Candidate assignees: agent-class users only.
pub fn assignable_users<'a>(users: &'a [User]) -> Vec<&'a User> {
    users.iter().filter(|u| u.role.is_agent_class()).collect()
}
