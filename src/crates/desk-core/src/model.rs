//! Domain types for the helpdesk.
//!
//! Enum string values are wire-exact: the category and priority spellings
//! are embedded verbatim in the AI backend's response schema, so changing
//! them breaks structured-output parsing. Struct fields serialize in
//! camelCase to stay compatible with the entity shapes any future
//! persistence layer would have to honor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A user's role, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Employee,
    Agent,
    Manager,
    Admin,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Employee, Role::Agent, Role::Manager, Role::Admin];

    /// Agent-class roles carry triage and assignment permissions.
    pub fn is_agent_class(self) -> bool {
        matches!(self, Role::Agent | Role::Manager | Role::Admin)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Employee => "EMPLOYEE",
            Role::Agent => "AGENT",
            Role::Manager => "MANAGER",
            Role::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EMPLOYEE" => Ok(Role::Employee),
            "AGENT" => Ok(Role::Agent),
            "MANAGER" => Ok(Role::Manager),
            "ADMIN" => Ok(Role::Admin),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// Lifecycle state of a ticket. The transition graph is flat: any status is
/// reachable from any status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketStatus {
    #[serde(rename = "Open")]
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Resolved")]
    Resolved,
    #[serde(rename = "Closed")]
    Closed,
}

impl TicketStatus {
    pub const ALL: [TicketStatus; 4] = [
        TicketStatus::Open,
        TicketStatus::InProgress,
        TicketStatus::Resolved,
        TicketStatus::Closed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TicketStatus::Open => "Open",
            TicketStatus::InProgress => "In Progress",
            TicketStatus::Resolved => "Resolved",
            TicketStatus::Closed => "Closed",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TicketStatus::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| format!("unknown status: {s}"))
    }
}

/// Ticket urgency, as classified by the triage flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketPriority {
    #[serde(rename = "Low")]
    Low,
    #[serde(rename = "Medium")]
    Medium,
    #[serde(rename = "High")]
    High,
    #[serde(rename = "Critical")]
    Critical,
}

impl TicketPriority {
    pub const ALL: [TicketPriority; 4] = [
        TicketPriority::Low,
        TicketPriority::Medium,
        TicketPriority::High,
        TicketPriority::Critical,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TicketPriority::Low => "Low",
            TicketPriority::Medium => "Medium",
            TicketPriority::High => "High",
            TicketPriority::Critical => "Critical",
        }
    }
}

impl fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TicketPriority::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| format!("unknown priority: {s}"))
    }
}

/// Broad problem area a ticket falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketCategory {
    #[serde(rename = "Hardware")]
    Hardware,
    #[serde(rename = "Software")]
    Software,
    #[serde(rename = "Network")]
    Network,
    #[serde(rename = "Access")]
    Access,
    #[serde(rename = "Other")]
    Other,
}

impl TicketCategory {
    pub const ALL: [TicketCategory; 5] = [
        TicketCategory::Hardware,
        TicketCategory::Software,
        TicketCategory::Network,
        TicketCategory::Access,
        TicketCategory::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TicketCategory::Hardware => "Hardware",
            TicketCategory::Software => "Software",
            TicketCategory::Network => "Network",
            TicketCategory::Access => "Access",
            TicketCategory::Other => "Other",
        }
    }
}

impl fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TicketCategory::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

/// A helpdesk user. Role is immutable after creation and no delete
/// operation exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: Role,
    /// Opaque avatar URL; stored and forwarded, never interpreted.
    pub avatar: String,
}

/// A single entry in a ticket's thread. Immutable once appended; ordering
/// is append order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub user_role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub is_ai_generated: bool,
}

/// A reported issue tracked through its lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub category: TicketCategory,
    pub created_by: User,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<User>,
    pub created_at: DateTime<Utc>,
    /// Bumped on every mutation; never moves backwards.
    pub updated_at: DateTime<Utc>,
    pub comments: Vec<Comment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ai_suggested_fixes: Vec<String>,
    /// 0-100, present in the entity shape but not yet populated by triage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_sentiment_score: Option<u8>,
}

/// Global application settings, replaced wholesale on save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub allow_guest_signup: bool,
    pub enforce_mfa: bool,
    pub enable_ai_triage: bool,
    pub restrict_deletion: bool,
    pub maintenance_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            allow_guest_signup: false,
            enforce_mfa: true,
            enable_ai_triage: true,
            restrict_deletion: true,
            maintenance_mode: false,
        }
    }
}

/// Dashboard aggregates, derived from the live ticket collection on every
/// read. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub open_count: usize,
    pub critical_count: usize,
    pub avg_resolution_time_hours: f64,
    pub sla_breach_risk: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_strings_round_trip_exactly() {
        for status in TicketStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            let back: TicketStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
            assert_eq!(status.as_str().parse::<TicketStatus>().unwrap(), status);
        }
        assert_eq!(TicketStatus::InProgress.as_str(), "In Progress");
    }

    #[test]
    fn priority_and_category_strings_round_trip_exactly() {
        for priority in TicketPriority::ALL {
            let json = serde_json::to_string(&priority).unwrap();
            let back: TicketPriority = serde_json::from_str(&json).unwrap();
            assert_eq!(back, priority);
            assert_eq!(priority.as_str().parse::<TicketPriority>().unwrap(), priority);
        }
        for category in TicketCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
            let back: TicketCategory = serde_json::from_str(&json).unwrap();
            assert_eq!(back, category);
        }
    }

    #[test]
    fn role_serializes_screaming() {
        assert_eq!(serde_json::to_string(&Role::Employee).unwrap(), "\"EMPLOYEE\"");
        assert_eq!("MANAGER".parse::<Role>().unwrap(), Role::Manager);
        assert!("manager".parse::<Role>().is_err());
    }

    #[test]
    fn agent_class_excludes_employee() {
        assert!(!Role::Employee.is_agent_class());
        assert!(Role::Agent.is_agent_class());
        assert!(Role::Manager.is_agent_class());
        assert!(Role::Admin.is_agent_class());
    }

    #[test]
    fn unknown_enum_strings_are_rejected() {
        assert!("open".parse::<TicketStatus>().is_err());
        assert!("CRITICAL".parse::<TicketPriority>().is_err());
        assert!("hardware".parse::<TicketCategory>().is_err());
    }
}
