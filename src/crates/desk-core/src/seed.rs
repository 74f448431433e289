//! Demo data loaded at startup. There is no persistence layer; every run
//! starts from this snapshot.

use crate::model::{
    AppSettings, Comment, Role, Ticket, TicketCategory, TicketPriority, TicketStatus, User,
};
use crate::store::TicketStore;
use chrono::{Duration, Utc};

/// A store pre-populated with the demo users, tickets, and settings.
pub fn demo_store() -> TicketStore {
    let users = demo_users();
    let tickets = demo_tickets(&users);
    TicketStore::from_parts(users, tickets, AppSettings::default())
}

fn demo_users() -> Vec<User> {
    vec![
        User {
            id: "u1".into(),
            name: "Alice Agent".into(),
            role: Role::Agent,
            avatar: "https://picsum.photos/200/200?random=1".into(),
        },
        User {
            id: "u2".into(),
            name: "Bob Manager".into(),
            role: Role::Manager,
            avatar: "https://picsum.photos/200/200?random=2".into(),
        },
        User {
            id: "u3".into(),
            name: "Eve Employee".into(),
            role: Role::Employee,
            avatar: "https://picsum.photos/200/200?random=3".into(),
        },
        User {
            id: "u4".into(),
            name: "Diana Admin".into(),
            role: Role::Admin,
            avatar: "https://picsum.photos/200/200?random=4".into(),
        },
    ]
}

fn demo_tickets(users: &[User]) -> Vec<Ticket> {
    let now = Utc::now();
    let employee = users[2].clone();

    vec![
        Ticket {
            id: "t-10923".into(),
            title: "VPN Connection Failure".into(),
            description: "I cannot connect to the corporate VPN. It says \"Gateway timeout\". \
                          I have tried restarting my machine but it persists. This is blocking \
                          my access to the production DB."
                .into(),
            status: TicketStatus::Open,
            priority: TicketPriority::High,
            category: TicketCategory::Network,
            created_by: employee.clone(),
            assigned_to: None,
            created_at: now - Duration::hours(2),
            updated_at: now - Duration::hours(2),
            comments: Vec::new(),
            ai_summary: Some("VPN Gateway timeout preventing production DB access.".into()),
            ai_suggested_fixes: vec![
                "Verify internet connection stability.".into(),
                "Check if VPN certificate is expired.".into(),
                "Flush DNS cache.".into(),
            ],
            ai_sentiment_score: None,
        },
        Ticket {
            id: "t-10924".into(),
            title: "Need Adobe License".into(),
            description: "I need a license for Adobe Photoshop for the new marketing campaign \
                          assets."
                .into(),
            status: TicketStatus::Open,
            priority: TicketPriority::Low,
            category: TicketCategory::Access,
            created_by: employee.clone(),
            assigned_to: None,
            created_at: now - Duration::days(1),
            updated_at: now - Duration::days(1),
            comments: vec![Comment {
                id: "c1".into(),
                user_id: "u1".into(),
                user_name: "Alice Agent".into(),
                user_role: Role::Agent,
                content: "I have requested approval from your manager.".into(),
                timestamp: now,
                is_ai_generated: false,
            }],
            ai_summary: Some("Request for Adobe Photoshop license.".into()),
            ai_suggested_fixes: vec![
                "Check available licenses in pool.".into(),
                "Route to Line Manager for budget approval.".into(),
            ],
            ai_sentiment_score: None,
        },
        Ticket {
            id: "t-10925".into(),
            title: "Laptop Screen Flickering".into(),
            description: "My screen flickers intermittently when I move the hinge. It is a \
                          MacBook Pro M1."
                .into(),
            status: TicketStatus::InProgress,
            priority: TicketPriority::Medium,
            category: TicketCategory::Hardware,
            created_by: employee,
            assigned_to: None,
            created_at: now - Duration::days(2),
            updated_at: now,
            comments: Vec::new(),
            ai_summary: Some(
                "Intermittent screen flickering on MacBook Pro M1 (hardware/hinge).".into(),
            ),
            ai_suggested_fixes: vec![
                "Reset PRAM/NVRAM.".into(),
                "Check for loose display cable.".into(),
                "Schedule hardware repair.".into(),
            ],
            ai_sentiment_score: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_store_has_expected_shape() {
        let store = demo_store();
        assert_eq!(store.users().len(), 4);
        assert_eq!(store.tickets().len(), 3);
        assert!(store.settings().enforce_mfa);
        assert!(store.settings().enable_ai_triage);

        // One user per role so every workflow is reachable in the demo.
        for role in Role::ALL {
            assert!(store.users().iter().any(|u| u.role == role));
        }

        for ticket in store.tickets().iter() {
            assert!(ticket.updated_at >= ticket.created_at);
            assert_eq!(ticket.created_by.role, Role::Employee);
        }
    }
}
