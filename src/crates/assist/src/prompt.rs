//! Prompt construction for the two assist operations.
//!
//! Kept separate from the HTTP plumbing so the exact text sent to the
//! backend is testable without a network.

use desk_core::model::Ticket;

/// Classification prompt for a new ticket. The structured-output schema
/// constrains the answer to the domain enums; the prompt carries the
/// human-readable instructions.
pub fn classification(title: &str, description: &str) -> String {
    format!(
        "Analyze the following IT support ticket.\n\
         Title: {title}\n\
         Description: {description}\n\
         \n\
         Provide the following in JSON format:\n\
         1. Category (Hardware, Software, Network, Access, Other)\n\
         2. Priority (Low, Medium, High, Critical) - base this on urgency and impact.\n\
         3. A concise summary of the issue (max 15 words).\n\
         4. An array of 3 distinct, actionable troubleshooting steps or suggested fixes."
    )
}

/// Reply-drafting prompt embedding the ticket and its full comment history
/// in chronological order.
pub fn draft_reply(ticket: &Ticket) -> String {
    let history = ticket
        .comments
        .iter()
        .map(|c| format!("{}: {}", c.user_name, c.content))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are a helpful and professional IT Support Agent.\n\
         Draft a reply to this ticket.\n\
         \n\
         Ticket Details:\n\
         Title: {title}\n\
         Description: {description}\n\
         Current Status: {status}\n\
         Category: {category}\n\
         \n\
         History:\n\
         {history}\n\
         \n\
         Instructions:\n\
         - Be polite and empathetic.\n\
         - If the issue is critical, assure them it is being looked at immediately.\n\
         - If info is missing, ask for it.\n\
         - Keep it concise (under 100 words).",
        title = ticket.title,
        description = ticket.description,
        status = ticket.status,
        category = ticket.category,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use desk_core::model::{
        Comment, Role, TicketCategory, TicketPriority, TicketStatus, User,
    };

    fn sample_ticket() -> Ticket {
        let author = User {
            id: "u3".into(),
            name: "Eve Employee".into(),
            role: Role::Employee,
            avatar: String::new(),
        };
        let now = Utc::now();
        Ticket {
            id: "t-1".into(),
            title: "VPN Connection Failure".into(),
            description: "Gateway timeout on connect.".into(),
            status: TicketStatus::InProgress,
            priority: TicketPriority::High,
            category: TicketCategory::Network,
            created_by: author.clone(),
            assigned_to: None,
            created_at: now,
            updated_at: now,
            comments: vec![
                Comment {
                    id: "c1".into(),
                    user_id: author.id.clone(),
                    user_name: "Eve Employee".into(),
                    user_role: Role::Employee,
                    content: "Still failing after reboot.".into(),
                    timestamp: now,
                    is_ai_generated: false,
                },
                Comment {
                    id: "c2".into(),
                    user_id: "u1".into(),
                    user_name: "Alice Agent".into(),
                    user_role: Role::Agent,
                    content: "Checking the gateway logs now.".into(),
                    timestamp: now,
                    is_ai_generated: false,
                },
            ],
            ai_summary: None,
            ai_suggested_fixes: Vec::new(),
            ai_sentiment_score: None,
        }
    }

    #[test]
    fn classification_embeds_title_and_description() {
        let prompt = classification("VPN fails", "Gateway timeout");
        assert!(prompt.contains("Title: VPN fails"));
        assert!(prompt.contains("Description: Gateway timeout"));
        assert!(prompt.contains("Hardware, Software, Network, Access, Other"));
        assert!(prompt.contains("Low, Medium, High, Critical"));
        assert!(prompt.contains("max 15 words"));
        assert!(prompt.contains("3 distinct, actionable"));
    }

    #[test]
    fn draft_prompt_embeds_history_in_order() {
        let ticket = sample_ticket();
        let prompt = draft_reply(&ticket);

        assert!(prompt.contains("Title: VPN Connection Failure"));
        assert!(prompt.contains("Current Status: In Progress"));
        assert!(prompt.contains("Category: Network"));

        let eve = prompt.find("Eve Employee: Still failing after reboot.").unwrap();
        let alice = prompt.find("Alice Agent: Checking the gateway logs now.").unwrap();
        assert!(eve < alice);
    }

    #[test]
    fn draft_prompt_tolerates_empty_history() {
        let mut ticket = sample_ticket();
        ticket.comments.clear();
        let prompt = draft_reply(&ticket);
        assert!(prompt.contains("History:\n\n"));
    }
}
