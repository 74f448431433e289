//! Dashboard aggregates derived from the live ticket collection.

use crate::model::{DashboardStats, Ticket, TicketPriority, TicketStatus};
use chrono::{DateTime, Duration, Utc};

/// SLA window for open tickets. Anything still open past this is counted
/// as at risk of breach.
const SLA_WINDOW_HOURS: i64 = 24;

/// Compute dashboard stats from the current collection. Recomputed on
/// every read; nothing here is cached or persisted.
pub fn compute(tickets: &[Ticket]) -> DashboardStats {
    compute_at(tickets, Utc::now())
}

/// [`compute`] against an explicit "now", so the aggregates are testable.
pub fn compute_at(tickets: &[Ticket], now: DateTime<Utc>) -> DashboardStats {
    let open_count = tickets
        .iter()
        .filter(|t| t.status == TicketStatus::Open)
        .count();

    // The attention counter spans High as well as Critical.
    let critical_count = tickets
        .iter()
        .filter(|t| matches!(t.priority, TicketPriority::High | TicketPriority::Critical))
        .count();

    let resolved: Vec<&Ticket> = tickets
        .iter()
        .filter(|t| matches!(t.status, TicketStatus::Resolved | TicketStatus::Closed))
        .collect();
    let avg_resolution_time_hours = if resolved.is_empty() {
        0.0
    } else {
        let total_hours: f64 = resolved
            .iter()
            .map(|t| (t.updated_at - t.created_at).num_seconds().max(0) as f64 / 3600.0)
            .sum();
        total_hours / resolved.len() as f64
    };

    let still_open: Vec<&Ticket> = tickets
        .iter()
        .filter(|t| matches!(t.status, TicketStatus::Open | TicketStatus::InProgress))
        .collect();
    let sla_breach_risk = if still_open.is_empty() {
        0
    } else {
        let at_risk = still_open
            .iter()
            .filter(|t| now - t.created_at > Duration::hours(SLA_WINDOW_HOURS))
            .count();
        ((at_risk * 100) / still_open.len()) as u8
    };

    DashboardStats {
        open_count,
        critical_count,
        avg_resolution_time_hours,
        sla_breach_risk,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Role, TicketCategory, User};

    fn ticket(status: TicketStatus, priority: TicketPriority, age_hours: i64, now: DateTime<Utc>) -> Ticket {
        let created = now - Duration::hours(age_hours);
        let updated = if matches!(status, TicketStatus::Resolved | TicketStatus::Closed) {
            now
        } else {
            created
        };
        Ticket {
            id: format!("t-{age_hours}-{status}"),
            title: String::new(),
            description: String::new(),
            status,
            priority,
            category: TicketCategory::Other,
            created_by: User {
                id: "u1".into(),
                name: "Eve".into(),
                role: Role::Employee,
                avatar: String::new(),
            },
            assigned_to: None,
            created_at: created,
            updated_at: updated,
            comments: Vec::new(),
            ai_summary: None,
            ai_suggested_fixes: Vec::new(),
            ai_sentiment_score: None,
        }
    }

    #[test]
    fn empty_collection_yields_zeroes() {
        let stats = compute(&[]);
        assert_eq!(stats.open_count, 0);
        assert_eq!(stats.critical_count, 0);
        assert_eq!(stats.avg_resolution_time_hours, 0.0);
        assert_eq!(stats.sla_breach_risk, 0);
    }

    #[test]
    fn open_count_excludes_in_progress() {
        let now = Utc::now();
        let tickets = vec![
            ticket(TicketStatus::Open, TicketPriority::Low, 1, now),
            ticket(TicketStatus::Open, TicketPriority::Low, 2, now),
            ticket(TicketStatus::InProgress, TicketPriority::Low, 3, now),
            ticket(TicketStatus::Closed, TicketPriority::Low, 4, now),
        ];
        assert_eq!(compute_at(&tickets, now).open_count, 2);
    }

    #[test]
    fn critical_count_spans_high_and_critical() {
        let now = Utc::now();
        let tickets = vec![
            ticket(TicketStatus::Open, TicketPriority::Low, 1, now),
            ticket(TicketStatus::Open, TicketPriority::High, 1, now),
            ticket(TicketStatus::Closed, TicketPriority::Critical, 1, now),
        ];
        assert_eq!(compute_at(&tickets, now).critical_count, 2);
    }

    #[test]
    fn resolution_time_averages_resolved_and_closed() {
        let now = Utc::now();
        let tickets = vec![
            ticket(TicketStatus::Resolved, TicketPriority::Low, 2, now),
            ticket(TicketStatus::Closed, TicketPriority::Low, 6, now),
            ticket(TicketStatus::Open, TicketPriority::Low, 100, now),
        ];
        let stats = compute_at(&tickets, now);
        assert!((stats.avg_resolution_time_hours - 4.0).abs() < 0.01);
    }

    #[test]
    fn breach_risk_is_share_of_open_tickets_past_sla() {
        let now = Utc::now();
        let tickets = vec![
            ticket(TicketStatus::Open, TicketPriority::Low, 48, now),
            ticket(TicketStatus::InProgress, TicketPriority::Low, 30, now),
            ticket(TicketStatus::Open, TicketPriority::Low, 1, now),
            ticket(TicketStatus::Open, TicketPriority::Low, 2, now),
            ticket(TicketStatus::Closed, TicketPriority::Low, 200, now),
        ];
        // 2 of 4 still-open tickets past the 24h window
        assert_eq!(compute_at(&tickets, now).sla_breach_risk, 50);
    }
}
