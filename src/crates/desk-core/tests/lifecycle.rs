// Ticket lifecycle integration tests: store, policy, and stats working
// against the same collection.

use desk_core::model::{Role, TicketCategory, TicketPriority, TicketStatus};
use desk_core::policy::{self, TicketFilter};
use desk_core::store::{TicketDraft, TicketStore};
use desk_core::{seed, stats};

fn draft(title: &str, priority: TicketPriority) -> TicketDraft {
    TicketDraft {
        title: title.to_string(),
        description: "integration test ticket".to_string(),
        category: TicketCategory::Software,
        priority,
        ai_summary: Some(title.to_string()),
        ai_suggested_fixes: vec!["Manual triage required.".to_string()],
    }
}

#[test]
fn ticket_progresses_through_full_lifecycle() {
    let mut store = TicketStore::new();
    let employee = store.add_user("Eve Employee", Role::Employee);
    let agent = store.add_user("Alice Agent", Role::Agent);

    let ticket = store.create_ticket(&employee, draft("Mail client crashes", TicketPriority::Medium));
    assert_eq!(ticket.status, TicketStatus::Open);
    assert_eq!(ticket.created_at, ticket.updated_at);

    store.assign(&ticket.id, Some(&agent.id));
    store.update_status(&ticket.id, TicketStatus::InProgress);
    store
        .add_comment(&ticket.id, &agent, "Looking into it", false)
        .unwrap();
    store.update_status(&ticket.id, TicketStatus::Resolved);

    let current = store.ticket(&ticket.id).unwrap();
    assert_eq!(current.status, TicketStatus::Resolved);
    assert_eq!(current.comments.len(), 1);
    assert_eq!(current.assigned_to.as_ref().unwrap().id, agent.id);
    assert!(current.updated_at >= ticket.updated_at);
}

#[test]
fn employee_scope_filter_and_sort_compose() {
    let mut store = TicketStore::new();
    let eve = store.add_user("Eve Employee", Role::Employee);
    let mallory = store.add_user("Mallory Employee", Role::Employee);
    let manager = store.add_user("Bob Manager", Role::Manager);

    let mine_low = store.create_ticket(&eve, draft("printer jam", TicketPriority::Low));
    store.create_ticket(&mallory, draft("slow laptop", TicketPriority::High));
    let mine_high = store.create_ticket(&eve, draft("account locked", TicketPriority::High));

    let tickets = store.tickets();

    // Employee sees own tickets only, newest first.
    let eves_view = policy::visible_tickets(&eve, &tickets, TicketFilter::All);
    assert_eq!(
        eves_view.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(),
        vec![mine_high.id.as_str(), mine_low.id.as_str()]
    );

    // The same filter value matches across every author's tickets for a
    // manager.
    let high = policy::visible_tickets(
        &manager,
        &tickets,
        TicketFilter::Priority(TicketPriority::High),
    );
    assert_eq!(high.len(), 2);

    // Employee scoping composes with the filter.
    let eves_high =
        policy::visible_tickets(&eve, &tickets, TicketFilter::Priority(TicketPriority::High));
    assert_eq!(eves_high.len(), 1);
    assert_eq!(eves_high[0].id, mine_high.id);
}

#[test]
fn stats_track_store_mutations() {
    let mut store = seed::demo_store();
    let users = store.users();
    let agent = users.iter().find(|u| u.role == Role::Agent).unwrap().clone();

    let before = stats::compute(&store.tickets());
    assert_eq!(before.open_count, 2); // demo data: two Open, one In Progress
    assert_eq!(before.critical_count, 1); // the High-priority VPN ticket

    let critical = store.create_ticket(&agent, draft("Datacenter down", TicketPriority::Critical));
    let after_create = stats::compute(&store.tickets());
    assert_eq!(after_create.open_count, 3);
    assert_eq!(after_create.critical_count, 2);

    store.update_status(&critical.id, TicketStatus::Resolved);
    let after_resolve = stats::compute(&store.tickets());
    assert_eq!(after_resolve.open_count, 2);
}
