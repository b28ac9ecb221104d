use super::*;
use tickets::{TicketCategory, TicketPriority, TicketStatus};

fn ticket(id: i64) -> Ticket {
    Ticket {
        id,
        title: format!("Ticket {id}"),
        description: "details".into(),
        category: TicketCategory::General,
        priority: TicketPriority::Low,
        status: TicketStatus::Open,
        resolution: None,
    }
}

fn ids(state: &TicketsState) -> Vec<i64> {
    state.items.iter().map(|t| t.id).collect()
}

#[test]
fn default_state_is_loading_and_empty() {
    let state = TicketsState::default();
    assert!(state.loading);
    assert!(state.items.is_empty());
    assert!(!state.show_list());
}

#[test]
fn finish_fetch_sorts_newest_first() {
    let mut state = TicketsState::default();
    state.finish_fetch(Ok(vec![ticket(2), ticket(9), ticket(5)]));
    assert_eq!(ids(&state), vec![9, 5, 2]);
    assert!(!state.loading);
    assert!(state.show_list());
}

#[test]
fn finish_fetch_error_keeps_items() {
    let mut state = TicketsState::default();
    state.finish_fetch(Ok(vec![ticket(1)]));
    state.begin_fetch();
    assert!(state.loading);
    state.finish_fetch(Err("Could not fetch tickets from the server.".into()));
    assert_eq!(ids(&state), vec![1]);
    assert_eq!(state.error.as_deref(), Some("Could not fetch tickets from the server."));
    assert!(!state.loading);
    assert!(!state.show_list());
}

#[test]
fn begin_fetch_clears_previous_error() {
    let mut state = TicketsState::default();
    state.finish_fetch(Err("boom".into()));
    state.begin_fetch();
    assert!(state.error.is_none());
}

#[test]
fn prepend_puts_new_ticket_first() {
    let mut state = TicketsState::default();
    state.finish_fetch(Ok(vec![ticket(1), ticket(2)]));
    state.prepend(ticket(3));
    assert_eq!(ids(&state), vec![3, 2, 1]);
}

#[test]
fn prepend_replaces_duplicate_id() {
    let mut state = TicketsState::default();
    state.finish_fetch(Ok(vec![ticket(1), ticket(2)]));
    let mut updated = ticket(2);
    updated.title = "Updated".into();
    state.prepend(updated);
    assert_eq!(ids(&state), vec![2, 1]);
    assert_eq!(state.items[0].title, "Updated");
}

#[test]
fn selection_resolves_to_ticket() {
    let mut state = TicketsState::default();
    state.finish_fetch(Ok(vec![ticket(1), ticket(2)]));
    assert!(state.selected_ticket().is_none());

    state.select(1);
    assert_eq!(state.selected_ticket().map(|t| t.id), Some(1));

    state.select(42);
    assert!(state.selected_ticket().is_none());

    state.clear_selection();
    assert!(state.selected.is_none());
}
