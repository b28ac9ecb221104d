//! Ticket list state owned by the root view.
//!
//! DESIGN
//! ======
//! The list is held newest first. Fetch results are sorted on arrival and
//! created tickets are prepended, so the view never re-sorts. A failed fetch
//! records the error but keeps whatever items were already held.

#[cfg(test)]
#[path = "tickets_test.rs"]
mod tickets_test;

use tickets::{Ticket, sort_newest_first};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TicketsState {
    pub items: Vec<Ticket>,
    pub loading: bool,
    pub error: Option<String>,
    /// Id of the ticket shown in the detail modal.
    pub selected: Option<i64>,
}

impl Default for TicketsState {
    // The first fetch starts on mount, so the initial state is already loading.
    fn default() -> Self {
        Self { items: Vec::new(), loading: true, error: None, selected: None }
    }
}

impl TicketsState {
    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_fetch(&mut self, result: Result<Vec<Ticket>, String>) {
        match result {
            Ok(mut items) => {
                sort_newest_first(&mut items);
                self.items = items;
            }
            Err(message) => self.error = Some(message),
        }
        self.loading = false;
    }

    /// Put a freshly created ticket at the top of the list.
    pub fn prepend(&mut self, ticket: Ticket) {
        self.items.retain(|t| t.id != ticket.id);
        self.items.insert(0, ticket);
    }

    pub fn select(&mut self, id: i64) {
        self.selected = Some(id);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    #[must_use]
    pub fn selected_ticket(&self) -> Option<&Ticket> {
        let id = self.selected?;
        self.items.iter().find(|t| t.id == id)
    }

    /// Whether the list (or its empty placeholder) should render.
    #[must_use]
    pub fn show_list(&self) -> bool {
        !self.loading && self.error.is_none()
    }
}
