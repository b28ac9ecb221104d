//! Ticket submission form state.
//!
//! DESIGN
//! ======
//! `begin_submit` is the only way into the busy state: it refuses while a
//! submission is in flight and refuses blank fields without touching the
//! network. The caller clears the busy flag through `submit_succeeded` or
//! `submit_failed` once the request settles.

#[cfg(test)]
#[path = "ticket_form_test.rs"]
mod ticket_form_test;

use tickets::{NewTicket, REQUIRED_FIELDS_MESSAGE};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TicketFormState {
    pub title: String,
    pub description: String,
    pub busy: bool,
    pub error: Option<String>,
}

impl TicketFormState {
    /// Validate the fields and mark the form busy.
    ///
    /// Returns the trimmed request body, or `None` when the form is already
    /// busy or a required field is blank.
    pub fn begin_submit(&mut self) -> Option<NewTicket> {
        if self.busy {
            return None;
        }
        match NewTicket::new(self.title.as_str(), self.description.as_str()).validate() {
            Ok(new) => {
                self.busy = true;
                self.error = None;
                Some(new)
            }
            Err(_) => {
                self.error = Some(REQUIRED_FIELDS_MESSAGE.to_owned());
                None
            }
        }
    }

    pub fn submit_succeeded(&mut self) {
        self.title.clear();
        self.description.clear();
        self.error = None;
        self.busy = false;
    }

    /// Entered values are kept so the user can retry.
    pub fn submit_failed(&mut self, message: String) {
        self.error = Some(message);
        self.busy = false;
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.busy { "Submitting..." } else { "Submit Ticket" }
    }
}
