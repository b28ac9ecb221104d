//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the ticket form, list, cards and detail modal. The
//! form reads its state from Leptos context; the rest take props.

pub mod error_message;
pub mod loader;
pub mod ticket_card;
pub mod ticket_details;
pub mod ticket_form;
pub mod ticket_list;
