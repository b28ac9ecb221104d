//! Reactive client state.
//!
//! DESIGN
//! ======
//! Each state struct is plain data with transition methods, wrapped in an
//! `RwSignal` and provided through Leptos context by `app::App`. Keeping the
//! transitions off the signals makes them testable without a browser.

pub mod ticket_form;
pub mod tickets;
