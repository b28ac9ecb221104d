//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own triage and persistence so route handlers can stay
//! focused on protocol translation.

pub mod ticket;
pub mod triage;
