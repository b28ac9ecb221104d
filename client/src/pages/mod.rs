//! Page modules for top-level screens.

pub mod tickets;
