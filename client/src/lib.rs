//! Web client for the ticket resolver.
//!
//! ARCHITECTURE
//! ============
//! A client-side rendered Leptos app. `state` holds plain state structs,
//! `net` talks to the backend, `components` and `pages` render.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
