//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the REST calls to the ticket backend through the `/api`
//! prefix, which the dev server proxies to the backend listener.

pub mod api;
