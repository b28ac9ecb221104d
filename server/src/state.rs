//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! Tickets live in Postgres only; the state holds the pool and the optional
//! LLM client used by the triage agents.

use std::sync::Arc;

use sqlx::PgPool;

use crate::llm::LlmChat;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    /// Optional LLM client. `None` if LLM env vars are not configured, in
    /// which case triage assigns fallback values.
    pub llm: Option<Arc<dyn LlmChat>>,
}

impl AppState {
    #[must_use]
    pub fn new(pool: PgPool, llm: Option<Arc<dyn LlmChat>>) -> Self {
        Self { pool, llm }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
