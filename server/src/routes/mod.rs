//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Ticket routes are mounted twice: at the root, where a dev proxy that
//! strips `/api` lands, and under `/api` for clients that call the server
//! directly. When a built web client is configured it is served as the
//! fallback, taking over `/` from the JSON status route.

pub mod tickets;

use axum::Router;
use axum::http::{HeaderValue, StatusCode};
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::ServerConfig;
use crate::state::AppState;

fn ticket_routes() -> Router<AppState> {
    Router::new()
        .route("/tickets", get(tickets::list_tickets).post(tickets::create_ticket))
        .route("/tickets/{id}", get(tickets::get_ticket).patch(tickets::update_ticket_status))
}

pub(crate) fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Build the full application router.
pub fn app(state: AppState, config: &ServerConfig) -> Router {
    let mut router = Router::new()
        .merge(ticket_routes())
        .nest("/api", ticket_routes())
        .route("/healthz", get(healthz));

    router = match &config.static_dir {
        Some(dir) => {
            let index = ServeFile::new(dir.join("index.html"));
            router.fallback_service(ServeDir::new(dir).fallback(index))
        }
        None => router.route("/", get(tickets::read_root)),
    };

    router
        .layer(cors_layer(&config.cors_allowed_origins))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
