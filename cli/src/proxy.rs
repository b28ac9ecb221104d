//! Development proxy: one origin for the built client and the backend API.
//!
//! DESIGN
//! ======
//! Requests under `/api` are forwarded to the backend with exactly one `/api`
//! segment removed and the query string kept, so `/api/tickets?limit=5`
//! reaches the backend as `/tickets?limit=5`. Everything else is served from
//! the static directory, falling back to `index.html` for client-side paths.
//! Bodies are buffered; the ticket API never streams.

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderName, StatusCode};
use axum::response::Response;
use axum::routing::any;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::CliError;

const API_PREFIX: &str = "/api";
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Headers that describe a single connection and must not be forwarded.
const HOP_BY_HOP: &[&str] = &[
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "host",
    "content-length",
];

#[derive(Clone)]
struct ProxyState {
    client: reqwest::Client,
    backend: String,
}

// =============================================================================
// PATH AND HEADER REWRITES
// =============================================================================

/// Strip one leading `/api` segment. Returns `None` for paths outside it.
#[must_use]
pub fn rewrite_path(path_and_query: &str) -> Option<String> {
    let rest = path_and_query.strip_prefix(API_PREFIX)?;
    if rest.is_empty() {
        return Some("/".to_owned());
    }
    if rest.starts_with('/') {
        return Some(rest.to_owned());
    }
    if rest.starts_with('?') {
        return Some(format!("/{rest}"));
    }
    None
}

/// Join the backend base URL and a rewritten path.
#[must_use]
pub fn backend_url(backend: &str, rewritten: &str) -> String {
    format!("{}{rewritten}", backend.trim_end_matches('/'))
}

#[must_use]
pub fn is_hop_by_hop(name: &HeaderName) -> bool {
    HOP_BY_HOP.iter().any(|h| name.as_str().eq_ignore_ascii_case(h))
}

fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    headers
        .iter()
        .filter(|(name, _)| !is_hop_by_hop(name))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

// =============================================================================
// HANDLERS
// =============================================================================

async fn forward(State(state): State<ProxyState>, req: Request) -> Result<Response, StatusCode> {
    let path_and_query = req
        .uri()
        .path_and_query()
        .map_or_else(|| req.uri().path().to_owned(), ToString::to_string);
    let rewritten = rewrite_path(&path_and_query).ok_or(StatusCode::NOT_FOUND)?;
    let url = backend_url(&state.backend, &rewritten);

    let method = req.method().clone();
    let headers = forwardable_headers(req.headers());
    let body = to_bytes(req.into_body(), MAX_BODY_BYTES)
        .await
        .map_err(|_| StatusCode::PAYLOAD_TOO_LARGE)?;

    let upstream = state
        .client
        .request(method.clone(), &url)
        .headers(headers)
        .body(body)
        .send()
        .await
        .map_err(|e| {
            warn!(error = %e, %url, "proxy: backend unreachable");
            StatusCode::BAD_GATEWAY
        })?;

    let status = upstream.status();
    let upstream_headers = forwardable_headers(upstream.headers());
    let bytes = upstream.bytes().await.map_err(|e| {
        warn!(error = %e, %url, "proxy: backend body failed");
        StatusCode::BAD_GATEWAY
    })?;
    info!(%method, %url, status = status.as_u16(), "proxy: forwarded");

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = upstream_headers;
    Ok(response)
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Build the proxy router.
pub fn router(backend: String, static_dir: Option<PathBuf>, client: reqwest::Client) -> Router {
    let state = ProxyState { client, backend };
    let router = Router::new()
        .route(API_PREFIX, any(forward))
        .route("/api/", any(forward))
        .route("/api/{*rest}", any(forward))
        .with_state(state);

    let router = match static_dir {
        Some(dir) => {
            let index = ServeFile::new(dir.join("index.html"));
            router.fallback_service(ServeDir::new(dir).fallback(index))
        }
        None => router.fallback(not_found),
    };
    router.layer(TraceLayer::new_for_http())
}

/// Serve the proxy until the process is stopped.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails.
pub async fn run(listen: SocketAddr, backend: String, static_dir: Option<PathBuf>) -> Result<(), CliError> {
    let client = reqwest::Client::builder().build()?;
    let app = router(backend.clone(), static_dir.clone(), client);
    let listener = tokio::net::TcpListener::bind(listen).await.map_err(CliError::Io)?;

    info!(%listen, %backend, static_dir = ?static_dir, "proxy listening");
    axum::serve(listener, app).await.map_err(CliError::Io)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
