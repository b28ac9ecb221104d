//! Ticket REST routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use tickets::{NewTicket, Ticket, TicketStatus};
use tracing::{info, warn};

use crate::services::ticket::{self, TicketError};
use crate::services::triage;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdateBody {
    pub status: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct RootStatus {
    pub status: &'static str,
}

pub(crate) fn ticket_error_to_status(err: TicketError) -> StatusCode {
    match err {
        TicketError::NotFound(_) => StatusCode::NOT_FOUND,
        TicketError::Database(e) => {
            warn!(error = %e, "ticket query failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// `GET /`: liveness message for API clients.
pub async fn read_root() -> Json<RootStatus> {
    Json(RootStatus { status: "API is running" })
}

/// `GET /tickets`: list tickets, newest first.
pub async fn list_tickets(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Ticket>>, StatusCode> {
    let (skip, limit) = ticket::normalize_page(params.skip, params.limit);
    let rows = ticket::list_tickets(&state.pool, skip, limit)
        .await
        .map_err(ticket_error_to_status)?;
    Ok(Json(rows))
}

/// `POST /tickets`: validate, triage and store a new ticket.
pub async fn create_ticket(
    State(state): State<AppState>,
    Json(body): Json<NewTicket>,
) -> Result<(StatusCode, Json<Ticket>), StatusCode> {
    let new = body.validate().map_err(|e| {
        info!(error = %e, "ticket rejected");
        StatusCode::UNPROCESSABLE_ENTITY
    })?;

    let triage = triage::triage_ticket(state.llm.as_ref(), &new.description).await;
    let created = ticket::create_ticket(&state.pool, &new, &triage)
        .await
        .map_err(ticket_error_to_status)?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /tickets/{id}`: fetch one ticket.
pub async fn get_ticket(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<Ticket>, StatusCode> {
    let row = ticket::get_ticket(&state.pool, id)
        .await
        .map_err(ticket_error_to_status)?;
    Ok(Json(row))
}

/// `PATCH /tickets/{id}`: move a ticket to another known status.
pub async fn update_ticket_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<StatusUpdateBody>,
) -> Result<Json<Ticket>, StatusCode> {
    let Some(status) = TicketStatus::parse(&body.status) else {
        return Err(StatusCode::BAD_REQUEST);
    };

    let row = ticket::update_ticket_status(&state.pool, id, &status)
        .await
        .map_err(ticket_error_to_status)?;
    Ok(Json(row))
}

#[cfg(test)]
#[path = "tickets_test.rs"]
mod tests;
