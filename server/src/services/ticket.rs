//! Ticket service: persistence for support tickets.
//!
//! DESIGN
//! ======
//! Tickets are inserted once, already triaged, and afterwards only their
//! status changes. Enum columns are stored as their wire strings; a value
//! this build does not recognize is surfaced as `Other(raw)` rather than
//! failing the whole query.

use sqlx::PgPool;
use tickets::{NewTicket, Ticket, TicketCategory, TicketPriority, TicketStatus};
use tracing::info;

use super::triage::Triage;

pub const DEFAULT_LIST_LIMIT: i64 = 100;
pub const MAX_LIST_LIMIT: i64 = 500;

const TICKET_COLUMNS: &str = "id, title, description, category, priority, status, resolution";

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum TicketError {
    #[error("ticket not found: {0}")]
    NotFound(i64),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Raw row shape of the `tickets` table, in [`TICKET_COLUMNS`] order.
pub(crate) type TicketRow = (i64, String, String, String, String, String, Option<String>);

pub(crate) fn row_to_ticket(row: TicketRow) -> Ticket {
    let (id, title, description, category, priority, status, resolution) = row;
    Ticket {
        id,
        title,
        description,
        category: TicketCategory::from(category),
        priority: TicketPriority::from(priority),
        status: TicketStatus::from(status),
        resolution,
    }
}

/// Clamp list pagination to `skip >= 0` and `1 <= limit <= MAX_LIST_LIMIT`.
#[must_use]
pub fn normalize_page(skip: Option<i64>, limit: Option<i64>) -> (i64, i64) {
    let skip = skip.unwrap_or(0).max(0);
    let limit = limit.unwrap_or(DEFAULT_LIST_LIMIT).clamp(1, MAX_LIST_LIMIT);
    (skip, limit)
}

// =============================================================================
// CRUD
// =============================================================================

/// Insert a validated, triaged ticket and return it with its assigned id.
///
/// # Errors
///
/// Returns a database error if the insert fails.
pub async fn create_ticket(pool: &PgPool, new: &NewTicket, triage: &Triage) -> Result<Ticket, TicketError> {
    let sql = format!(
        "INSERT INTO tickets (title, description, category, priority, status, resolution)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING {TICKET_COLUMNS}"
    );
    let row = sqlx::query_as::<_, TicketRow>(&sql)
        .bind(&new.title)
        .bind(&new.description)
        .bind(triage.category.as_str())
        .bind(triage.priority.as_str())
        .bind(triage.status.as_str())
        .bind(&triage.resolution)
        .fetch_one(pool)
        .await?;

    let ticket = row_to_ticket(row);
    info!(ticket_id = ticket.id, category = %ticket.category, priority = %ticket.priority, status = %ticket.status, "ticket created");
    Ok(ticket)
}

/// List tickets newest first, so the default page always holds the latest.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_tickets(pool: &PgPool, skip: i64, limit: i64) -> Result<Vec<Ticket>, TicketError> {
    let sql = format!("SELECT {TICKET_COLUMNS} FROM tickets ORDER BY id DESC OFFSET $1 LIMIT $2");
    let rows = sqlx::query_as::<_, TicketRow>(&sql)
        .bind(skip)
        .bind(limit)
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(row_to_ticket).collect())
}

/// Fetch one ticket.
///
/// # Errors
///
/// Returns `NotFound` if no ticket has this id, or a database error.
pub async fn get_ticket(pool: &PgPool, id: i64) -> Result<Ticket, TicketError> {
    let sql = format!("SELECT {TICKET_COLUMNS} FROM tickets WHERE id = $1");
    let row = sqlx::query_as::<_, TicketRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(TicketError::NotFound(id))?;

    Ok(row_to_ticket(row))
}

/// Move a ticket to a new status.
///
/// # Errors
///
/// Returns `NotFound` if no ticket has this id, or a database error.
pub async fn update_ticket_status(pool: &PgPool, id: i64, status: &TicketStatus) -> Result<Ticket, TicketError> {
    let sql = format!("UPDATE tickets SET status = $2 WHERE id = $1 RETURNING {TICKET_COLUMNS}");
    let row = sqlx::query_as::<_, TicketRow>(&sql)
        .bind(id)
        .bind(status.as_str())
        .fetch_optional(pool)
        .await?
        .ok_or(TicketError::NotFound(id))?;

    let ticket = row_to_ticket(row);
    info!(ticket_id = id, status = %ticket.status, "ticket status updated");
    Ok(ticket)
}

#[cfg(test)]
#[path = "ticket_test.rs"]
mod tests;
