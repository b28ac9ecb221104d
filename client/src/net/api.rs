//! REST API helpers for communicating with the ticket backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): stubs that report the user-facing error,
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure collapses to one fixed user-facing message per operation.
//! The underlying cause is logged to the browser console.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use tickets::{NewTicket, Ticket};

pub const TICKETS_ENDPOINT: &str = "/api/tickets";
pub const FETCH_TICKETS_FAILED: &str = "Could not fetch tickets from the server.";
pub const CREATE_TICKET_FAILED: &str = "Failed to create ticket. Please try again.";

#[cfg(any(test, feature = "csr"))]
fn status_failed_message(action: &str, status: u16) -> String {
    format!("{action} failed: {status}")
}

/// Fetch all tickets from `GET /api/tickets`, in server order.
///
/// # Errors
///
/// Returns [`FETCH_TICKETS_FAILED`] on transport failure, a non-2xx status,
/// or an undecodable body.
pub async fn fetch_tickets() -> Result<Vec<Ticket>, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(TICKETS_ENDPOINT).send().await.map_err(|e| {
            log::warn!("fetch tickets: {e}");
            FETCH_TICKETS_FAILED.to_owned()
        })?;
        if !resp.ok() {
            log::warn!("{}", status_failed_message("fetch tickets", resp.status()));
            return Err(FETCH_TICKETS_FAILED.to_owned());
        }
        resp.json::<Vec<Ticket>>().await.map_err(|e| {
            log::warn!("fetch tickets decode: {e}");
            FETCH_TICKETS_FAILED.to_owned()
        })
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(FETCH_TICKETS_FAILED.to_owned())
    }
}

/// Create a ticket via `POST /api/tickets`.
///
/// # Errors
///
/// Returns [`CREATE_TICKET_FAILED`] on transport failure, a non-2xx status,
/// or an undecodable body.
pub async fn create_ticket(new: &NewTicket) -> Result<Ticket, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(TICKETS_ENDPOINT)
            .json(new)
            .map_err(|e| {
                log::warn!("create ticket encode: {e}");
                CREATE_TICKET_FAILED.to_owned()
            })?
            .send()
            .await
            .map_err(|e| {
                log::warn!("create ticket: {e}");
                CREATE_TICKET_FAILED.to_owned()
            })?;
        if !resp.ok() {
            log::warn!("{}", status_failed_message("create ticket", resp.status()));
            return Err(CREATE_TICKET_FAILED.to_owned());
        }
        resp.json::<Ticket>().await.map_err(|e| {
            log::warn!("create ticket decode: {e}");
            CREATE_TICKET_FAILED.to_owned()
        })
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = new;
        Err(CREATE_TICKET_FAILED.to_owned())
    }
}
