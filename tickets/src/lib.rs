//! Shared ticket model for the REST boundary.
//!
//! This crate owns the JSON representation used by `server`, `client` and
//! `cli`. Triage enums are closed sets on the producing side, but decoding is
//! lossless: a value this build does not know survives as `Other(raw)` so an
//! older client never fails to render a newer server's ticket.

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;

use std::fmt;

use serde::{Deserialize, Serialize};

/// User-facing message for a submission missing title or description.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Title and description are required.";

// =============================================================================
// VALIDATION
// =============================================================================

/// Error returned by [`NewTicket::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TicketValidationError {
    /// Title or description is empty after trimming.
    #[error("Title and description are required.")]
    MissingRequiredFields,
}

// =============================================================================
// ENUMS
// =============================================================================

/// Triage category assigned by the classification agent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TicketCategory {
    Technical,
    Billing,
    #[default]
    General,
    /// Unrecognized wire value, kept verbatim.
    Other(String),
}

impl TicketCategory {
    /// All known categories, in display order.
    pub const KNOWN: [Self; 3] = [Self::Technical, Self::Billing, Self::General];

    /// Parse a known category. Returns `None` for anything else.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "technical" => Some(Self::Technical),
            "billing" => Some(Self::Billing),
            "general" => Some(Self::General),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Technical => "technical",
            Self::Billing => "billing",
            Self::General => "general",
            Self::Other(raw) => raw,
        }
    }

    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for TicketCategory {
    fn from(raw: String) -> Self {
        Self::parse(&raw).unwrap_or(Self::Other(raw))
    }
}

impl From<TicketCategory> for String {
    fn from(value: TicketCategory) -> Self {
        match value {
            TicketCategory::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

/// Urgency assigned by the priority agent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TicketPriority {
    High,
    Medium,
    #[default]
    Low,
    /// Unrecognized wire value, kept verbatim.
    Other(String),
}

impl TicketPriority {
    pub const KNOWN: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Other(raw) => raw,
        }
    }

    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for TicketPriority {
    fn from(raw: String) -> Self {
        Self::parse(&raw).unwrap_or(Self::Other(raw))
    }
}

impl From<TicketPriority> for String {
    fn from(value: TicketPriority) -> Self {
        match value {
            TicketPriority::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

/// Lifecycle status of a ticket.
///
/// `Escalated` is what triage assigns when the resolution agent could not
/// offer a direct fix.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TicketStatus {
    #[default]
    Open,
    InProgress,
    Resolved,
    Escalated,
    Closed,
    /// Unrecognized wire value, kept verbatim.
    Other(String),
}

impl TicketStatus {
    pub const KNOWN: [Self; 5] = [Self::Open, Self::InProgress, Self::Resolved, Self::Escalated, Self::Closed];

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "open" => Some(Self::Open),
            "in_progress" => Some(Self::InProgress),
            "resolved" => Some(Self::Resolved),
            "escalated" => Some(Self::Escalated),
            "closed" => Some(Self::Closed),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
            Self::Escalated => "escalated",
            Self::Closed => "closed",
            Self::Other(raw) => raw,
        }
    }

    /// Human label: wire value with underscores shown as spaces.
    #[must_use]
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ")
    }

    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for TicketStatus {
    fn from(raw: String) -> Self {
        Self::parse(&raw).unwrap_or(Self::Other(raw))
    }
}

impl From<TicketStatus> for String {
    fn from(value: TicketStatus) -> Self {
        match value {
            TicketStatus::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// TICKET
// =============================================================================

/// A persisted support ticket as returned by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Server-assigned identifier, increasing with creation order.
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub category: TicketCategory,
    #[serde(default)]
    pub priority: TicketPriority,
    #[serde(default)]
    pub status: TicketStatus,
    /// Agent-suggested first response, if triage produced one.
    #[serde(default)]
    pub resolution: Option<String>,
}

/// Request body for ticket creation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTicket {
    pub title: String,
    pub description: String,
}

impl NewTicket {
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into() }
    }

    /// Return a trimmed copy, or an error if either field is blank.
    ///
    /// # Errors
    ///
    /// Returns [`TicketValidationError::MissingRequiredFields`] when the title
    /// or the description is empty after trimming.
    pub fn validate(&self) -> Result<Self, TicketValidationError> {
        let title = self.title.trim();
        let description = self.description.trim();
        if title.is_empty() || description.is_empty() {
            return Err(TicketValidationError::MissingRequiredFields);
        }
        Ok(Self::new(title, description))
    }
}

/// Sort tickets newest first (descending id).
pub fn sort_newest_first(tickets: &mut [Ticket]) {
    tickets.sort_by(|a, b| b.id.cmp(&a.id));
}
