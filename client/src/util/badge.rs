//! Badge colour lookup for ticket metadata.
//!
//! Values come straight off the wire, so anything this build does not know
//! (a new status, a typo in storage) gets the neutral style.

#[cfg(test)]
#[path = "badge_test.rs"]
mod badge_test;

use tickets::{TicketCategory, TicketPriority, TicketStatus};

pub const NEUTRAL_BADGE: &str = "badge badge--neutral";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeKind {
    Category,
    Priority,
    Status,
}

/// CSS classes for a badge of `kind` showing `value`.
#[must_use]
pub fn badge_class(kind: BadgeKind, value: &str) -> &'static str {
    match (kind, value) {
        (BadgeKind::Priority, "high") => "badge badge--red",
        (BadgeKind::Priority, "medium") | (BadgeKind::Status, "in_progress") => "badge badge--yellow",
        (BadgeKind::Priority, "low") | (BadgeKind::Status, "resolved") => "badge badge--green",
        (BadgeKind::Category, "technical") => "badge badge--indigo",
        (BadgeKind::Category, "billing") => "badge badge--purple",
        (BadgeKind::Category, "general") => "badge badge--pink",
        (BadgeKind::Status, "open") => "badge badge--blue",
        (BadgeKind::Status, "escalated") => "badge badge--orange",
        (BadgeKind::Status, "closed") => "badge badge--gray",
        _ => NEUTRAL_BADGE,
    }
}

#[must_use]
pub fn category_badge(category: &TicketCategory) -> &'static str {
    badge_class(BadgeKind::Category, category.as_str())
}

#[must_use]
pub fn priority_badge(priority: &TicketPriority) -> &'static str {
    badge_class(BadgeKind::Priority, priority.as_str())
}

#[must_use]
pub fn status_badge(status: &TicketStatus) -> &'static str {
    badge_class(BadgeKind::Status, status.as_str())
}
