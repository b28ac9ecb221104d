//! Utility helpers shared across client UI modules.

pub mod badge;
pub mod markdown;
