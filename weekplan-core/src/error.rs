//! Error types for the weekplan engine.

use thiserror::Error;

/// Field-level validation failures, surfaced to the caller with the
/// offending value. All of these are caller contract violations and are
/// rejected at the boundary before any date math runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title is required")]
    MissingTitle,

    #[error("Date must be in YYYY-MM-DD format: '{0}'")]
    InvalidDate(String),

    #[error("Time must be in HH:MM format: '{0}'")]
    InvalidTime(String),

    #[error("Cannot assign a date before today: {0}")]
    DateInPast(String),
}
