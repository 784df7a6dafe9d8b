//! Error types for task domain validation and recurrence computation.

use thiserror::Error;

/// Error returned when a stored date is not a valid `YYYYMMDD` calendar date.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid date '{0}', expected YYYYMMDD")]
pub struct ParseTaskDateError(pub String);

/// Errors returned by the recurrence date engine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecurrenceError {
    /// The start date is not a valid `YYYYMMDD` calendar date.
    #[error(transparent)]
    InvalidDate(#[from] ParseTaskDateError),

    /// An empty rule was supplied where advancement was required.
    #[error("recurrence rule is missing")]
    MissingRule,

    /// The rule matches neither the day-interval nor the yearly grammar.
    #[error("unsupported recurrence rule '{0}'")]
    UnsupportedRule(String),

    /// The day count of a `d N` rule is malformed or outside `[1, 400]`.
    #[error("invalid day interval in rule '{0}', expected d 1..=400")]
    InvalidInterval(String),

    /// The start date is in the past and no rule was given to advance it.
    #[error("start date is in the past and no recurrence rule is set")]
    PastDateNoRule,

    /// The next occurrence cannot be written as an 8-digit date.
    #[error("next occurrence falls outside the supported date range")]
    DateOutOfRange,
}

/// Errors returned while validating task lifecycle requests.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    MissingTitle,

    /// The task identifier was not supplied.
    #[error("task identifier must not be empty")]
    MissingId,

    /// No task exists for the supplied identifier.
    #[error("task not found: {0}")]
    NotFound(String),

    /// The task date is not a valid `YYYYMMDD` calendar date.
    #[error(transparent)]
    InvalidDate(#[from] ParseTaskDateError),

    /// The recurrence rule is invalid or the engine could not advance the date.
    #[error(transparent)]
    Recurrence(#[from] RecurrenceError),
}
