//! Validation errors for boxer attributes and request parameters.

use thiserror::Error;

/// Errors produced when validating boxer attributes or parsing request
/// parameters.
#[derive(Debug, Error, PartialEq)]
pub enum DomainError {
    #[error("invalid weight: {0}, must be at least 125")]
    InvalidWeight(i32),

    #[error("invalid height: {0}, must be greater than 0")]
    InvalidHeight(i32),

    #[error("invalid reach: {0}, must be greater than 0")]
    InvalidReach(f64),

    #[error("invalid age: {0}, must be between 18 and 40")]
    InvalidAge(i32),

    #[error("invalid fight result: expected 'win' or 'loss', got '{0}'")]
    UnknownOutcome(String),

    #[error("invalid sort key: expected 'wins' or 'win_pct', got '{0}'")]
    UnknownSortKey(String),
}
