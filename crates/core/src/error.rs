//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// caller-imposed limits, bad positions). Rule parsing failures have their own
/// error type in `merchkit-collections`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A caller-imposed ceiling was exceeded.
    #[error("{what} limit exceeded (limit: {limit}, actual: {actual})")]
    LimitExceeded {
        what: &'static str,
        limit: usize,
        actual: usize,
    },

    /// A position was outside the bounds of the sequence it refers to.
    #[error("index {index} out of range (len: {len})")]
    OutOfRange { index: usize, len: usize },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn limit_exceeded(what: &'static str, limit: usize, actual: usize) -> Self {
        Self::LimitExceeded {
            what,
            limit,
            actual,
        }
    }

    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::OutOfRange { index, len }
    }
}
