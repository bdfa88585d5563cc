//! Domain-level errors.
//!
//! These errors represent rule violations detected while building domain
//! values. They are independent of infrastructure concerns (database, CLI).

use thiserror::Error;

/// Errors raised when an account (or one of its parts) fails validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required field was not supplied
    #[error("{0} is required")]
    MissingField(&'static str),

    /// A field was supplied but violates its format rule
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

impl DomainError {
    /// Create a missing field error
    pub fn missing(field: &'static str) -> Self {
        DomainError::MissingField(field)
    }

    /// Create an invalid format error
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        DomainError::InvalidFormat(msg.into())
    }

    /// Name of the missing field, if this is a missing field error.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            DomainError::MissingField(field) => Some(field),
            DomainError::InvalidFormat(_) => None,
        }
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
