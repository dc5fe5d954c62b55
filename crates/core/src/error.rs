//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is caller-recoverable: background tasks log these and
/// continue, request handlers map them to HTTP responses. There is no
/// fatal error class inside the core.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An entity failed validation before any store mutation.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A requested key was absent at the time the lock was acquired.
    #[error("not found")]
    NotFound,

    /// A recommendation query matched no recipe.
    #[error("no matching recipe")]
    NoMatch,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn no_match() -> Self {
        Self::NoMatch
    }
}
