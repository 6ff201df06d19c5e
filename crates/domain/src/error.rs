//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The provided base URL is invalid or malformed.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// The base URL uses a scheme the verifier cannot speak.
    #[error("unsupported URL scheme: {0}")]
    UnsupportedScheme(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
