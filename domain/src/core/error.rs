//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Chat message content must not be empty")]
    EmptyMessage,

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}
