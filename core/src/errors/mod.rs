//! Domain-specific error types and error handling.

mod types;

pub use types::AccountError;

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to account rejections
    #[error(transparent)]
    Account(#[from] AccountError),
}

impl DomainError {
    /// The account rejection carried by this error, if any
    pub fn as_account_error(&self) -> Option<&AccountError> {
        match self {
            DomainError::Account(err) => Some(err),
            _ => None,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
