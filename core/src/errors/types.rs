//! Account-specific error types
//!
//! The messages here are for logs. User-facing, localized messages are
//! configured in the presentation layer and keyed off the variant.

use thiserror::Error;

/// Rejections produced by account operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("Invalid account id: {id}")]
    InvalidId { id: String },

    #[error("Email already registered: {email}")]
    DuplicateEmail { email: String },

    #[error("Verification code is invalid or expired")]
    InvalidOrExpiredCode,

    #[error("Account not found")]
    AccountNotFound,

    #[error("Account is already active")]
    AlreadyActive,

    #[error("Password and confirmation do not match")]
    PasswordMismatch,

    #[error("Notification delivery failed: {reason}")]
    NotificationFailure { reason: String },
}
