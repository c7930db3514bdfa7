//! Inputs and results of account service operations

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::{AccountFilter, AccountSort};

/// Registration input
#[derive(Debug, Clone)]
pub struct RegisterInput {
    pub name: Option<String>,
    pub email: String,
    pub password: String,
}

/// Result of registering an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResult {
    /// Id of the created account
    pub id: Uuid,
    /// Whether the activation mail was accepted by the mail provider
    pub notification_delivered: bool,
}

/// Result of activating an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationResult {
    pub id: Uuid,
}

/// Result of issuing a password reset code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordResetRequested {
    pub id: Uuid,
    pub email: String,
}

/// Password reset completion input
#[derive(Debug, Clone)]
pub struct PasswordResetInput {
    pub email: String,
    pub code: String,
    pub password: String,
    pub confirm_password: String,
}

/// Result of completing a password reset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordResetResult {
    pub success: bool,
}

/// Listing query
#[derive(Debug, Clone, Default)]
pub struct AccountQuery {
    pub filter: AccountFilter,
    pub sort: AccountSort,
    pub current: Option<u32>,
    pub page_size: Option<u32>,
}
