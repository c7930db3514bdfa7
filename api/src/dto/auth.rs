//! Request and response bodies of the authentication endpoints

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use accounts_core::services::{PasswordResetInput, RegisterInput};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Display name; the email is used when absent
    #[validate(length(max = 100))]
    pub name: Option<String>,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 6, max = 128))]
    pub password: String,
}

impl From<RegisterRequest> for RegisterInput {
    fn from(request: RegisterRequest) -> Self {
        RegisterInput {
            name: request.name,
            email: request.email,
            password: request.password,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ActivateRequest {
    /// Activation code from the registration mail
    #[validate(length(min = 1, max = 64))]
    pub code: String,
}

/// Body of the endpoints that only take an email
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EmailRequest {
    #[validate(email)]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = 64))]
    pub code: String,

    #[validate(length(min = 6, max = 128))]
    pub password: String,

    #[validate(length(min = 1, max = 128))]
    pub confirm_password: String,
}

impl From<ResetPasswordRequest> for PasswordResetInput {
    fn from(request: ResetPasswordRequest) -> Self {
        PasswordResetInput {
            email: request.email,
            code: request.code,
            password: request.password,
            confirm_password: request.confirm_password,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub id: Uuid,
    pub notification_delivered: bool,
}

/// Id of the account an operation acted on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountIdResponse {
    pub id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgotPasswordResponse {
    pub id: Uuid,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordResponse {
    pub success: bool,
}
