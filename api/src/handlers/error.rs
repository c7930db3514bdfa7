//! Mapping of domain and request errors to localized HTTP responses

use actix_web::http::{header, StatusCode};
use actix_web::{HttpRequest, HttpResponse};
use std::collections::HashMap;

use accounts_core::errors::{AccountError, DomainError};
use accounts_shared::errors::ErrorResponse;

use crate::i18n::{format_message, get_error_message, Language};

/// Preferred language from the `Accept-Language` header
pub fn extract_language(req: &HttpRequest) -> Language {
    req.headers()
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .map(Language::from_accept_language)
        .unwrap_or_default()
}

/// Message key and placeholder values for a domain error
fn error_key(error: &DomainError) -> (&'static str, HashMap<&'static str, String>) {
    let mut params = HashMap::new();
    let key = match error {
        DomainError::Account(account_error) => match account_error {
            AccountError::InvalidId { id } => {
                params.insert("id", id.clone());
                "invalid_id"
            }
            AccountError::DuplicateEmail { email } => {
                params.insert("email", email.clone());
                "email_exists"
            }
            AccountError::InvalidOrExpiredCode => "invalid_code",
            AccountError::AccountNotFound => "account_not_found",
            AccountError::AlreadyActive => "account_already_active",
            AccountError::PasswordMismatch => "password_mismatch",
            AccountError::NotificationFailure { .. } => "notification_failure",
        },
        DomainError::Validation { .. } => "validation_error",
        DomainError::NotFound { .. } => "not_found",
        DomainError::Database { .. } | DomainError::Internal { .. } => "internal_error",
    };
    (key, params)
}

/// Build a localized error response for a message key
pub fn localized_error(key: &str, params: &HashMap<&str, String>, lang: Language) -> HttpResponse {
    let Some(message) = get_error_message(key).or_else(|| get_error_message("internal_error"))
    else {
        return HttpResponse::InternalServerError().finish();
    };

    let status =
        StatusCode::from_u16(message.http_status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = ErrorResponse::new(message.code, format_message(message.text(lang), params));
    HttpResponse::build(status).json(body)
}

/// Convert a domain error into its HTTP response
pub fn domain_error_response(error: &DomainError, lang: Language) -> HttpResponse {
    let (key, params) = error_key(error);

    match error {
        DomainError::Database { .. } | DomainError::Internal { .. } => {
            tracing::error!(error = %error, "Request failed with an internal error");
        }
        DomainError::Account(AccountError::NotificationFailure { reason }) => {
            tracing::warn!(reason = %reason, "Request failed to deliver a notification");
        }
        _ => {
            tracing::debug!(error = %error, "Request rejected");
        }
    }

    // Core validation text goes out as a detail
    if let DomainError::Validation { message } = error {
        return validation_message_response(message, lang);
    }

    localized_error(key, &params, lang)
}

/// Response for a request rejected by DTO validation
pub fn validation_error_response(errors: &validator::ValidationErrors, lang: Language) -> HttpResponse {
    let mut fields: HashMap<String, Vec<String>> = HashMap::new();
    for (field, field_errors) in errors.field_errors() {
        let messages = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        fields.insert(field.to_string(), messages);
    }

    tracing::debug!(?fields, "Request validation failed");

    let message = get_error_message("validation_error")
        .map(|m| m.text(lang))
        .unwrap_or("Invalid request data");
    let body = ErrorResponse::new(accounts_shared::error_codes::VALIDATION_ERROR, message)
        .add_detail("fields", fields);
    HttpResponse::BadRequest().json(body)
}

/// Response for a malformed body or query string, or a core validation message
pub fn validation_message_response(detail: &str, lang: Language) -> HttpResponse {
    let message = get_error_message("validation_error")
        .map(|m| m.text(lang))
        .unwrap_or("Invalid request data");
    let body = ErrorResponse::new(accounts_shared::error_codes::VALIDATION_ERROR, message)
        .add_detail("reason", detail);
    HttpResponse::BadRequest().json(body)
}
