//! Unit tests for the HTTP mail provider

use reqwest::StatusCode;

use accounts_shared::config::MailConfig;

use crate::mail::http_mail::{classify_status, ResponseClass};
use crate::mail::{HttpMailConfig, HttpMailService};
use crate::InfrastructureError;

#[test]
fn test_classify_status() {
    assert_eq!(classify_status(StatusCode::OK), ResponseClass::Delivered);
    assert_eq!(classify_status(StatusCode::ACCEPTED), ResponseClass::Delivered);
    assert_eq!(classify_status(StatusCode::TOO_MANY_REQUESTS), ResponseClass::Retryable);
    assert_eq!(classify_status(StatusCode::BAD_GATEWAY), ResponseClass::Retryable);
    assert_eq!(classify_status(StatusCode::SERVICE_UNAVAILABLE), ResponseClass::Retryable);
    assert_eq!(classify_status(StatusCode::BAD_REQUEST), ResponseClass::Rejected);
    assert_eq!(classify_status(StatusCode::UNAUTHORIZED), ResponseClass::Rejected);
    assert_eq!(classify_status(StatusCode::UNPROCESSABLE_ENTITY), ResponseClass::Rejected);
}

#[test]
fn test_config_from_mail_config() {
    let mail = MailConfig::default().with_api_key("key");

    let config = HttpMailConfig::from_mail_config(&mail);
    assert_eq!(config.api_key, "key");
    assert_eq!(config.api_url, mail.api_url);
    assert_eq!(config.max_retries, mail.max_retries);
}

#[test]
fn test_new_requires_api_key() {
    let config = HttpMailConfig::from_mail_config(&MailConfig::default());

    let result = HttpMailService::new(config);
    assert!(matches!(result, Err(InfrastructureError::Config(_))));
}
