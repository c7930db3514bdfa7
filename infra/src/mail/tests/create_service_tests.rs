//! Unit tests for mail service creation

use accounts_shared::config::{AppConfig, Environment, MailConfig, MailProvider};

use crate::mail::{create_mail_service, create_mail_service_for};
use crate::InfrastructureError;

#[test]
fn test_create_mock_service() {
    let config = MailConfig::default().with_provider(MailProvider::Mock);

    let service = create_mail_service(&config).unwrap();
    assert_eq!(service.provider_name(), "mock");
}

#[test]
fn test_create_http_service_without_key_fails() {
    let config = MailConfig::default().with_provider(MailProvider::Http);

    let result = create_mail_service(&config);
    assert!(matches!(result, Err(InfrastructureError::Config(_))));
}

#[cfg(feature = "http-mail")]
#[test]
fn test_create_http_service_with_key() {
    let config = MailConfig::default()
        .with_provider(MailProvider::Http)
        .with_api_key("re_test_key");

    let service = create_mail_service(&config).unwrap();
    assert_eq!(service.provider_name(), "http");
}

#[test]
fn test_production_without_key_refuses_to_start() {
    let config = AppConfig::production();
    assert_eq!(config.mail.provider, MailProvider::Http);

    let result = create_mail_service_for(&config.mail, config.environment);
    assert!(matches!(result, Err(InfrastructureError::Config(_))));
}

#[test]
fn test_staging_without_key_refuses_to_start() {
    let config = MailConfig::for_environment(Environment::Staging);

    assert!(create_mail_service_for(&config, Environment::Staging).is_err());
}

#[test]
fn test_development_falls_back_to_mock() {
    let config = MailConfig::default().with_provider(MailProvider::Http);

    let service = create_mail_service_for(&config, Environment::Development).unwrap();
    assert_eq!(service.provider_name(), "mock");
}

#[test]
fn test_explicit_mock_is_honoured_outside_development() {
    let config = MailConfig::default().with_provider(MailProvider::Mock);

    let service = create_mail_service_for(&config, Environment::Production).unwrap();
    assert_eq!(service.provider_name(), "mock");
}
