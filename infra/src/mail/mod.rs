//! Mail Service Module
//!
//! Mail delivery for account notifications.
//!
//! ## Features
//!
//! - **Mail Service Trait**: Common interface for all mail providers
//! - **Mock Implementation**: Console output and an in-memory outbox for development
//! - **HTTP Provider**: Transactional-mail REST API with retry and backoff
//! - **Templates**: Activation and password reset mails rendered to HTML and text
//! - **Notification Adapter**: Bridges the core `NotificationSender` trait

use std::sync::Arc;

use accounts_shared::config::{Environment, MailConfig, MailProvider};

use crate::InfrastructureError;

pub mod mail_service;
pub mod mock_mail;
pub mod notification_adapter;
pub mod templates;

#[cfg(feature = "http-mail")]
pub mod http_mail;

pub use mail_service::{MailMessage, MailService};
pub use mock_mail::MockMailService;
pub use notification_adapter::MailNotificationSender;
pub use templates::{render_notification, RenderedMail};

#[cfg(feature = "http-mail")]
pub use http_mail::{HttpMailConfig, HttpMailService};

#[cfg(test)]
mod tests;

/// Create the mail service selected by the configuration
///
/// Fails when the configured provider cannot be built, e.g. when the HTTP
/// provider has no API key.
pub fn create_mail_service(config: &MailConfig) -> Result<Arc<dyn MailService>, InfrastructureError> {
    match config.provider {
        MailProvider::Mock => Ok(Arc::new(MockMailService::new())),
        #[cfg(feature = "http-mail")]
        MailProvider::Http => {
            let service = HttpMailService::new(HttpMailConfig::from_mail_config(config))?;
            Ok(Arc::new(service))
        }
        #[cfg(not(feature = "http-mail"))]
        MailProvider::Http => Err(InfrastructureError::Config(
            "HTTP mail support is not compiled in".to_string(),
        )),
    }
}

/// Create the mail service for a deployment environment
///
/// Development falls back to the mock provider when the configured one
/// cannot be built. Every other environment gets the error, and an explicitly
/// configured mock provider there is logged as a warning.
pub fn create_mail_service_for(
    config: &MailConfig,
    environment: Environment,
) -> Result<Arc<dyn MailService>, InfrastructureError> {
    match create_mail_service(config) {
        Ok(service) => {
            if service.provider_name() == "mock" && !environment.is_development() {
                tracing::warn!(
                    environment = %environment,
                    "Mock mail provider configured, notifications will not be delivered"
                );
            }
            Ok(service)
        }
        Err(e) if environment.is_development() => {
            tracing::error!(error = %e, "Failed to initialize mail service");
            tracing::warn!("Falling back to mock mail service");
            Ok(Arc::new(MockMailService::new()))
        }
        Err(e) => {
            tracing::error!(error = %e, environment = %environment, "Failed to initialize mail service");
            Err(e)
        }
    }
}
