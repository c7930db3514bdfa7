//! Mail service trait and message type

use async_trait::async_trait;
use serde::Serialize;

use crate::InfrastructureError;

/// A fully rendered mail ready for delivery
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MailMessage {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
    pub text: String,
}

impl MailMessage {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        subject: impl Into<String>,
        html: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: vec![to.into()],
            subject: subject.into(),
            html: html.into(),
            text: text.into(),
        }
    }

    /// First recipient, used for logging
    pub fn primary_recipient(&self) -> &str {
        self.to.first().map(String::as_str).unwrap_or_default()
    }
}

/// Mail service trait for sending rendered mails
#[async_trait]
pub trait MailService: Send + Sync {
    /// Send a mail and return the provider message id
    async fn send_mail(&self, message: &MailMessage) -> Result<String, InfrastructureError>;

    /// Whether the provider is currently accepting mail
    async fn is_available(&self) -> bool {
        true
    }

    /// Short provider name for logs
    fn provider_name(&self) -> &'static str;
}
