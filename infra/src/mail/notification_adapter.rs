//! Adapter implementing the core NotificationSender trait on top of a mail service

use async_trait::async_trait;
use std::sync::Arc;

use accounts_core::domain::value_objects::Notification;
use accounts_core::services::NotificationSender;
use accounts_shared::config::MailConfig;

use super::mail_service::{MailMessage, MailService};
use super::templates::render_notification;

/// Renders notifications and hands them to a [`MailService`]
pub struct MailNotificationSender {
    mail: Arc<dyn MailService>,
    from: String,
    brand_name: String,
}

impl MailNotificationSender {
    pub fn new(
        mail: Arc<dyn MailService>,
        from: impl Into<String>,
        brand_name: impl Into<String>,
    ) -> Self {
        Self {
            mail,
            from: from.into(),
            brand_name: brand_name.into(),
        }
    }

    /// Build from the shared mail configuration
    pub fn from_config(mail: Arc<dyn MailService>, config: &MailConfig) -> Self {
        Self::new(mail, config.from.clone(), config.brand_name.clone())
    }

    /// Underlying mail provider
    pub fn mail_service(&self) -> &Arc<dyn MailService> {
        &self.mail
    }
}

#[async_trait]
impl NotificationSender for MailNotificationSender {
    async fn send(&self, notification: &Notification) -> Result<String, String> {
        let rendered = render_notification(notification, &self.brand_name);
        let message = MailMessage::new(
            self.from.clone(),
            notification.to.clone(),
            rendered.subject,
            rendered.html,
            rendered.text,
        );

        tracing::debug!(
            template = notification.template.template_name(),
            provider = self.mail.provider_name(),
            "Dispatching notification mail"
        );

        self.mail
            .send_mail(&message)
            .await
            .map_err(|e| e.to_string())
    }
}
