//! HTTP Mail Service Implementation
//!
//! Delivers mails through a transactional-mail REST API (Resend-compatible
//! `POST /emails` with a bearer key).
//!
//! ## Features
//!
//! - Automatic retry with exponential backoff on 429 and 5xx responses
//! - No retry on other client errors
//! - Recipient masking in logs

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use accounts_shared::config::MailConfig;
use accounts_shared::utils::mask_email;

use super::mail_service::{MailMessage, MailService};
use crate::InfrastructureError;

/// HTTP mail provider configuration
#[derive(Debug, Clone)]
pub struct HttpMailConfig {
    /// Endpoint receiving the JSON payload
    pub api_url: String,
    /// Bearer API key
    pub api_key: String,
    /// Maximum attempts per mail
    pub max_retries: u32,
    /// Initial retry delay in milliseconds
    pub retry_delay_ms: u64,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl HttpMailConfig {
    /// Derive provider settings from the shared mail configuration
    pub fn from_mail_config(config: &MailConfig) -> Self {
        Self {
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone().unwrap_or_default(),
            max_retries: config.max_retries.max(1),
            retry_delay_ms: 500,
            request_timeout_secs: config.timeout_seconds,
        }
    }
}

/// Outcome class of a provider response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseClass {
    Delivered,
    Retryable,
    Rejected,
}

/// Classify an HTTP status returned by the mail API
pub fn classify_status(status: StatusCode) -> ResponseClass {
    if status.is_success() {
        ResponseClass::Delivered
    } else if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
        ResponseClass::Retryable
    } else {
        ResponseClass::Rejected
    }
}

#[derive(Debug, Deserialize)]
struct SendResponse {
    id: String,
}

/// HTTP mail service implementation
pub struct HttpMailService {
    client: Client,
    config: HttpMailConfig,
}

impl HttpMailService {
    /// Create a new HTTP mail service
    pub fn new(config: HttpMailConfig) -> Result<Self, InfrastructureError> {
        if config.api_key.trim().is_empty() {
            return Err(InfrastructureError::Config(
                "MAIL_API_KEY must be set for the HTTP mail provider".to_string(),
            ));
        }

        let client = ClientBuilder::new()
            .user_agent(concat!("accounts/", env!("CARGO_PKG_VERSION"), " (+reqwest)"))
            .tcp_nodelay(true)
            .pool_idle_timeout(Duration::from_secs(30))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!(api_url = %config.api_url, "HTTP mail service initialized");

        Ok(Self { client, config })
    }

    /// Send a mail with retry logic
    async fn send_with_retry(&self, message: &MailMessage) -> Result<String, InfrastructureError> {
        let recipient = mask_email(message.primary_recipient());
        let mut attempts = 0;
        let mut delay = Duration::from_millis(self.config.retry_delay_ms);

        loop {
            attempts += 1;
            debug!(
                attempt = attempts,
                max_retries = self.config.max_retries,
                recipient = %recipient,
                "Sending mail"
            );

            let failure = match self
                .client
                .post(&self.config.api_url)
                .bearer_auth(&self.config.api_key)
                .json(message)
                .send()
                .await
            {
                Ok(response) => {
                    let status = response.status();
                    let body = response.text().await.unwrap_or_default();

                    match classify_status(status) {
                        ResponseClass::Delivered => {
                            let message_id = serde_json::from_str::<SendResponse>(&body)
                                .map(|r| r.id)
                                .unwrap_or(body);
                            info!(
                                target: "mail_service",
                                provider = "http",
                                recipient = %recipient,
                                message_id = %message_id,
                                "Mail sent successfully"
                            );
                            return Ok(message_id);
                        }
                        ResponseClass::Rejected => {
                            error!(%status, recipient = %recipient, "Mail API rejected the request");
                            return Err(InfrastructureError::Mail(format!(
                                "Mail API error: HTTP {}: {}",
                                status, body
                            )));
                        }
                        ResponseClass::Retryable => format!("HTTP {}: {}", status, body),
                    }
                }
                Err(e) if e.is_timeout() || e.is_connect() => e.to_string(),
                Err(e) => return Err(InfrastructureError::Http(e)),
            };

            error!(
                attempt = attempts,
                max_retries = self.config.max_retries,
                error = %failure,
                "Failed to send mail"
            );

            if attempts >= self.config.max_retries {
                return Err(InfrastructureError::Mail(format!(
                    "Failed to send mail after {} attempts: {}",
                    attempts, failure
                )));
            }

            warn!(delay_ms = delay.as_millis() as u64, "Retrying mail delivery");
            tokio::time::sleep(delay).await;
            delay *= 2;
        }
    }
}

#[async_trait]
impl MailService for HttpMailService {
    async fn send_mail(&self, message: &MailMessage) -> Result<String, InfrastructureError> {
        if message.to.is_empty() {
            return Err(InfrastructureError::Mail("Mail has no recipients".to_string()));
        }
        self.send_with_retry(message).await
    }

    fn provider_name(&self) -> &'static str {
        "http"
    }
}
