//! Mock Mail Service Implementation
//!
//! Prints mails to the console instead of sending them and keeps every
//! delivered message in an in-memory outbox.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{info, warn};
use uuid::Uuid;

use accounts_shared::utils::mask_email;

use super::mail_service::{MailMessage, MailService};
use crate::InfrastructureError;

/// Mock mail service for development and testing
#[derive(Clone)]
pub struct MockMailService {
    message_count: Arc<AtomicU64>,
    outbox: Arc<Mutex<Vec<MailMessage>>>,
    simulate_failure: Arc<AtomicBool>,
    console_output: bool,
}

impl MockMailService {
    /// Create a new mock mail service with console output enabled
    pub fn new() -> Self {
        Self::with_options(true, false)
    }

    /// Create a mock service with configurable options
    pub fn with_options(console_output: bool, simulate_failure: bool) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            outbox: Arc::new(Mutex::new(Vec::new())),
            simulate_failure: Arc::new(AtomicBool::new(simulate_failure)),
            console_output,
        }
    }

    /// Get the total number of mails sent
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Reset the counter and clear the outbox
    pub fn reset(&self) {
        self.message_count.store(0, Ordering::SeqCst);
        self.outbox
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&self, simulate: bool) {
        self.simulate_failure.store(simulate, Ordering::SeqCst);
    }

    /// Every mail delivered so far, oldest first
    pub fn sent_messages(&self) -> Vec<MailMessage> {
        self.outbox
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Most recent mail addressed to `to`
    pub fn last_message_to(&self, to: &str) -> Option<MailMessage> {
        self.outbox
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .rev()
            .find(|m| m.to.iter().any(|r| r == to))
            .cloned()
    }
}

impl Default for MockMailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MailService for MockMailService {
    async fn send_mail(&self, message: &MailMessage) -> Result<String, InfrastructureError> {
        let masked = mask_email(message.primary_recipient());

        if self.simulate_failure.load(Ordering::SeqCst) {
            warn!(recipient = %masked, "Mock mail service simulating failure");
            return Err(InfrastructureError::Mail(
                "Simulated mail sending failure".to_string(),
            ));
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        if self.console_output {
            println!("\n{}", "=".repeat(60));
            println!("MOCK MAIL SERVICE - MESSAGE #{}", count);
            println!("{}", "=".repeat(60));
            println!("From: {}", message.from);
            println!("To: {}", message.to.join(", "));
            println!("Subject: {}", message.subject);
            println!("Message ID: {}", message_id);
            println!("{}", "-".repeat(60));
            println!("{}", message.text);
            println!("{}\n", "=".repeat(60));
        }

        self.outbox
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.clone());

        info!(
            target: "mail_service",
            provider = "mock",
            recipient = %masked,
            message_id = %message_id,
            subject = %message.subject,
            "Mail sent successfully (mock)"
        );

        Ok(message_id)
    }

    async fn is_available(&self) -> bool {
        !self.simulate_failure.load(Ordering::SeqCst)
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}
