//! Mock implementations for testing the account service

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::domain::value_objects::{Notification, NotificationTemplate};
use crate::repositories::InMemoryAccountRepository;
use crate::services::account::traits::{NotificationSender, PasswordHasher};
use crate::services::account::{AccountService, AccountServiceConfig};

// Mock notification sender recording every delivered message
pub struct MockNotificationSender {
    pub sent: Arc<Mutex<Vec<Notification>>>,
    should_fail: AtomicBool,
}

impl MockNotificationSender {
    pub fn new(should_fail: bool) -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            should_fail: AtomicBool::new(should_fail),
        }
    }

    pub fn set_failing(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn last(&self) -> Option<Notification> {
        self.sent.lock().unwrap().last().cloned()
    }

    /// Code carried by the most recent activation mail to `to`
    pub fn last_activation_code(&self, to: &str) -> Option<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find_map(|n| match &n.template {
                NotificationTemplate::Activation {
                    activation_code, ..
                } if n.to == to => Some(activation_code.clone()),
                _ => None,
            })
    }

    /// Code carried by the most recent reset mail to `to`
    pub fn last_reset_code(&self, to: &str) -> Option<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find_map(|n| match &n.template {
                NotificationTemplate::PasswordReset { reset_code, .. } if n.to == to => {
                    Some(reset_code.clone())
                }
                _ => None,
            })
    }
}

#[async_trait]
impl NotificationSender for MockNotificationSender {
    async fn send(&self, notification: &Notification) -> Result<String, String> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err("Mail provider unavailable".to_string());
        }
        self.sent.lock().unwrap().push(notification.clone());
        Ok(format!("mock-mail-{}", uuid::Uuid::new_v4()))
    }
}

// Reversible hasher so tests stay fast
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, plaintext: &str) -> Result<String, String> {
        Ok(format!("hashed:{}", plaintext))
    }

    async fn verify(&self, plaintext: &str, hash: &str) -> bool {
        hash == format!("hashed:{}", plaintext)
    }
}

pub type TestService =
    AccountService<InMemoryAccountRepository, MockNotificationSender, PlainPasswordHasher>;

pub struct Harness {
    pub service: TestService,
    pub repository: Arc<InMemoryAccountRepository>,
    pub notifier: Arc<MockNotificationSender>,
}

pub fn harness() -> Harness {
    harness_with(AccountServiceConfig::default())
}

pub fn harness_with(config: AccountServiceConfig) -> Harness {
    let repository = Arc::new(InMemoryAccountRepository::new());
    let notifier = Arc::new(MockNotificationSender::new(false));
    let service = AccountService::new(
        repository.clone(),
        notifier.clone(),
        Arc::new(PlainPasswordHasher),
        config,
    );
    Harness {
        service,
        repository,
        notifier,
    }
}
