//! Traits for notification and password hashing integration

use async_trait::async_trait;

use crate::domain::value_objects::Notification;

/// Trait for outbound notification delivery
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// Deliver a templated message; returns the provider message id
    async fn send(&self, notification: &Notification) -> Result<String, String>;
}

/// Trait for one-way salted password hashing
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password
    async fn hash(&self, plaintext: &str) -> Result<String, String>;
    /// Check a plaintext password against a stored hash
    async fn verify(&self, plaintext: &str, hash: &str) -> bool;
}
