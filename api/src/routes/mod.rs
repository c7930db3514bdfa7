//! HTTP route handlers
//!
//! - `auth`: registration, activation and password reset
//! - `users`: account lookup, listing, update and removal
//! - `health`: liveness probe

pub mod auth;
pub mod health;
pub mod users;

use std::sync::Arc;

use accounts_core::repositories::AccountRepository;
use accounts_core::services::{AccountService, NotificationSender, PasswordHasher};

/// Application state that holds shared services
pub struct AppState<R, N, H>
where
    R: AccountRepository,
    N: NotificationSender,
    H: PasswordHasher,
{
    pub account_service: Arc<AccountService<R, N, H>>,
}

impl<R, N, H> AppState<R, N, H>
where
    R: AccountRepository,
    N: NotificationSender,
    H: PasswordHasher,
{
    pub fn new(account_service: AccountService<R, N, H>) -> Self {
        Self {
            account_service: Arc::new(account_service),
        }
    }
}
