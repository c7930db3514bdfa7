//! Shared fixtures for the route tests

#![allow(dead_code)]

use actix_web::web;
use std::sync::Arc;

use accounts_api::AppState;
use accounts_core::repositories::{AccountRepository, InMemoryAccountRepository};
use accounts_core::services::{AccountService, AccountServiceConfig, BcryptPasswordHasher};
use accounts_infra::mail::{MailNotificationSender, MockMailService};
use accounts_shared::config::CorsConfig;

pub type TestState =
    AppState<InMemoryAccountRepository, MailNotificationSender, BcryptPasswordHasher>;

pub const MAX_PAYLOAD: usize = 256 * 1024;

pub struct TestContext {
    pub state: web::Data<TestState>,
    pub repository: Arc<InMemoryAccountRepository>,
    pub mail: MockMailService,
    pub cors: CorsConfig,
}

pub fn context() -> TestContext {
    context_with(AccountServiceConfig::default())
}

pub fn context_with(config: AccountServiceConfig) -> TestContext {
    let repository = Arc::new(InMemoryAccountRepository::new());
    let mail = MockMailService::with_options(false, false);
    let notifier = Arc::new(MailNotificationSender::new(
        Arc::new(mail.clone()),
        "no-reply@test.local",
        "Mendover",
    ));
    let service = AccountService::new(
        repository.clone(),
        notifier,
        Arc::new(BcryptPasswordHasher::with_cost(4)),
        config,
    );

    TestContext {
        state: web::Data::new(AppState::new(service)),
        repository,
        mail,
        cors: CorsConfig::development(),
    }
}

/// Pending activation code of the account registered under `email`
pub async fn activation_code(repository: &InMemoryAccountRepository, email: &str) -> String {
    repository
        .find_by_email(email)
        .await
        .unwrap()
        .and_then(|account| account.activation_code)
        .map(|code| code.token)
        .expect("account has an activation code")
}

/// Pending reset code of the account registered under `email`
pub async fn reset_code(repository: &InMemoryAccountRepository, email: &str) -> String {
    repository
        .find_by_email(email)
        .await
        .unwrap()
        .and_then(|account| account.reset_code)
        .map(|code| code.token)
        .expect("account has a reset code")
}
