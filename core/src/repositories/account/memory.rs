//! In-memory implementation of AccountRepository
//!
//! Backs the development server and the service tests. Every conditional
//! write happens under a single write lock.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::{Account, VerificationCode};
use crate::domain::value_objects::{AccountFilter, AccountSort, AccountUpdate};
use crate::errors::{AccountError, DomainError};

use super::trait_::AccountRepository;

/// Account repository held in process memory
#[derive(Clone, Default)]
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<HashMap<Uuid, Account>>>,
}

impl InMemoryAccountRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts
    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    /// Whether no account is stored
    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }

    /// Raw stored record, including secrets
    pub async fn snapshot(&self, id: Uuid) -> Option<Account> {
        self.accounts.read().await.get(&id).cloned()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().any(|a| a.email == email))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().find(|a| a.email == email).cloned())
    }

    async fn find_by_activation_code(&self, code: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .values()
            .find(|a| a.activation_code.as_ref().is_some_and(|c| c.matches(code)))
            .cloned())
    }

    async fn find(
        &self,
        filter: &AccountFilter,
        sort: &AccountSort,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        let mut matching: Vec<&Account> = accounts.values().filter(|a| filter.matches(a)).collect();
        matching.sort_by(|a, b| sort.compare(a, b));

        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(matching.into_iter().skip(skip).take(limit).cloned().collect())
    }

    async fn count(&self, filter: &AccountFilter) -> Result<u64, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().filter(|a| filter.matches(a)).count() as u64)
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;

        if accounts.values().any(|a| a.email == account.email) {
            return Err(AccountError::DuplicateEmail {
                email: account.email,
            }
            .into());
        }

        accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn update_profile(
        &self,
        id: Uuid,
        update: &AccountUpdate,
    ) -> Result<Option<Account>, DomainError> {
        let mut accounts = self.accounts.write().await;
        Ok(accounts.get_mut(&id).map(|account| {
            update.apply_to(account);
            account.updated_at = Utc::now();
            account.clone()
        }))
    }

    async fn set_activation_code(
        &self,
        id: Uuid,
        code: &VerificationCode,
    ) -> Result<bool, DomainError> {
        let mut accounts = self.accounts.write().await;
        Ok(match accounts.get_mut(&id) {
            Some(account) => {
                account.activation_code = Some(code.clone());
                account.updated_at = Utc::now();
                true
            }
            None => false,
        })
    }

    async fn set_reset_code(&self, id: Uuid, code: &VerificationCode) -> Result<bool, DomainError> {
        let mut accounts = self.accounts.write().await;
        Ok(match accounts.get_mut(&id) {
            Some(account) => {
                account.reset_code = Some(code.clone());
                account.updated_at = Utc::now();
                true
            }
            None => false,
        })
    }

    async fn activate_with_code(
        &self,
        id: Uuid,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<bool, DomainError> {
        let mut accounts = self.accounts.write().await;
        let Some(account) = accounts.get_mut(&id) else {
            return Ok(false);
        };
        if !account
            .activation_code
            .as_ref()
            .is_some_and(|stored| stored.accepts(code, now))
        {
            return Ok(false);
        }

        account.is_active = true;
        account.activation_code = None;
        account.updated_at = now;
        Ok(true)
    }

    async fn complete_password_reset(
        &self,
        id: Uuid,
        code: &str,
        password_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<bool, DomainError> {
        let mut accounts = self.accounts.write().await;
        let Some(account) = accounts.get_mut(&id) else {
            return Ok(false);
        };
        if !account
            .reset_code
            .as_ref()
            .is_some_and(|stored| stored.accepts(code, now))
        {
            return Ok(false);
        }

        account.password = password_hash.to_string();
        account.reset_code = None;
        account.updated_at = now;
        Ok(true)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut accounts = self.accounts.write().await;
        Ok(accounts.remove(&id).is_some())
    }
}
