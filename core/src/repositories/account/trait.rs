//! Account repository trait defining the interface for account persistence.
//!
//! The trait is async-first and every method returns a `DomainError` on
//! storage failure. Code consumption (`activate_with_code`,
//! `complete_password_reset`) is a single conditional write so that two
//! racing requests cannot both consume the same code.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::{Account, VerificationCode};
use crate::domain::value_objects::{AccountFilter, AccountSort, AccountUpdate};
use crate::errors::DomainError;

/// Repository trait for Account persistence operations
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Whether an account with this (normalized) email exists
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Find an account by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError>;

    /// Find an account by its (normalized) email
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError>;

    /// Find the account holding this activation token
    async fn find_by_activation_code(&self, code: &str) -> Result<Option<Account>, DomainError>;

    /// One page of accounts matching `filter`, in `sort` order
    async fn find(
        &self,
        filter: &AccountFilter,
        sort: &AccountSort,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Account>, DomainError>;

    /// Number of accounts matching `filter`
    async fn count(&self, filter: &AccountFilter) -> Result<u64, DomainError>;

    /// Insert a new account
    ///
    /// # Returns
    /// * `Err(DomainError::Account(AccountError::DuplicateEmail))` - email taken
    async fn create(&self, account: Account) -> Result<Account, DomainError>;

    /// Merge a profile patch and return the refreshed account
    ///
    /// # Returns
    /// * `Ok(None)` - No account with this id
    async fn update_profile(
        &self,
        id: Uuid,
        update: &AccountUpdate,
    ) -> Result<Option<Account>, DomainError>;

    /// Replace the pending activation code; returns whether a row matched
    async fn set_activation_code(
        &self,
        id: Uuid,
        code: &VerificationCode,
    ) -> Result<bool, DomainError>;

    /// Replace the pending reset code; returns whether a row matched
    async fn set_reset_code(&self, id: Uuid, code: &VerificationCode) -> Result<bool, DomainError>;

    /// Activate the account and clear its code, only if `code` is still the
    /// stored activation token and unexpired at `now`
    ///
    /// # Returns
    /// * `Ok(true)` - This call consumed the code
    /// * `Ok(false)` - Guard failed (code replaced, consumed or expired)
    async fn activate_with_code(
        &self,
        id: Uuid,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<bool, DomainError>;

    /// Store a new password hash and clear the reset code, only if `code` is
    /// still the stored reset token and unexpired at `now`
    async fn complete_password_reset(
        &self,
        id: Uuid,
        code: &str,
        password_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<bool, DomainError>;

    /// Delete an account; returns whether a record was removed
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
