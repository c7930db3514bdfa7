//! Main account service implementation

use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use accounts_shared::types::{PaginatedResponse, Pagination};
use accounts_shared::utils::{mask_email, normalize_email, validators};

use crate::domain::entities::{Account, VerificationCode};
use crate::domain::value_objects::{AccountUpdate, AccountView, Notification};
use crate::errors::{AccountError, DomainError, DomainResult};
use crate::repositories::AccountRepository;

use super::config::AccountServiceConfig;
use super::traits::{NotificationSender, PasswordHasher};
use super::types::{
    AccountQuery, ActivationResult, PasswordResetInput, PasswordResetRequested,
    PasswordResetResult, RegisterInput, RegisterResult,
};

/// Account service orchestrating registration, activation, password reset
/// and profile maintenance
pub struct AccountService<R: AccountRepository, N: NotificationSender, H: PasswordHasher> {
    /// Account persistence
    repository: Arc<R>,
    /// Mail delivery for activation and reset codes
    notifier: Arc<N>,
    /// Password hashing
    hasher: Arc<H>,
    /// Service configuration
    config: AccountServiceConfig,
}

impl<R: AccountRepository, N: NotificationSender, H: PasswordHasher> AccountService<R, N, H> {
    /// Create a new account service
    ///
    /// # Arguments
    ///
    /// * `repository` - Account repository implementation
    /// * `notifier` - Notification sender implementation
    /// * `hasher` - Password hasher implementation
    /// * `config` - Service configuration
    pub fn new(
        repository: Arc<R>,
        notifier: Arc<N>,
        hasher: Arc<H>,
        config: AccountServiceConfig,
    ) -> Self {
        Self {
            repository,
            notifier,
            hasher,
            config,
        }
    }

    /// Register a new inactive account and mail its activation code
    ///
    /// This method:
    /// 1. Rejects an email that is already registered
    /// 2. Hashes the password
    /// 3. Mints an activation code and persists the account
    /// 4. Sends the activation mail
    ///
    /// A failed mail does not undo the registration; it is logged and
    /// reported through `RegisterResult::notification_delivered`.
    pub async fn register(&self, input: RegisterInput) -> DomainResult<RegisterResult> {
        let email = normalize_email(&input.email);
        if !validators::is_valid_email(&email) {
            return Err(DomainError::Validation {
                message: "Invalid email address".to_string(),
            });
        }
        if input.password.is_empty() {
            return Err(DomainError::Validation {
                message: "Password must not be empty".to_string(),
            });
        }

        if self.repository.exists_by_email(&email).await? {
            tracing::info!(
                email = %mask_email(&email),
                event = "registration_rejected",
                reason = "duplicate_email",
                "Registration rejected"
            );
            return Err(AccountError::DuplicateEmail { email }.into());
        }

        let password_hash = self.hash_password(&input.password).await?;
        let code = VerificationCode::generate(self.config.code_expiration_minutes);
        let account = Account::new(input.name, email, password_hash, code.clone());
        let account = self.repository.create(account).await?;

        tracing::info!(
            account_id = %account.id,
            email = %mask_email(&account.email),
            event = "account_registered",
            "Registered new account"
        );

        let notification = Notification::activation(
            &account.email,
            account.display_name(),
            &code.token,
            &self.config.brand_name,
        );
        let notification_delivered = match self.notifier.send(&notification).await {
            Ok(message_id) => {
                tracing::debug!(
                    account_id = %account.id,
                    message_id = %message_id,
                    event = "activation_mail_sent",
                    "Activation mail sent"
                );
                true
            }
            Err(e) => {
                tracing::error!(
                    account_id = %account.id,
                    error = %e,
                    event = "activation_mail_failed",
                    "Failed to send activation mail after registration"
                );
                false
            }
        };

        Ok(RegisterResult {
            id: account.id,
            notification_delivered,
        })
    }

    /// Activate the account holding `code`
    ///
    /// Unknown, expired, replaced and already consumed codes all fail with
    /// `InvalidOrExpiredCode`. Expired codes are left in place.
    pub async fn activate(&self, code: &str) -> DomainResult<ActivationResult> {
        let code = code.trim();
        if code.is_empty() {
            return Err(AccountError::InvalidOrExpiredCode.into());
        }

        let Some(account) = self.repository.find_by_activation_code(code).await? else {
            tracing::info!(event = "activation_rejected", reason = "unknown_code", "Activation rejected");
            return Err(AccountError::InvalidOrExpiredCode.into());
        };

        let now = Utc::now();
        let valid = account
            .activation_code
            .as_ref()
            .is_some_and(|stored| stored.is_valid_at(now));
        if !valid {
            tracing::info!(
                account_id = %account.id,
                event = "activation_rejected",
                reason = "expired_code",
                "Activation rejected"
            );
            return Err(AccountError::InvalidOrExpiredCode.into());
        }

        if !self
            .repository
            .activate_with_code(account.id, code, now)
            .await?
        {
            tracing::warn!(
                account_id = %account.id,
                event = "activation_rejected",
                reason = "code_consumed_concurrently",
                "Activation code no longer matched at update time"
            );
            return Err(AccountError::InvalidOrExpiredCode.into());
        }

        tracing::info!(account_id = %account.id, event = "account_activated", "Account activated");
        Ok(ActivationResult { id: account.id })
    }

    /// Mint a fresh activation code for an inactive account and mail it
    ///
    /// The previous code stops working immediately.
    pub async fn resend_activation(&self, email: &str) -> DomainResult<Uuid> {
        let email = normalize_email(email);
        let account = self
            .repository
            .find_by_email(&email)
            .await?
            .ok_or(AccountError::AccountNotFound)?;

        if account.is_active {
            return Err(AccountError::AlreadyActive.into());
        }

        let code = VerificationCode::generate(self.config.code_expiration_minutes);
        if !self.repository.set_activation_code(account.id, &code).await? {
            return Err(AccountError::AccountNotFound.into());
        }

        let notification = Notification::activation(
            &account.email,
            account.display_name(),
            &code.token,
            &self.config.brand_name,
        );
        self.deliver(account.id, &notification).await?;

        tracing::info!(
            account_id = %account.id,
            email = %mask_email(&account.email),
            event = "activation_code_resent",
            "Issued new activation code"
        );
        Ok(account.id)
    }

    /// Mint a password reset code and mail it
    ///
    /// Works regardless of activation state.
    pub async fn request_password_reset(&self, email: &str) -> DomainResult<PasswordResetRequested> {
        let email = normalize_email(email);
        let account = self
            .repository
            .find_by_email(&email)
            .await?
            .ok_or(AccountError::AccountNotFound)?;

        let code = VerificationCode::generate(self.config.code_expiration_minutes);
        if !self.repository.set_reset_code(account.id, &code).await? {
            return Err(AccountError::AccountNotFound.into());
        }

        let notification = Notification::password_reset(
            &account.email,
            account.display_name(),
            &code.token,
            &self.config.brand_name,
        );
        self.deliver(account.id, &notification).await?;

        tracing::info!(
            account_id = %account.id,
            email = %mask_email(&account.email),
            event = "password_reset_requested",
            "Issued password reset code"
        );
        Ok(PasswordResetRequested {
            id: account.id,
            email: account.email,
        })
    }

    /// Replace the password using a reset code
    ///
    /// Checks, in order: confirmation matches, account exists, code matches
    /// and is unexpired. The write itself is guarded by the same code check.
    pub async fn complete_password_reset(
        &self,
        input: PasswordResetInput,
    ) -> DomainResult<PasswordResetResult> {
        if input.password != input.confirm_password {
            return Err(AccountError::PasswordMismatch.into());
        }
        if input.password.is_empty() {
            return Err(DomainError::Validation {
                message: "Password must not be empty".to_string(),
            });
        }

        let email = normalize_email(&input.email);
        let account = self
            .repository
            .find_by_email(&email)
            .await?
            .ok_or(AccountError::AccountNotFound)?;

        let now = Utc::now();
        let code = input.code.trim();
        let accepted = account
            .reset_code
            .as_ref()
            .is_some_and(|stored| stored.accepts(code, now));
        if !accepted {
            tracing::info!(
                account_id = %account.id,
                event = "password_reset_rejected",
                "Reset code invalid or expired"
            );
            return Err(AccountError::InvalidOrExpiredCode.into());
        }

        let password_hash = self.hash_password(&input.password).await?;
        if !self
            .repository
            .complete_password_reset(account.id, code, &password_hash, now)
            .await?
        {
            tracing::warn!(
                account_id = %account.id,
                event = "password_reset_rejected",
                reason = "code_consumed_concurrently",
                "Reset code no longer matched at update time"
            );
            return Err(AccountError::InvalidOrExpiredCode.into());
        }

        tracing::info!(account_id = %account.id, event = "password_reset", "Password changed");
        Ok(PasswordResetResult { success: true })
    }

    /// Look up an account by id
    pub async fn find_by_id(&self, id: &str) -> DomainResult<Option<AccountView>> {
        let id = parse_account_id(id)?;
        let account = self.repository.find_by_id(id).await?;
        Ok(account.as_ref().map(AccountView::from))
    }

    /// Look up an account by email, including its stored secrets
    pub async fn find_by_email(&self, email: &str) -> DomainResult<Option<Account>> {
        self.repository.find_by_email(&normalize_email(email)).await
    }

    /// One page of accounts
    ///
    /// `current` and `page_size` default to 1 and 10; zero counts as absent
    /// and the page size is capped at 100.
    pub async fn list(&self, query: AccountQuery) -> DomainResult<PaginatedResponse<AccountView>> {
        let pagination = Pagination::from_query(query.current, query.page_size);
        let mut filter = query.filter;
        filter.email = filter.email.map(|e| normalize_email(&e));

        let total = self.repository.count(&filter).await?;
        let accounts = self
            .repository
            .find(&filter, &query.sort, pagination.offset(), pagination.limit())
            .await?;

        let results = accounts.iter().map(AccountView::from).collect();
        Ok(PaginatedResponse::new(results, pagination, total))
    }

    /// Merge name, role and account type into an account
    pub async fn update(&self, id: &str, update: AccountUpdate) -> DomainResult<AccountView> {
        let id = parse_account_id(id)?;
        let updated = self
            .repository
            .update_profile(id, &update)
            .await?
            .ok_or(AccountError::AccountNotFound)?;

        tracing::info!(account_id = %id, event = "account_updated", "Account profile updated");
        Ok(AccountView::from(&updated))
    }

    /// Delete an account; returns whether a record was removed
    pub async fn remove(&self, id: &str) -> DomainResult<bool> {
        let id = parse_account_id(id)?;
        let deleted = self.repository.delete(id).await?;
        if deleted {
            tracing::info!(account_id = %id, event = "account_removed", "Account removed");
        }
        Ok(deleted)
    }

    async fn hash_password(&self, plaintext: &str) -> DomainResult<String> {
        self.hasher.hash(plaintext).await.map_err(|e| {
            tracing::error!(error = %e, event = "password_hash_failed", "Failed to hash password");
            DomainError::Internal {
                message: format!("Failed to hash password: {}", e),
            }
        })
    }

    async fn deliver(&self, account_id: Uuid, notification: &Notification) -> DomainResult<String> {
        self.notifier.send(notification).await.map_err(|e| {
            tracing::error!(
                account_id = %account_id,
                template = notification.template.template_name(),
                error = %e,
                event = "notification_failed",
                "Failed to deliver notification"
            );
            AccountError::NotificationFailure { reason: e }.into()
        })
    }
}

/// Parse an account id, mapping empty or malformed input to `InvalidId`
pub fn parse_account_id(id: &str) -> Result<Uuid, AccountError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(AccountError::InvalidId { id: id.to_string() });
    }
    Uuid::parse_str(trimmed).map_err(|_| AccountError::InvalidId { id: id.to_string() })
}
