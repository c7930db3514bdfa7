//! MySQL implementation of the AccountRepository trait.
//!
//! Code consumption is a single conditional `UPDATE`; the affected row count
//! decides which caller won.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::{MySql, MySqlPool, QueryBuilder, Row};
use uuid::Uuid;

use accounts_core::domain::entities::{Account, VerificationCode};
use accounts_core::domain::value_objects::{AccountFilter, AccountSort, AccountUpdate};
use accounts_core::errors::{AccountError, DomainError};
use accounts_core::repositories::AccountRepository;

const ACCOUNT_COLUMNS: &str = "id, name, email, password, role, account_type, is_active, \
     activation_code, activation_code_expires_at, reset_code, reset_code_expires_at, \
     created_at, updated_at";

/// MySQL implementation of AccountRepository
pub struct MySqlAccountRepository {
    pool: MySqlPool,
}

impl MySqlAccountRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_account(row: &MySqlRow) -> Result<Account, DomainError> {
        let id: String = row.try_get("id").map_err(column_error)?;
        let role: String = row.try_get("role").map_err(column_error)?;
        let account_type: String = row.try_get("account_type").map_err(column_error)?;

        Ok(Account {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid account UUID: {}", e),
            })?,
            name: row.try_get("name").map_err(column_error)?,
            email: row.try_get("email").map_err(column_error)?,
            password: row.try_get("password").map_err(column_error)?,
            role: role
                .parse()
                .map_err(|message| DomainError::Internal { message })?,
            account_type: account_type
                .parse()
                .map_err(|message| DomainError::Internal { message })?,
            is_active: row.try_get("is_active").map_err(column_error)?,
            activation_code: Self::code_from_row(
                row,
                "activation_code",
                "activation_code_expires_at",
            )?,
            reset_code: Self::code_from_row(row, "reset_code", "reset_code_expires_at")?,
            created_at: row.try_get("created_at").map_err(column_error)?,
            updated_at: row.try_get("updated_at").map_err(column_error)?,
        })
    }

    fn code_from_row(
        row: &MySqlRow,
        token_column: &str,
        expiry_column: &str,
    ) -> Result<Option<VerificationCode>, DomainError> {
        let token: Option<String> = row.try_get(token_column).map_err(column_error)?;
        let expires_at: Option<DateTime<Utc>> =
            row.try_get(expiry_column).map_err(column_error)?;

        Ok(match (token, expires_at) {
            (Some(token), Some(expires_at)) => Some(VerificationCode::new(token, expires_at)),
            _ => None,
        })
    }

    fn push_filter(builder: &mut QueryBuilder<'_, MySql>, filter: &AccountFilter) {
        builder.push(" WHERE 1 = 1");
        if let Some(name) = &filter.name {
            builder
                .push(" AND LOWER(name) LIKE ")
                .push_bind(format!("%{}%", escape_like(&name.to_lowercase())));
        }
        if let Some(email) = &filter.email {
            builder.push(" AND email = ").push_bind(email.clone());
        }
        if let Some(role) = filter.role {
            builder.push(" AND role = ").push_bind(role.as_str());
        }
        if let Some(account_type) = filter.account_type {
            builder
                .push(" AND account_type = ")
                .push_bind(account_type.as_str());
        }
        if let Some(is_active) = filter.is_active {
            builder.push(" AND is_active = ").push_bind(is_active);
        }
    }
}

fn column_error(e: sqlx::Error) -> DomainError {
    DomainError::Database {
        message: format!("Failed to read account column: {}", e),
    }
}

fn query_error(context: &str, e: sqlx::Error) -> DomainError {
    tracing::error!(error = %e, context, "Account query failed");
    DomainError::Database {
        message: format!("{}: {}", context, e),
    }
}

/// Escape `LIKE` wildcards in user input
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait]
impl AccountRepository for MySqlAccountRepository {
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM accounts WHERE email = ?) AS found")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| query_error("Failed to check email", e))?;

        let found: i64 = row.try_get("found").map_err(column_error)?;
        Ok(found == 1)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        let query = format!("SELECT {} FROM accounts WHERE id = ?", ACCOUNT_COLUMNS);
        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_error("Failed to find account by id", e))?;

        row.as_ref().map(Self::row_to_account).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let query = format!("SELECT {} FROM accounts WHERE email = ?", ACCOUNT_COLUMNS);
        let row = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_error("Failed to find account by email", e))?;

        row.as_ref().map(Self::row_to_account).transpose()
    }

    async fn find_by_activation_code(&self, code: &str) -> Result<Option<Account>, DomainError> {
        let query = format!(
            "SELECT {} FROM accounts WHERE activation_code = ? LIMIT 1",
            ACCOUNT_COLUMNS
        );
        let row = sqlx::query(&query)
            .bind(code)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_error("Failed to find account by activation code", e))?;

        row.as_ref().map(Self::row_to_account).transpose()
    }

    async fn find(
        &self,
        filter: &AccountFilter,
        sort: &AccountSort,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Account>, DomainError> {
        let mut builder = QueryBuilder::<MySql>::new(format!("SELECT {} FROM accounts", ACCOUNT_COLUMNS));
        Self::push_filter(&mut builder, filter);

        // Column and direction come from closed enums, never from input.
        builder.push(format!(
            " ORDER BY {} {}, id ASC",
            sort.field.column(),
            sort.order
        ));
        builder.push(" LIMIT ").push_bind(limit);
        builder.push(" OFFSET ").push_bind(skip);

        let rows = builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| query_error("Failed to list accounts", e))?;

        rows.iter().map(Self::row_to_account).collect()
    }

    async fn count(&self, filter: &AccountFilter) -> Result<u64, DomainError> {
        let mut builder = QueryBuilder::<MySql>::new("SELECT COUNT(*) AS total FROM accounts");
        Self::push_filter(&mut builder, filter);

        let row = builder
            .build()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| query_error("Failed to count accounts", e))?;

        let total: i64 = row.try_get("total").map_err(column_error)?;
        Ok(u64::try_from(total).unwrap_or(0))
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let (activation_code, activation_expires_at) = match &account.activation_code {
            Some(code) => (Some(code.token.clone()), Some(code.expires_at)),
            None => (None, None),
        };
        let (reset_code, reset_expires_at) = match &account.reset_code {
            Some(code) => (Some(code.token.clone()), Some(code.expires_at)),
            None => (None, None),
        };

        let query = format!(
            "INSERT INTO accounts ({}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            ACCOUNT_COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(account.id.to_string())
            .bind(&account.name)
            .bind(&account.email)
            .bind(&account.password)
            .bind(account.role.as_str())
            .bind(account.account_type.as_str())
            .bind(account.is_active)
            .bind(activation_code)
            .bind(activation_expires_at)
            .bind(reset_code)
            .bind(reset_expires_at)
            .bind(account.created_at)
            .bind(account.updated_at)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(account),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(AccountError::DuplicateEmail {
                    email: account.email,
                }
                .into())
            }
            Err(e) => Err(query_error("Failed to create account", e)),
        }
    }

    async fn update_profile(
        &self,
        id: Uuid,
        update: &AccountUpdate,
    ) -> Result<Option<Account>, DomainError> {
        let mut builder = QueryBuilder::<MySql>::new("UPDATE accounts SET updated_at = ");
        builder.push_bind(Utc::now());
        if let Some(name) = &update.name {
            builder.push(", name = ").push_bind(name.clone());
        }
        if let Some(role) = update.role {
            builder.push(", role = ").push_bind(role.as_str());
        }
        if let Some(account_type) = update.account_type {
            builder
                .push(", account_type = ")
                .push_bind(account_type.as_str());
        }
        builder.push(" WHERE id = ").push_bind(id.to_string());

        builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(|e| query_error("Failed to update account", e))?;

        self.find_by_id(id).await
    }

    async fn set_activation_code(
        &self,
        id: Uuid,
        code: &VerificationCode,
    ) -> Result<bool, DomainError> {
        let result = sqlx::query(
            "UPDATE accounts SET activation_code = ?, activation_code_expires_at = ?, updated_at = ? \
             WHERE id = ?",
        )
        .bind(&code.token)
        .bind(code.expires_at)
        .bind(Utc::now())
        .bind(id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| query_error("Failed to store activation code", e))?;

        Ok(result.rows_affected() == 1)
    }

    async fn set_reset_code(&self, id: Uuid, code: &VerificationCode) -> Result<bool, DomainError> {
        let result = sqlx::query(
            "UPDATE accounts SET reset_code = ?, reset_code_expires_at = ?, updated_at = ? \
             WHERE id = ?",
        )
        .bind(&code.token)
        .bind(code.expires_at)
        .bind(Utc::now())
        .bind(id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| query_error("Failed to store reset code", e))?;

        Ok(result.rows_affected() == 1)
    }

    async fn activate_with_code(
        &self,
        id: Uuid,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<bool, DomainError> {
        let result = sqlx::query(
            "UPDATE accounts \
             SET is_active = TRUE, activation_code = NULL, activation_code_expires_at = NULL, \
                 updated_at = ? \
             WHERE id = ? AND activation_code = ? AND activation_code_expires_at > ?",
        )
        .bind(now)
        .bind(id.to_string())
        .bind(code)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| query_error("Failed to activate account", e))?;

        Ok(result.rows_affected() == 1)
    }

    async fn complete_password_reset(
        &self,
        id: Uuid,
        code: &str,
        password_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<bool, DomainError> {
        let result = sqlx::query(
            "UPDATE accounts \
             SET password = ?, reset_code = NULL, reset_code_expires_at = NULL, updated_at = ? \
             WHERE id = ? AND reset_code = ? AND reset_code_expires_at > ?",
        )
        .bind(password_hash)
        .bind(now)
        .bind(id.to_string())
        .bind(code)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| query_error("Failed to reset password", e))?;

        Ok(result.rows_affected() == 1)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM accounts WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| query_error("Failed to delete account", e))?;

        Ok(result.rows_affected() == 1)
    }
}

#[cfg(test)]
mod tests {
    use super::escape_like;

    #[test]
    fn test_escape_like_wildcards() {
        assert_eq!(escape_like("jane"), "jane");
        assert_eq!(escape_like("50%_off"), "50\\%\\_off");
        assert_eq!(escape_like("a\\b"), "a\\\\b");
    }
}
