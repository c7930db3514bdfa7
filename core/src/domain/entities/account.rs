//! Account entity representing a registered user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::verification_code::VerificationCode;

/// Authorization role attached to an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountRole {
    #[default]
    Users,
    Admins,
}

impl AccountRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountRole::Users => "USERS",
            AccountRole::Admins => "ADMINS",
        }
    }
}

impl fmt::Display for AccountRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USERS" => Ok(AccountRole::Users),
            "ADMINS" => Ok(AccountRole::Admins),
            _ => Err(format!("Unknown account role: {}", s)),
        }
    }
}

/// Where the account was created from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    /// Email and password registration
    #[default]
    Local,
    Google,
    Github,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Local => "LOCAL",
            AccountType::Google => "GOOGLE",
            AccountType::Github => "GITHUB",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "LOCAL" => Ok(AccountType::Local),
            "GOOGLE" => Ok(AccountType::Google),
            "GITHUB" => Ok(AccountType::Github),
            _ => Err(format!("Unknown account type: {}", s)),
        }
    }
}

/// Account entity
///
/// `password` always holds a hash. Reads leaving the service go through
/// [`AccountView`](crate::domain::value_objects::AccountView), which drops it.
#[derive(Clone, PartialEq, Eq)]
pub struct Account {
    /// Unique identifier for the account
    pub id: Uuid,

    /// Display name; notifications fall back to the email when absent
    pub name: Option<String>,

    /// Unique, normalized email address
    pub email: String,

    /// Password hash
    pub password: String,

    pub role: AccountRole,

    pub account_type: AccountType,

    /// Set once by activation and never cleared
    pub is_active: bool,

    /// Pending activation code
    pub activation_code: Option<VerificationCode>,

    /// Pending password reset code
    pub reset_code: Option<VerificationCode>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new inactive local account holding a pending activation code
    pub fn new(
        name: Option<String>,
        email: String,
        password_hash: String,
        activation_code: VerificationCode,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.filter(|n| !n.trim().is_empty()),
            email,
            password: password_hash,
            role: AccountRole::default(),
            account_type: AccountType::default(),
            is_active: false,
            activation_code: Some(activation_code),
            reset_code: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Name used when addressing the account holder
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .field("account_type", &self.account_type)
            .field("is_active", &self.is_active)
            .field("has_activation_code", &self.activation_code.is_some())
            .field("has_reset_code", &self.reset_code.is_some())
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}
