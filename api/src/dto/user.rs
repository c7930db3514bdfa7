//! Query and body types of the user management endpoints

use serde::{Deserialize, Serialize};
use validator::Validate;

use accounts_core::domain::entities::{AccountRole, AccountType};
use accounts_core::domain::value_objects::{AccountFilter, AccountSort, AccountUpdate};
use accounts_core::errors::DomainError;
use accounts_core::services::AccountQuery;

/// Query string of `GET /users`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ListUsersQuery {
    /// 1-based page number
    pub current: Option<u32>,
    pub page_size: Option<u32>,

    /// Case-insensitive name fragment
    #[validate(length(max = 100))]
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<AccountRole>,
    pub account_type: Option<AccountType>,
    pub is_active: Option<bool>,

    /// Sort expression such as `name` or `-createdAt`
    pub sort: Option<String>,
}

impl ListUsersQuery {
    /// Convert into a service query; fails on an unsupported sort field
    pub fn into_query(self) -> Result<AccountQuery, DomainError> {
        let sort = match self.sort.as_deref().map(str::trim) {
            Some(expr) if !expr.is_empty() => AccountSort::parse(expr)?,
            _ => AccountSort::default(),
        };

        Ok(AccountQuery {
            filter: AccountFilter {
                name: self.name.filter(|n| !n.trim().is_empty()),
                email: self.email.filter(|e| !e.trim().is_empty()),
                role: self.role,
                account_type: self.account_type,
                is_active: self.is_active,
            },
            sort,
            current: self.current,
            page_size: self.page_size,
        })
    }
}

/// Body of `PATCH /users/{id}`
///
/// Only profile fields are accepted; anything else in the body is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    pub role: Option<AccountRole>,
    pub account_type: Option<AccountType>,
}

impl From<UpdateUserRequest> for AccountUpdate {
    fn from(request: UpdateUserRequest) -> Self {
        AccountUpdate {
            name: request.name,
            role: request.role,
            account_type: request.account_type,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteUserResponse {
    pub deleted: bool,
}
