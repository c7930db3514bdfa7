//! Filter, sort and patch types for account queries.

use accounts_shared::types::SortOrder;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Account, AccountRole, AccountType};
use crate::errors::DomainError;

/// Listing filter; every present field must match
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountFilter {
    /// Case-insensitive substring of the name
    pub name: Option<String>,
    /// Exact, normalized email
    pub email: Option<String>,
    pub role: Option<AccountRole>,
    pub account_type: Option<AccountType>,
    pub is_active: Option<bool>,
}

impl AccountFilter {
    /// Whether an account satisfies the filter
    pub fn matches(&self, account: &Account) -> bool {
        if let Some(needle) = &self.name {
            let needle = needle.to_lowercase();
            let hit = account
                .name
                .as_deref()
                .is_some_and(|name| name.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }
        if self.email.as_deref().is_some_and(|email| email != account.email) {
            return false;
        }
        if self.role.is_some_and(|role| role != account.role) {
            return false;
        }
        if self
            .account_type
            .is_some_and(|account_type| account_type != account.account_type)
        {
            return false;
        }
        if self.is_active.is_some_and(|active| active != account.is_active) {
            return false;
        }
        true
    }
}

/// Columns a listing may be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AccountSortField {
    Name,
    Email,
    #[default]
    CreatedAt,
    UpdatedAt,
}

impl AccountSortField {
    /// Storage column name
    pub fn column(&self) -> &'static str {
        match self {
            AccountSortField::Name => "name",
            AccountSortField::Email => "email",
            AccountSortField::CreatedAt => "created_at",
            AccountSortField::UpdatedAt => "updated_at",
        }
    }
}

/// Listing order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccountSort {
    pub field: AccountSortField,
    pub order: SortOrder,
}

impl AccountSort {
    pub fn new(field: AccountSortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    /// Parse `name`, `-created_at`, `createdAt` and similar
    pub fn parse(expr: &str) -> Result<Self, DomainError> {
        let (field, order) = SortOrder::split_field(expr);
        let field = match field {
            "name" => AccountSortField::Name,
            "email" => AccountSortField::Email,
            "created_at" | "createdAt" => AccountSortField::CreatedAt,
            "updated_at" | "updatedAt" => AccountSortField::UpdatedAt,
            other => {
                return Err(DomainError::Validation {
                    message: format!("Unsupported sort field: {}", other),
                })
            }
        };
        Ok(Self { field, order })
    }

    /// Compare two accounts under this order, breaking ties by id
    pub fn compare(&self, a: &Account, b: &Account) -> std::cmp::Ordering {
        let primary = match self.field {
            AccountSortField::Name => a.name.cmp(&b.name),
            AccountSortField::Email => a.email.cmp(&b.email),
            AccountSortField::CreatedAt => a.created_at.cmp(&b.created_at),
            AccountSortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        };
        let primary = match self.order {
            SortOrder::Asc => primary,
            SortOrder::Desc => primary.reverse(),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }
}

/// Profile patch; absent fields are left untouched
///
/// Password, email and activation state are not reachable from here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountUpdate {
    pub name: Option<String>,
    pub role: Option<AccountRole>,
    pub account_type: Option<AccountType>,
}

impl AccountUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.role.is_none() && self.account_type.is_none()
    }

    /// Merge the present fields into an account
    pub fn apply_to(&self, account: &mut Account) {
        if let Some(name) = &self.name {
            account.name = Some(name.clone());
        }
        if let Some(role) = self.role {
            account.role = role;
        }
        if let Some(account_type) = self.account_type {
            account.account_type = account_type;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::VerificationCode;

    fn account(name: &str, email: &str) -> Account {
        Account::new(
            Some(name.to_string()),
            email.to_string(),
            "hash".to_string(),
            VerificationCode::generate(30),
        )
    }

    #[test]
    fn test_sort_parse() {
        let sort = AccountSort::parse("-created_at").unwrap();
        assert_eq!(sort.field, AccountSortField::CreatedAt);
        assert_eq!(sort.order, SortOrder::Desc);

        let sort = AccountSort::parse("email").unwrap();
        assert_eq!(sort.field, AccountSortField::Email);
        assert_eq!(sort.order, SortOrder::Asc);

        assert!(matches!(
            AccountSort::parse("password"),
            Err(DomainError::Validation { .. })
        ));
    }

    #[test]
    fn test_filter_matches() {
        let mut alice = account("Alice Nguyen", "alice@x.com");
        alice.is_active = true;

        let by_name = AccountFilter {
            name: Some("nguyen".to_string()),
            ..Default::default()
        };
        assert!(by_name.matches(&alice));

        let inactive = AccountFilter {
            is_active: Some(false),
            ..Default::default()
        };
        assert!(!inactive.matches(&alice));

        let admin = AccountFilter {
            role: Some(AccountRole::Admins),
            ..Default::default()
        };
        assert!(!admin.matches(&alice));
        assert!(AccountFilter::default().matches(&alice));
    }

    #[test]
    fn test_update_apply_leaves_other_fields() {
        let mut target = account("Bob", "bob@x.com");
        let before = target.clone();
        let update = AccountUpdate {
            role: Some(AccountRole::Admins),
            ..Default::default()
        };

        update.apply_to(&mut target);

        assert_eq!(target.role, AccountRole::Admins);
        assert_eq!(target.name, before.name);
        assert_eq!(target.password, before.password);
        assert_eq!(target.is_active, before.is_active);
        assert!(!update.is_empty());
        assert!(AccountUpdate::default().is_empty());
    }

    #[test]
    fn test_sort_compare_descending() {
        let a = account("A", "a@x.com");
        let b = account("B", "b@x.com");
        let sort = AccountSort::new(AccountSortField::Name, SortOrder::Desc);
        assert_eq!(sort.compare(&a, &b), std::cmp::Ordering::Greater);
    }
}
