//! Account service module
//!
//! Registration, email activation, password reset and profile maintenance
//! over pluggable repository, notification and hashing collaborators.

mod config;
mod password;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::AccountServiceConfig;
pub use password::BcryptPasswordHasher;
pub use service::{parse_account_id, AccountService};
pub use traits::{NotificationSender, PasswordHasher};
pub use types::{
    AccountQuery, ActivationResult, PasswordResetInput, PasswordResetRequested,
    PasswordResetResult, RegisterInput, RegisterResult,
};
