//! Business services containing domain logic and use cases.

pub mod account;

// Re-export commonly used types
pub use account::{
    AccountQuery, AccountService, AccountServiceConfig, ActivationResult, BcryptPasswordHasher,
    NotificationSender, PasswordHasher, PasswordResetInput, PasswordResetRequested,
    PasswordResetResult, RegisterInput, RegisterResult,
};
