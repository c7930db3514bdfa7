//! Configuration for the account service

use accounts_shared::config::AppConfig;

use crate::domain::entities::DEFAULT_CODE_EXPIRATION_MINUTES;

/// Configuration for the account service
#[derive(Debug, Clone)]
pub struct AccountServiceConfig {
    /// Number of minutes before activation and reset codes expire
    pub code_expiration_minutes: i64,
    /// Product name used in notification subjects
    pub brand_name: String,
}

impl Default for AccountServiceConfig {
    fn default() -> Self {
        Self {
            code_expiration_minutes: DEFAULT_CODE_EXPIRATION_MINUTES,
            brand_name: String::from("Mendover"),
        }
    }
}

impl AccountServiceConfig {
    /// Derive from the application configuration
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            code_expiration_minutes: config.verification.code_expiration_minutes,
            brand_name: config.mail.brand_name.clone(),
        }
    }

    pub fn with_code_expiration_minutes(mut self, minutes: i64) -> Self {
        self.code_expiration_minutes = minutes;
        self
    }
}
