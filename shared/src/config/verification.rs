//! Verification code configuration

use serde::{Deserialize, Serialize};

/// Lifetime of activation and reset codes
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationConfig {
    /// Minutes until a freshly minted code expires
    pub code_expiration_minutes: i64,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            code_expiration_minutes: 30,
        }
    }
}

impl VerificationConfig {
    /// Read `CODE_EXPIRATION_MINUTES`
    pub fn from_env() -> Self {
        let code_expiration_minutes = std::env::var("CODE_EXPIRATION_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|minutes: &i64| *minutes > 0)
            .unwrap_or(30);
        Self {
            code_expiration_minutes,
        }
    }

    pub fn with_expiration_minutes(mut self, minutes: i64) -> Self {
        self.code_expiration_minutes = minutes;
        self
    }
}
