//! Verification code minted for account activation and password reset.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default expiration time for verification codes (30 minutes)
pub const DEFAULT_CODE_EXPIRATION_MINUTES: i64 = 30;

/// Opaque one-time token paired with its expiry
///
/// The token and its expiry are always stored and cleared together, so an
/// account either has a complete code or none at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationCode {
    /// UUID v4 rendered as a string
    pub token: String,

    /// Instant after which the code is rejected
    pub expires_at: DateTime<Utc>,
}

impl VerificationCode {
    /// Mints a fresh code valid for `expiration_minutes` from now
    ///
    /// # Arguments
    ///
    /// * `expiration_minutes` - Number of minutes until the code expires
    pub fn generate(expiration_minutes: i64) -> Self {
        Self::generate_at(Utc::now(), expiration_minutes)
    }

    /// Mints a fresh code against an explicit clock
    pub fn generate_at(now: DateTime<Utc>, expiration_minutes: i64) -> Self {
        Self {
            token: Uuid::new_v4().to_string(),
            expires_at: now + Duration::minutes(expiration_minutes),
        }
    }

    /// Rebuilds a code from stored parts
    pub fn new(token: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            token: token.into(),
            expires_at,
        }
    }

    /// Checks if the code is still inside its validity window
    pub fn is_valid(&self) -> bool {
        is_code_valid(Some(self.expires_at))
    }

    /// Same as [`is_valid`](Self::is_valid) against an explicit clock
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        is_code_valid_at(Some(self.expires_at), now)
    }

    /// Constant-time comparison with a submitted token
    pub fn matches(&self, candidate: &str) -> bool {
        constant_time_eq(self.token.as_bytes(), candidate.as_bytes())
    }

    /// Matches the token and is unexpired at `now`
    pub fn accepts(&self, candidate: &str, now: DateTime<Utc>) -> bool {
        self.matches(candidate) && self.is_valid_at(now)
    }
}

/// True iff `expires_at` is present and strictly in the future
pub fn is_code_valid(expires_at: Option<DateTime<Utc>>) -> bool {
    is_code_valid_at(expires_at, Utc::now())
}

/// True iff `expires_at` is present and `now` is strictly before it
pub fn is_code_valid_at(expires_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    matches!(expires_at, Some(expiry) if now < expiry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_sets_expiry_window() {
        let now = Utc::now();
        let code = VerificationCode::generate_at(now, DEFAULT_CODE_EXPIRATION_MINUTES);

        assert_eq!(code.expires_at, now + Duration::minutes(30));
        assert!(Uuid::parse_str(&code.token).is_ok());
        assert!(code.is_valid_at(now));
    }

    #[test]
    fn test_tokens_are_unique() {
        let tokens: HashSet<String> = (0..500)
            .map(|_| VerificationCode::generate(DEFAULT_CODE_EXPIRATION_MINUTES).token)
            .collect();
        assert_eq!(tokens.len(), 500);
    }

    #[test]
    fn test_validity_is_strict() {
        let now = Utc::now();
        assert!(is_code_valid_at(Some(now + Duration::seconds(1)), now));
        assert!(!is_code_valid_at(Some(now), now));
        assert!(!is_code_valid_at(Some(now - Duration::seconds(1)), now));
    }

    #[test]
    fn test_missing_expiry_is_invalid() {
        assert!(!is_code_valid(None));
        assert!(!is_code_valid_at(None, Utc::now()));
    }

    #[test]
    fn test_zero_minute_code_is_never_valid() {
        let code = VerificationCode::generate(0);
        assert!(!code.is_valid());
    }

    #[test]
    fn test_accepts_requires_match_and_window() {
        let now = Utc::now();
        let code = VerificationCode::new("abc", now + Duration::minutes(5));

        assert!(code.accepts("abc", now));
        assert!(!code.accepts("abd", now));
        assert!(!code.accepts("abc", now + Duration::minutes(5)));
    }
}
