//! Mail delivery configuration

use serde::{Deserialize, Serialize};

use super::Environment;

/// Which mail backend delivers notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MailProvider {
    /// Log messages instead of sending them
    Mock,
    /// Transactional mail REST API
    Http,
}

impl std::str::FromStr for MailProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mock" | "console" => Ok(MailProvider::Mock),
            "http" | "api" => Ok(MailProvider::Http),
            _ => Err(format!("Invalid mail provider: {}", s)),
        }
    }
}

/// Mail configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// Selected provider
    pub provider: MailProvider,

    /// Endpoint of the HTTP mail API
    pub api_url: String,

    /// Bearer token for the HTTP mail API
    #[serde(default)]
    pub api_key: Option<String>,

    /// Sender address
    pub from: String,

    /// Product name used in subjects and bodies
    pub brand_name: String,

    /// Retries for transient HTTP failures
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            provider: MailProvider::Mock,
            api_url: String::from("https://api.resend.com/emails"),
            api_key: None,
            from: String::from("no-reply@mendover.local"),
            brand_name: String::from("Mendover"),
            max_retries: default_max_retries(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl MailConfig {
    /// Default configuration for an environment
    ///
    /// Only development defaults to the mock provider.
    pub fn for_environment(environment: Environment) -> Self {
        let provider = if environment.is_development() {
            MailProvider::Mock
        } else {
            MailProvider::Http
        };
        Self::default().with_provider(provider)
    }

    /// Read `MAIL_*` variables over the environment defaults
    pub fn from_env(environment: Environment) -> Self {
        let defaults = Self::for_environment(environment);
        Self {
            provider: std::env::var("MAIL_PROVIDER")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.provider),
            api_url: std::env::var("MAIL_API_URL").unwrap_or(defaults.api_url),
            api_key: std::env::var("MAIL_API_KEY").ok().filter(|k| !k.is_empty()),
            from: std::env::var("MAIL_FROM").unwrap_or(defaults.from),
            brand_name: std::env::var("MAIL_BRAND_NAME").unwrap_or(defaults.brand_name),
            max_retries: std::env::var("MAIL_MAX_RETRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_retries),
            timeout_seconds: defaults.timeout_seconds,
        }
    }

    /// Set the provider
    pub fn with_provider(mut self, provider: MailProvider) -> Self {
        self.provider = provider;
        self
    }

    /// Set the API key
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the sender address
    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = from.into();
        self
    }

    /// HTTP delivery needs an API key
    pub fn has_credentials(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}

fn default_max_retries() -> u32 {
    3
}

fn default_timeout() -> u64 {
    10
}
