//! Outbound notification messages.

use serde::{Deserialize, Serialize};

/// Template and its render context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "template", content = "context", rename_all = "snake_case")]
pub enum NotificationTemplate {
    /// Account activation mail
    Activation { name: String, activation_code: String },
    /// Password reset mail
    PasswordReset { name: String, reset_code: String },
}

impl NotificationTemplate {
    /// Name of the template file the mail layer renders
    pub fn template_name(&self) -> &'static str {
        match self {
            NotificationTemplate::Activation { .. } => "register",
            NotificationTemplate::PasswordReset { .. } => "retrypassword",
        }
    }

    /// Recipient display name
    pub fn name(&self) -> &str {
        match self {
            NotificationTemplate::Activation { name, .. } => name,
            NotificationTemplate::PasswordReset { name, .. } => name,
        }
    }

    /// The code carried by the message
    pub fn code(&self) -> &str {
        match self {
            NotificationTemplate::Activation {
                activation_code, ..
            } => activation_code,
            NotificationTemplate::PasswordReset { reset_code, .. } => reset_code,
        }
    }
}

/// A message addressed to one recipient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub to: String,
    pub subject: String,
    #[serde(flatten)]
    pub template: NotificationTemplate,
}

impl Notification {
    /// Activation mail for a freshly minted code
    pub fn activation(
        to: impl Into<String>,
        name: impl Into<String>,
        code: impl Into<String>,
        brand: &str,
    ) -> Self {
        Self {
            to: to.into(),
            subject: format!("Activate your account at {}", brand),
            template: NotificationTemplate::Activation {
                name: name.into(),
                activation_code: code.into(),
            },
        }
    }

    /// Password reset mail for a freshly minted code
    pub fn password_reset(
        to: impl Into<String>,
        name: impl Into<String>,
        code: impl Into<String>,
        brand: &str,
    ) -> Self {
        Self {
            to: to.into(),
            subject: format!("Change your password account at {}", brand),
            template: NotificationTemplate::PasswordReset {
                name: name.into(),
                reset_code: code.into(),
            },
        }
    }
}
