//! Language and internationalization types

use serde::{Deserialize, Serialize};

/// Language used for user-facing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "vi")]
    Vietnamese,
}

impl Language {
    /// Extract language from Accept-Language header
    ///
    /// Only the first (preferred) entry is considered.
    pub fn from_accept_language(header: &str) -> Self {
        let preferred = header
            .split(',')
            .next()
            .unwrap_or_default()
            .trim()
            .to_lowercase();
        if preferred.starts_with("vi") {
            Language::Vietnamese
        } else {
            Language::English
        }
    }

    /// Get language code (ISO 639-1)
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Vietnamese => "vi",
        }
    }

    /// Get locale code
    pub fn locale(&self) -> &'static str {
        match self {
            Language::English => "en-US",
            Language::Vietnamese => "vi-VN",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "en-us" | "english" => Ok(Language::English),
            "vi" | "vi-vn" | "vietnamese" => Ok(Language::Vietnamese),
            _ => Err(format!("Unsupported language: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_accept_language() {
        assert_eq!(Language::from_accept_language("vi-VN,vi;q=0.9"), Language::Vietnamese);
        assert_eq!(Language::from_accept_language("en-US,en;q=0.9"), Language::English);
        assert_eq!(Language::from_accept_language("en-US,vi;q=0.5"), Language::English);
        assert_eq!(Language::from_accept_language(""), Language::English);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("vi".parse::<Language>().unwrap(), Language::Vietnamese);
        assert_eq!("EN-US".parse::<Language>().unwrap(), Language::English);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_codes() {
        assert_eq!(Language::Vietnamese.code(), "vi");
        assert_eq!(Language::Vietnamese.locale(), "vi-VN");
        assert_eq!(Language::English.to_string(), "en");
    }
}
