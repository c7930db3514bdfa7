//! Small shared types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sort direction for list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Parse a sort expression with an optional leading `-`
    ///
    /// `"-created_at"` yields `("created_at", Desc)`.
    pub fn split_field(expr: &str) -> (&str, SortOrder) {
        let expr = expr.trim();
        match expr.strip_prefix('-') {
            Some(field) => (field.trim(), SortOrder::Desc),
            None => (expr.strip_prefix('+').unwrap_or(expr).trim(), SortOrder::Asc),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "ASC"),
            SortOrder::Desc => write!(f, "DESC"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_field() {
        assert_eq!(SortOrder::split_field("-created_at"), ("created_at", SortOrder::Desc));
        assert_eq!(SortOrder::split_field("name"), ("name", SortOrder::Asc));
        assert_eq!(SortOrder::split_field("+email"), ("email", SortOrder::Asc));
    }

    #[test]
    fn test_display_is_sql_keyword() {
        assert_eq!(SortOrder::Desc.to_string(), "DESC");
    }
}
