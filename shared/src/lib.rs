//! Shared utilities and common types for the account backend
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error response structures
//! - Pagination and response envelopes
//! - Utility functions (email validation and masking)

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, DatabaseConfig, Environment, LoggingConfig, MailConfig, ServerConfig,
    VerificationConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::{ApiResponse, Language, PageMeta, PaginatedResponse, Pagination, SortOrder};
pub use utils::validation;
