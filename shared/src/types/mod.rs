//! Type definitions module with domain-specific sub-modules
//!
//! - `common` - Sort order and small shared enums
//! - `language` - Response language selection
//! - `pagination` - Page parameters and paginated envelopes
//! - `response` - API response wrappers and health checks

pub mod common;
pub mod language;
pub mod pagination;
pub mod response;

pub use common::SortOrder;
pub use language::Language;
pub use pagination::{PageMeta, PaginatedResponse, Pagination};
pub use response::{ApiResponse, HealthResponse, HealthStatus};
