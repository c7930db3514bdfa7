//! Pagination related types for list endpoints

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Normalized pagination parameters (1-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page number
    pub current: u32,

    /// Number of items per page
    pub page_size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    /// Build from optional query values
    ///
    /// Absent or zero values fall back to the defaults; the page size is
    /// capped at [`MAX_PAGE_SIZE`].
    pub fn from_query(current: Option<u32>, page_size: Option<u32>) -> Self {
        let current = current.filter(|c| *c > 0).unwrap_or(DEFAULT_PAGE);
        let page_size = page_size
            .filter(|s| *s > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .min(MAX_PAGE_SIZE);
        Self { current, page_size }
    }

    /// Number of records to skip
    pub fn offset(&self) -> u64 {
        u64::from(self.current.saturating_sub(1)) * u64::from(self.page_size)
    }

    /// Number of records to fetch
    pub fn limit(&self) -> u64 {
        u64::from(self.page_size)
    }

    /// Total pages for a record count
    pub fn total_pages(&self, total: u64) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        total.div_ceil(u64::from(self.page_size))
    }
}

/// Listing metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub current: u32,
    pub page_size: u32,
    pub pages: u64,
    pub total: u64,
}

/// Paginated response wrapper with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub meta: PageMeta,
    pub results: Vec<T>,
}

impl<T> PaginatedResponse<T> {
    /// Create a new paginated response
    pub fn new(results: Vec<T>, pagination: Pagination, total: u64) -> Self {
        Self {
            meta: PageMeta {
                current: pagination.current,
                page_size: pagination.page_size,
                pages: pagination.total_pages(total),
                total,
            },
            results,
        }
    }
}
