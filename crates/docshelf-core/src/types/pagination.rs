//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Page size used when none (or a non-positive one) is requested.
pub const DEFAULT_PAGE_LIMIT: u64 = 20;
/// Largest page size a caller may request.
pub const MAX_PAGE_LIMIT: u64 = 100;

/// Request parameters for paginated queries.
///
/// Construction never fails: out-of-range values are coerced, so a request
/// for page 0 is served as page 1 and a limit of 0 as the default limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub limit: u64,
}

impl PageRequest {
    /// Create a page request with the standard default and maximum limits.
    pub fn new(page: u64, limit: u64) -> Self {
        Self::bounded(page, limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT)
    }

    /// Create a page request with explicit limit bounds.
    pub fn bounded(page: u64, limit: u64, default_limit: u64, max_limit: u64) -> Self {
        let max_limit = max_limit.max(1);
        let limit = if limit == 0 { default_limit } else { limit };
        Self {
            page: page.max(1),
            limit: limit.clamp(1, max_limit),
        }
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

/// Pagination metadata returned alongside a page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Current page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub limit: u64,
    /// Total number of matching items across all pages.
    pub total: u64,
    /// Total number of pages; zero when nothing matched.
    pub total_pages: u64,
}

impl Pagination {
    /// Compute pagination metadata for `total` matching items.
    pub fn new(request: PageRequest, total: u64) -> Self {
        Self {
            page: request.page,
            limit: request.limit,
            total,
            total_pages: total.div_ceil(request.limit.max(1)),
        }
    }
}

/// One page of results plus its pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items on this page.
    pub data: Vec<T>,
    /// Pagination metadata.
    pub pagination: Pagination,
}

impl<T> Page<T> {
    /// Transform the items while keeping the pagination metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            data: self.data.into_iter().map(f).collect(),
            pagination: self.pagination,
        }
    }
}
