//! Offset Pagination
//!
//! `offset = (page - 1) * limit`. Whether more pages exist is inferred from
//! the returned page being full; there is no count query.

use serde::Serialize;

use crate::error::app_error::AppResult;
use crate::validation::FieldErrors;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 100;

/// Validated page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    page: u32,
    limit: u32,
}

impl Page {
    /// Build from optional query values, applying defaults
    pub fn new(page: Option<u32>, limit: Option<u32>) -> AppResult<Self> {
        let page = page.unwrap_or(DEFAULT_PAGE);
        let limit = limit.unwrap_or(DEFAULT_LIMIT);

        let mut errors = FieldErrors::new();
        if page < 1 {
            errors.push("page", "Page must be at least 1");
        }
        if !(1..=MAX_LIMIT).contains(&limit) {
            errors.push("limit", format!("Limit must be between 1 and {}", MAX_LIMIT));
        }
        errors.finish()?;

        Ok(Self { page, limit })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }

    /// Metadata for a result set of `returned` rows fetched with this page
    pub fn meta(&self, returned: usize) -> PageMeta {
        PageMeta {
            page: self.page,
            limit: self.limit,
            has_more: returned == self.limit as usize,
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Pagination envelope sent alongside list results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page: u32,
    pub limit: u32,
    pub has_more: bool,
}
