//! Offset-based pagination.
//!
//! `page` and `limit` arrive as raw query-string values. [`PageRequest::parse`]
//! applies defaults and bounds; [`PageMeta`] carries the totals back out.

use crate::common::error::ApiError;

/// Page size when the caller does not pass `limit`.
pub const DEFAULT_LIMIT: u32 = 20;

/// Largest page size a caller can ask for.
pub const MAX_LIMIT: u32 = 100;

/// Validated page number and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest {
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    /// Parse raw `page`/`limit` values. Missing or blank values fall back to
    /// the defaults; anything that is not a positive integer is rejected.
    pub fn parse(page: Option<&str>, limit: Option<&str>) -> Result<Self, ApiError> {
        let defaults = PageRequest::default();
        let page = parse_positive("page", page)?.unwrap_or(defaults.page);
        let limit = parse_positive("limit", limit)?
            .unwrap_or(defaults.limit)
            .min(MAX_LIMIT);

        Ok(PageRequest { page, limit })
    }

    /// Number of rows to skip.
    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1) * i64::from(self.limit)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.limit)
    }

    pub fn meta(&self, total: i64) -> PageMeta {
        PageMeta {
            total,
            current_page: self.page,
            total_pages: total_pages(total, self.limit),
        }
    }
}

/// Pagination totals reported alongside a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    pub total: i64,
    pub current_page: u32,
    pub total_pages: i64,
}

/// ceil(total / limit); zero when there is nothing to show.
pub fn total_pages(total: i64, limit: u32) -> i64 {
    if total <= 0 || limit == 0 {
        return 0;
    }
    let limit = i64::from(limit);
    (total + limit - 1) / limit
}

fn parse_positive(name: &str, raw: Option<&str>) -> Result<Option<u32>, ApiError> {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return Ok(None);
    };

    match raw.parse::<u32>() {
        Ok(n) if n >= 1 => Ok(Some(n)),
        _ => Err(ApiError::validation(format!(
            "{name} must be a positive integer"
        ))),
    }
}
