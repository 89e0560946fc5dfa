//! Pagination types for list endpoints.

use serde::Deserialize;

use crate::config::{DEFAULT_LIMIT, DEFAULT_OFFSET, MAX_PAGE_SIZE};

/// Limit/offset query parameters for list endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationParams {
    #[serde(default = "default_limit")]
    limit: u64,
    #[serde(default = "default_offset")]
    offset: u64,
}

fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

fn default_offset() -> u64 {
    DEFAULT_OFFSET
}

impl PaginationParams {
    pub fn new(limit: u64, offset: u64) -> Self {
        Self { limit, offset }
    }

    /// Get limit capped at maximum
    pub fn limit(&self) -> u64 {
        self.limit.min(MAX_PAGE_SIZE)
    }

    /// Get offset for database query
    pub fn offset(&self) -> u64 {
        self.offset
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_params_use_defaults() {
        let params: PaginationParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.limit(), DEFAULT_LIMIT);
        assert_eq!(params.offset(), DEFAULT_OFFSET);
    }

    #[test]
    fn test_limit_is_capped() {
        let params = PaginationParams::new(10_000, 0);
        assert_eq!(params.limit(), MAX_PAGE_SIZE);
    }

    #[test]
    fn test_explicit_params_are_kept() {
        let params: PaginationParams =
            serde_json::from_str(r#"{"limit": 3, "offset": 6}"#).unwrap();
        assert_eq!(params.limit(), 3);
        assert_eq!(params.offset(), 6);
    }
}
