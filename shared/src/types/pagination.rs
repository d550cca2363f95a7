//! Pagination related types for list endpoints

use serde::{Deserialize, Serialize};

/// Offset/limit pagination parameters for list endpoints
///
/// `limit` is always kept within `[MIN_LIMIT, MAX_LIMIT]`; construct through
/// `new` or call `validate` after deserializing query parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageQuery {
    /// Number of items to skip from the start of the result set
    #[serde(default)]
    pub skip: u32,

    /// Maximum number of items to return
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: default_limit(),
        }
    }
}

impl PageQuery {
    /// Create a new page query with clamped limit
    pub fn new(skip: u32, limit: u32) -> Self {
        Self {
            skip,
            limit: limit.clamp(MIN_LIMIT, MAX_LIMIT),
        }
    }

    /// Validate and sanitize pagination parameters
    pub fn validate(mut self) -> Self {
        self.limit = self.limit.clamp(MIN_LIMIT, MAX_LIMIT);
        self
    }

    /// Offset as i64 for SQL queries
    pub fn offset_i64(&self) -> i64 {
        self.skip as i64
    }

    /// Limit as i64 for SQL queries
    pub fn limit_i64(&self) -> i64 {
        self.limit as i64
    }
}

// Constants
const DEFAULT_LIMIT: u32 = 10;
const MIN_LIMIT: u32 = 1;
const MAX_LIMIT: u32 = 100;

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_query() {
        let page = PageQuery::default();
        assert_eq!(page.skip, 0);
        assert_eq!(page.limit, 10);
    }

    #[test]
    fn test_limit_clamped() {
        assert_eq!(PageQuery::new(0, 0).limit, 1);
        assert_eq!(PageQuery::new(0, 500).limit, 100);
        assert_eq!(PageQuery::new(0, 25).limit, 25);
    }

    #[test]
    fn test_validate_after_deserialize() {
        let page: PageQuery = serde_json::from_str(r#"{"skip": 3, "limit": 1000}"#).unwrap();
        let page = page.validate();
        assert_eq!(page.skip, 3);
        assert_eq!(page.limit, 100);
    }

    #[test]
    fn test_sql_helpers() {
        let page = PageQuery::new(20, 10);
        assert_eq!(page.offset_i64(), 20);
        assert_eq!(page.limit_i64(), 10);
    }
}
