//! Pagination query parameter extractor.

use serde::{Deserialize, Serialize};

use stayhub_core::types::pagination::PageRequest;

/// Query parameters for paginated endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Page number (1-based, default: 1).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Items per page (default: 25, max: 100).
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    25
}

impl PaginationParams {
    /// Converts to a `PageRequest`, clamping out-of-range values.
    pub fn into_page_request(self) -> PageRequest {
        PageRequest::new(self.page, self.per_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let page = PaginationParams {
            page: 0,
            per_page: 1000,
        }
        .into_page_request();
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 100);
    }
}
