//! Core pagination types
//!
//! This module contains the validated page request, the derived
//! pagination metadata, and the validation contract shared by every
//! operation in the crate.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Maximum accepted page size
pub const MAX_PAGE_SIZE: i32 = 100_000;

// ============================================================================
// Page Request
// ============================================================================

/// A validated page request: 1-based page number plus page size
///
/// Construction is the validation contract. A `PageRequest` can only
/// exist if:
///
/// - `page_number > 0`
/// - `page_size > 0`
/// - `page_number * page_size`, widened to `i64`, does not exceed
///   `i32::MAX` (the offset domain)
/// - `page_size <= MAX_PAGE_SIZE`
///
/// The overflow guard runs before the upper-bound check, so a request
/// like `(1_000_000_000, 1_000_000_000)` reports `overflow` rather than
/// an oversized page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_number: i32,
    page_size: i32,
}

impl PageRequest {
    /// Validate a page number and page size into a request
    pub fn new(page_number: i32, page_size: i32) -> Result<Self> {
        if page_number <= 0 {
            return Err(Error::invalid_argument(
                "page_number",
                "must be greater than zero",
            ));
        }

        ensure_positive_page_size(page_size)?;

        // Widened multiplication; wraparound must not mask the invalid input
        if i64::from(page_number) * i64::from(page_size) > i64::from(i32::MAX) {
            return Err(Error::invalid_argument(
                "overflow",
                format!(
                    "page_number {page_number} and page_size {page_size} combine to exceed the supported offset range"
                ),
            ));
        }

        if page_size > MAX_PAGE_SIZE {
            return Err(Error::invalid_argument(
                "page_size",
                format!("cannot exceed {MAX_PAGE_SIZE}"),
            ));
        }

        Ok(Self {
            page_number,
            page_size,
        })
    }

    /// The 1-based page number
    pub fn page_number(&self) -> i32 {
        self.page_number
    }

    /// The page size
    pub fn page_size(&self) -> i32 {
        self.page_size
    }

    /// Count of leading elements excluded before the page begins
    pub fn offset(&self) -> usize {
        // In range: new() bounds page_number * page_size by i32::MAX
        (self.page_number as usize - 1) * self.page_size as usize
    }

    /// Maximum number of elements in the page
    pub fn limit(&self) -> usize {
        self.page_size as usize
    }
}

// ============================================================================
// Pagination Metadata
// ============================================================================

/// Total page and item counts for a source, derived per call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMetadata {
    /// Number of pages the source splits into
    pub total_pages: u64,
    /// Number of items in the source
    pub total_count: u64,
}

impl PaginationMetadata {
    /// Derive metadata from an item count and a positive page size
    pub(crate) fn from_count(total_count: u64, page_size: i32) -> Self {
        let total_pages = (total_count as f64 / f64::from(page_size)).ceil() as u64;
        Self {
            total_pages,
            total_count,
        }
    }
}

/// Check the page-size lower bound shared with the metadata operations
pub(crate) fn ensure_positive_page_size(page_size: i32) -> Result<()> {
    if page_size <= 0 {
        return Err(Error::invalid_argument(
            "page_size",
            "must be greater than zero",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_accessors() {
        let request = PageRequest::new(3, 25).unwrap();
        assert_eq!(request.page_number(), 3);
        assert_eq!(request.page_size(), 25);
        assert_eq!(request.offset(), 50);
        assert_eq!(request.limit(), 25);
    }

    #[test]
    fn test_page_request_first_page_has_no_offset() {
        let request = PageRequest::new(1, 10).unwrap();
        assert_eq!(request.offset(), 0);
    }

    #[test]
    fn test_page_request_rejects_zero_page_number() {
        let err = PageRequest::new(0, 10).unwrap_err();
        assert_eq!(err.param(), "page_number");
    }

    #[test]
    fn test_page_request_rejects_negative_page_number() {
        let err = PageRequest::new(-1, 10).unwrap_err();
        assert_eq!(err.param(), "page_number");
    }

    #[test]
    fn test_page_request_rejects_zero_page_size() {
        let err = PageRequest::new(1, 0).unwrap_err();
        assert_eq!(err.param(), "page_size");
    }

    #[test]
    fn test_page_request_rejects_oversized_page() {
        let err = PageRequest::new(1, 200_000).unwrap_err();
        assert_eq!(err.param(), "page_size");
        assert!(err.to_string().contains("cannot exceed 100000"));
    }

    #[test]
    fn test_page_request_rejects_offset_overflow() {
        let err = PageRequest::new(1_000_000_000, 1_000_000_000).unwrap_err();
        assert_eq!(err.param(), "overflow");
    }

    #[test]
    fn test_page_request_overflow_wins_over_size_bound() {
        // Both checks would fire here; overflow is reported
        let err = PageRequest::new(i32::MAX, i32::MAX).unwrap_err();
        assert_eq!(err.param(), "overflow");
    }

    #[test]
    fn test_page_request_accepts_largest_valid_offset() {
        let request = PageRequest::new(21_474, MAX_PAGE_SIZE).unwrap();
        assert_eq!(request.offset(), 2_147_300_000);
    }

    #[test]
    fn test_metadata_from_count() {
        let meta = PaginationMetadata::from_count(50, 10);
        assert_eq!(meta.total_pages, 5);
        assert_eq!(meta.total_count, 50);
    }

    #[test]
    fn test_metadata_rounds_partial_page_up() {
        let meta = PaginationMetadata::from_count(51, 10);
        assert_eq!(meta.total_pages, 6);
    }

    #[test]
    fn test_metadata_empty_source_has_no_pages() {
        let meta = PaginationMetadata::from_count(0, 10);
        assert_eq!(meta.total_pages, 0);
        assert_eq!(meta.total_count, 0);
    }

    #[test]
    fn test_metadata_serde_shape() {
        let meta = PaginationMetadata::from_count(50, 10);
        let json = serde_json::to_value(meta).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "total_pages": 5, "total_count": 50 })
        );
    }
}
