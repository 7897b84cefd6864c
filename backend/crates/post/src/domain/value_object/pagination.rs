//! Feed Pagination
//!
//! 1-based pages. Out-of-range input is normalised, never rejected:
//! `page < 1` becomes 1 and `limit < 1` becomes [`DEFAULT_LIMIT`].
//! There is no upper bound on `limit`.

/// Page size used when none (or a non-positive one) is given
pub const DEFAULT_LIMIT: i64 = 10;

/// Normalised page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: i64,
    limit: i64,
}

impl Pagination {
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page: if page < 1 { 1 } else { page },
            limit: if limit < 1 { DEFAULT_LIMIT } else { limit },
        }
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Rows to skip: `(page - 1) * limit`
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, DEFAULT_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_values_use_defaults() {
        assert_eq!(Pagination::new(0, 0), Pagination::new(1, 10));
        assert_eq!(Pagination::new(-3, -1), Pagination::default());
    }

    #[test]
    fn test_offset() {
        assert_eq!(Pagination::new(1, 10).offset(), 0);
        assert_eq!(Pagination::new(2, 5).offset(), 5);
        assert_eq!(Pagination::new(3, 20).offset(), 40);
    }

    #[test]
    fn test_limit_is_not_clamped() {
        assert_eq!(Pagination::new(1, 10_000).limit(), 10_000);
    }

    #[test]
    fn test_offset_saturates() {
        assert_eq!(Pagination::new(i64::MAX, i64::MAX).offset(), i64::MAX);
    }
}
