//! Pagination utilities for psalter-dr
//!
//! Word lists for the aggregate sheet run to thousands of entries, so the
//! word-listing endpoint serves 100 entries per page.

/// Page size constant for all pagination
pub const PAGE_SIZE: usize = 100;

/// Pagination metadata calculated from total results
#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    /// Current page number (1-indexed)
    pub page: usize,
    /// Total number of pages
    pub total_pages: usize,
    /// Start index into the full slice (inclusive)
    pub start: usize,
    /// End index into the full slice (exclusive)
    pub end: usize,
}

/// Calculate pagination metadata from total results and requested page.
///
/// The page is clamped to [1, total_pages]; the start/end range is always
/// valid for indexing a slice of `total_results` elements.
pub fn paginate(total_results: usize, requested_page: usize) -> Pagination {
    let total_pages = (total_results + PAGE_SIZE - 1) / PAGE_SIZE;
    let page = requested_page.max(1).min(total_pages.max(1));
    let start = (page - 1) * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(total_results);

    Pagination {
        page,
        total_pages,
        start,
        end,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_normal() {
        let p = paginate(250, 2);
        assert_eq!(p.page, 2);
        assert_eq!(p.total_pages, 3);
        assert_eq!(p.start, 100);
        assert_eq!(p.end, 200);
    }

    #[test]
    fn test_pagination_last_partial_page() {
        let p = paginate(250, 3);
        assert_eq!(p.page, 3);
        assert_eq!(p.start, 200);
        assert_eq!(p.end, 250);
    }

    #[test]
    fn test_pagination_out_of_bounds_high() {
        let p = paginate(150, 99);
        assert_eq!(p.page, 2); // Clamped to last page
        assert_eq!(p.start, 100);
        assert_eq!(p.end, 150);
    }

    #[test]
    fn test_pagination_out_of_bounds_low() {
        let p = paginate(150, 0);
        assert_eq!(p.page, 1); // Clamped to first page
        assert_eq!(p.start, 0);
        assert_eq!(p.end, 100);
    }

    #[test]
    fn test_pagination_empty() {
        let p = paginate(0, 1);
        assert_eq!(p.page, 1);
        assert_eq!(p.total_pages, 0);
        assert_eq!(p.start, 0);
        assert_eq!(p.end, 0);
    }

    #[test]
    fn test_pagination_exact_page_boundary() {
        let p = paginate(200, 2);
        assert_eq!(p.page, 2);
        assert_eq!(p.total_pages, 2);
        assert_eq!(p.start, 100);
        assert_eq!(p.end, 200);
    }
}
