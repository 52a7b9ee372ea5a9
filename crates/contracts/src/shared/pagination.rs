use serde::{Deserialize, Serialize};

/// Page sizes offered by every paginated screen.
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [10, 20, 50];

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Query parameters for paginated list endpoints. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    pub page: usize,
    pub limit: usize,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Response shape of every paginated list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    #[serde(rename = "totalPages", default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<usize>,
}

impl<T> Paginated<T> {
    /// Page count as reported by the server, recomputed when absent.
    pub fn page_count(&self) -> usize {
        self.total_pages
            .unwrap_or_else(|| total_pages(self.total, self.limit))
    }
}

/// Number of pages needed for `total` items, `limit` per page. Never 0.
pub fn total_pages(total: usize, limit: usize) -> usize {
    if limit == 0 {
        return 1;
    }
    ((total + limit - 1) / limit).max(1)
}

/// Collapse an out-of-range page (0, or past the end after the set shrank)
/// back to page 1.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    if page == 0 || page > total_pages {
        1
    } else {
        page
    }
}

/// Half-open `[start, end)` bounds of a 1-based page over a slice of `len`
/// items.
pub fn page_bounds(page: usize, limit: usize, len: usize) -> (usize, usize) {
    let page = page.max(1);
    let start = ((page - 1) * limit).min(len);
    let end = (start + limit).min(len);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(13, 10), 2);
        assert_eq!(total_pages(100, 20), 5);
        assert_eq!(total_pages(101, 20), 6);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(1, 3), 1);
        assert_eq!(clamp_page(3, 3), 3);
        assert_eq!(clamp_page(4, 3), 1);
        assert_eq!(clamp_page(0, 3), 1);
        // a delete shrank the set below the current page
        assert_eq!(clamp_page(2, 1), 1);
    }

    #[test]
    fn test_page_bounds() {
        // 13 rows, page size 10: page 1 is rows 0..10, page 2 is rows 10..13
        assert_eq!(page_bounds(1, 10, 13), (0, 10));
        assert_eq!(page_bounds(2, 10, 13), (10, 13));
        // every page k covers [(k-1)*L, min(k*L, N))
        for k in 1..=5 {
            let (start, end) = page_bounds(k, 20, 87);
            assert_eq!(start, ((k - 1) * 20).min(87));
            assert_eq!(end, (k * 20).min(87));
        }
        // past the end yields an empty window, not a panic
        assert_eq!(page_bounds(9, 10, 13), (13, 13));
    }

    #[test]
    fn test_page_count_prefers_server_value() {
        let p = Paginated::<u8> {
            items: vec![],
            total: 13,
            page: 1,
            limit: 10,
            total_pages: Some(2),
        };
        assert_eq!(p.page_count(), 2);

        let p = Paginated::<u8> {
            items: vec![],
            total: 13,
            page: 1,
            limit: 10,
            total_pages: None,
        };
        assert_eq!(p.page_count(), 2);
    }
}
