//! Pagination summary for host labels and prev/next controls.

use serde::Serialize;

/// Snapshot of the pagination bounds for the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageView {
    /// Current page (1-based).
    pub page: usize,
    /// At least one, even with no rows.
    pub total_pages: usize,
    pub page_size: usize,
    /// Rows matching the query.
    pub filtered_count: usize,
    /// 1-based ordinal of the first row on the page, 0 when the page is empty.
    pub first_row: usize,
    /// 1-based ordinal of the last row on the page, 0 when the page is empty.
    pub last_row: usize,
}

impl PageView {
    pub(crate) fn new(page: usize, page_size: usize, filtered_count: usize) -> Self {
        let total_pages = filtered_count.div_ceil(page_size).max(1);
        let start = (page - 1) * page_size;
        let end = (page * page_size).min(filtered_count);
        let (first_row, last_row) = if start < end {
            (start + 1, end)
        } else {
            (0, 0)
        };
        Self {
            page,
            total_pages,
            page_size,
            filtered_count,
            first_row,
            last_row,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// "Page 2 of 5".
    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }

    /// "11-20 of 42".
    pub fn range_label(&self) -> String {
        format!("{}-{} of {}", self.first_row, self.last_row, self.filtered_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_partial_page() {
        let view = PageView::new(2, 10, 12);
        assert_eq!(view.total_pages, 2);
        assert_eq!((view.first_row, view.last_row), (11, 12));
        assert!(view.has_previous());
        assert!(!view.has_next());
        assert_eq!(view.page_label(), "Page 2 of 2");
        assert_eq!(view.range_label(), "11-12 of 12");
    }

    #[test]
    fn empty_view() {
        let view = PageView::new(1, 10, 0);
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.range_label(), "0-0 of 0");
        assert!(!view.has_previous());
        assert!(!view.has_next());
    }
}
