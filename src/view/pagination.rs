use std::ops::Range;

/// Number of page links shown at once
const PAGE_LINK_WINDOW: usize = 5;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Current page (1-indexed) over a fixed page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    /// A zero page size is treated as one row per page
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self, item_count: usize) -> usize {
        item_count.div_ceil(self.page_size)
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Move to `page`, clamped into [1, max(total pages, 1)]
    pub fn set_page(&mut self, page: usize, item_count: usize) {
        let last = self.total_pages(item_count).max(1);
        self.current_page = page.clamp(1, last);
    }

    pub fn clamp(&mut self, item_count: usize) {
        self.set_page(self.current_page, item_count);
    }

    /// Index range of the current page within `item_count` items
    pub fn window(&self, item_count: usize) -> Range<usize> {
        let start = ((self.current_page - 1) * self.page_size).min(item_count);
        let end = (start + self.page_size).min(item_count);
        start..end
    }

    /// Up to five page numbers centred on the current page where possible
    pub fn page_links(&self, item_count: usize) -> Vec<usize> {
        let total = self.total_pages(item_count);
        if total == 0 {
            return Vec::new();
        }

        let span = PAGE_LINK_WINDOW - 1;
        let mut start = self.current_page.saturating_sub(2).max(1);
        let end = total.min(start + span);
        if end - start < span {
            start = end.saturating_sub(span).max(1);
        }

        (start..=end).collect()
    }
}
