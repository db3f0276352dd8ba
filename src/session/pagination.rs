pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Client-side page window over an in-memory list.
///
/// `page` is 1-based. The state never looks at the list itself; callers pass
/// the current record count so the window can be recomputed after every
/// mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    /// A page size of zero is treated as one.
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Changes the window size and returns to the first page.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }

    fn start(&self) -> usize {
        (self.page - 1).saturating_mul(self.page_size)
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.page.saturating_mul(self.page_size) < total
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Moves forward one page. Returns false when already on the last page.
    pub fn next(&mut self, total: usize) -> bool {
        if !self.has_next(total) {
            return false;
        }
        self.page += 1;
        true
    }

    /// Moves back one page. Returns false when already on page 1.
    pub fn prev(&mut self) -> bool {
        if !self.has_prev() {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Pulls the page index down to the last non-empty page.
    pub fn clamp(&mut self, total: usize) {
        self.page = self.page.min(self.page_count(total).max(1));
    }

    /// The visible window `[(page-1)*size, page*size)` clipped to `items`.
    ///
    /// A page past the end yields an empty slice.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.start().min(items.len());
        let end = start.saturating_add(self.page_size).min(items.len());
        &items[start..end]
    }
}
