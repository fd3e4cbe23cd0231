use crate::error::PageError;

/// Read-only view over a paged result set. The parent controller owns the
/// results; this only borrows them for the duration of a render.
#[derive(Debug)]
pub struct PageState<'a, T> {
    /// Current page, 1-based
    page: u32,
    results: &'a [T],
    /// number of items to show in a page
    results_per_page: u32,
}

// derive(Clone) would require T: Clone
impl<T> Clone for PageState<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PageState<'_, T> {}

impl<'a, T> PageState<'a, T> {
    pub fn new(page: u32, results: &'a [T], results_per_page: u32) -> Result<Self, PageError> {
        if page == 0 {
            return Err(PageError::PageOutOfRange(page));
        }
        if results_per_page == 0 {
            return Err(PageError::ZeroPageSize);
        }
        Ok(Self {
            page,
            results,
            results_per_page,
        })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn results(&self) -> &'a [T] {
        self.results
    }

    pub fn results_per_page(&self) -> u32 {
        self.results_per_page
    }

    pub fn total_pages(&self) -> u32 {
        let len = self.results.len() as u64;
        let per_page = u64::from(self.results_per_page);
        len.div_ceil(per_page).try_into().unwrap_or(u32::MAX)
    }

    /// The items displayed on the current page. Empty when the page is past the end.
    pub fn current_slice(&self) -> &'a [T] {
        let per_page = self.results_per_page as usize;
        let start_index = (self.page as usize - 1).saturating_mul(per_page);
        if start_index >= self.results.len() {
            return &[];
        }
        let end_index = start_index.saturating_add(per_page);
        &self.results[start_index..end_index.min(self.results.len())]
    }

    /// Returns a state for the same results at a different page
    pub fn with_page(&self, page: u32) -> Result<Self, PageError> {
        Self::new(page, self.results, self.results_per_page)
    }

    /// Same results, clamped into `1..=total_pages`
    pub fn clamped(&self) -> Self {
        let page = self.page.min(self.total_pages()).max(1);
        Self { page, ..*self }
    }
}
