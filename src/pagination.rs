//! Paginator
//!
//! Fixed-size pages over the filtered list. Pages are 1-based.

use std::ops::Range;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PageError {
    #[error("page {requested} is outside 1..={total}")]
    OutOfRange { requested: usize, total: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    current: usize,
    per_page: usize,
    total_items: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(crate::config::ITEMS_PER_PAGE)
    }
}

impl Paginator {
    pub fn new(per_page: usize) -> Self {
        Self {
            current: 1,
            per_page: per_page.max(1),
            total_items: 0,
        }
    }

    /// New filtered list: back to page 1
    pub fn reset(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.current = 1;
    }

    pub fn current_page(&self) -> usize {
        self.current
    }

    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.per_page)
    }

    pub fn go_to(&mut self, page: usize) -> Result<(), PageError> {
        let total = self.total_pages();
        if page < 1 || page > total {
            return Err(PageError::OutOfRange { requested: page, total });
        }
        self.current = page;
        Ok(())
    }

    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total_pages()
    }

    pub fn next(&mut self) -> Result<(), PageError> {
        self.go_to(self.current + 1)
    }

    pub fn prev(&mut self) -> Result<(), PageError> {
        self.go_to(self.current.saturating_sub(1))
    }

    /// Index range of the current page within the filtered list
    pub fn page_range(&self) -> Range<usize> {
        let start = ((self.current - 1) * self.per_page).min(self.total_items);
        let end = (start + self.per_page).min(self.total_items);
        start..end
    }

    /// The bar is hidden when everything fits on one page
    pub fn controls_visible(&self) -> bool {
        self.total_pages() > 1
    }

    pub fn label(&self) -> String {
        format!("第 {} / {} 页", self.current, self.total_pages())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_sizes_for_140_items() {
        let mut pager = Paginator::new(56);
        pager.reset(140);
        assert_eq!(pager.total_pages(), 3);
        assert_eq!(pager.page_range().len(), 56);

        pager.next().unwrap();
        assert_eq!(pager.page_range(), 56..112);

        pager.next().unwrap();
        assert_eq!(pager.page_range(), 112..140);
        assert_eq!(pager.page_range().len(), 28);
    }

    #[test]
    fn test_boundary_buttons() {
        let mut pager = Paginator::new(56);
        pager.reset(140);
        assert!(!pager.has_prev());
        assert!(pager.has_next());

        pager.go_to(2).unwrap();
        assert!(pager.has_prev());
        assert!(pager.has_next());

        pager.go_to(3).unwrap();
        assert!(pager.has_prev());
        assert!(!pager.has_next());
    }

    #[test]
    fn test_go_to_out_of_range_keeps_state() {
        let mut pager = Paginator::new(56);
        pager.reset(140);
        pager.go_to(2).unwrap();

        assert_eq!(pager.go_to(0), Err(PageError::OutOfRange { requested: 0, total: 3 }));
        assert_eq!(pager.go_to(4), Err(PageError::OutOfRange { requested: 4, total: 3 }));
        assert_eq!(pager.current_page(), 2);

        pager.go_to(3).unwrap();
        assert!(pager.next().is_err());
        assert_eq!(pager.current_page(), 3);
    }

    #[test]
    fn test_prev_at_first_page_is_rejected() {
        let mut pager = Paginator::new(10);
        pager.reset(25);
        assert!(pager.prev().is_err());
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn test_reset_returns_to_first_page() {
        let mut pager = Paginator::new(56);
        pager.reset(140);
        pager.go_to(3).unwrap();

        pager.reset(10);
        assert_eq!(pager.current_page(), 1);
        assert_eq!(pager.total_pages(), 1);
        assert!(!pager.controls_visible());
    }

    #[test]
    fn test_empty_list() {
        let mut pager = Paginator::new(56);
        pager.reset(0);
        assert_eq!(pager.total_pages(), 0);
        assert_eq!(pager.page_range(), 0..0);
        assert!(!pager.controls_visible());
    }

    #[test]
    fn test_label() {
        let mut pager = Paginator::new(56);
        pager.reset(140);
        pager.go_to(2).unwrap();
        assert_eq!(pager.label(), "第 2 / 3 页");
    }
}
