/// Number of trips shown per results page.
pub const PAGE_SIZE: usize = 10;

/// Page arithmetic for a fixed-size ordered result list. The list itself
/// lives in the results widget; this only tracks the page cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paginator {
    item_count: usize,
    current_page: usize,
}

impl Paginator {
    pub fn new(item_count: usize) -> Self {
        Self {
            item_count,
            current_page: 0,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Always at least one page, so an empty result list still renders.
    pub fn total_pages(&self) -> usize {
        usize::max(1, self.item_count.div_ceil(PAGE_SIZE))
    }

    /// Moves `delta` pages, clamped to the valid range.
    pub fn navigate(&mut self, delta: isize) {
        let last = self.total_pages() as isize - 1;
        let target = self.current_page as isize + delta;
        self.current_page = target.clamp(0, last) as usize;
    }

    pub fn jump_to_first(&mut self) {
        self.navigate(-(self.current_page as isize));
    }

    pub fn jump_to_last(&mut self) {
        self.navigate(self.total_pages() as isize - 1 - self.current_page as isize);
    }

    /// Half-open index range of the items on the current page.
    pub fn page_bounds(&self) -> (usize, usize) {
        let start = self.current_page * PAGE_SIZE;
        let end = usize::min(start + PAGE_SIZE, self.item_count);
        (start, end)
    }

    pub fn at_first_page(&self) -> bool {
        self.current_page == 0
    }

    pub fn at_last_page(&self) -> bool {
        self.current_page == self.total_pages() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(Paginator::new(25).total_pages(), 3);
        assert_eq!(Paginator::new(30).total_pages(), 3);
        assert_eq!(Paginator::new(31).total_pages(), 4);
        assert_eq!(Paginator::new(1).total_pages(), 1);
    }

    #[test]
    fn test_empty_list_still_has_one_page() {
        let paginator = Paginator::new(0);
        assert_eq!(paginator.total_pages(), 1);
        assert_eq!(paginator.page_bounds(), (0, 0));
        assert!(paginator.at_first_page());
        assert!(paginator.at_last_page());
    }

    #[test]
    fn test_page_bounds_for_25_items() {
        let mut paginator = Paginator::new(25);
        assert_eq!(paginator.page_bounds(), (0, 10));

        paginator.navigate(1);
        assert_eq!(paginator.page_bounds(), (10, 20));

        paginator.navigate(1);
        assert_eq!(paginator.page_bounds(), (20, 25));
    }

    #[test]
    fn test_navigate_clamps_at_both_ends() {
        let mut paginator = Paginator::new(25);

        paginator.navigate(10);
        assert_eq!(paginator.current_page(), 2);

        paginator.navigate(-10);
        assert_eq!(paginator.current_page(), 0);
    }

    #[test]
    fn test_jumps() {
        let mut paginator = Paginator::new(25);

        paginator.jump_to_last();
        assert_eq!(paginator.current_page(), 2);
        assert!(paginator.at_last_page());

        paginator.jump_to_first();
        assert_eq!(paginator.current_page(), 0);
        assert!(paginator.at_first_page());
    }

    #[test]
    fn test_button_enablement_flags() {
        let mut paginator = Paginator::new(25);
        assert!(paginator.at_first_page());
        assert!(!paginator.at_last_page());

        paginator.navigate(1);
        assert!(!paginator.at_first_page());
        assert!(!paginator.at_last_page());

        paginator.navigate(1);
        assert!(!paginator.at_first_page());
        assert!(paginator.at_last_page());
    }
}
