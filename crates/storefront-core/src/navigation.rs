//! Tab switcher and carousel pager.

use std::ops::Range;

/// Which of `count` tabs is active
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TabSwitcher {
    active: usize,
    count: usize,
}

impl TabSwitcher {
    pub fn new(count: usize) -> Self {
        Self { active: 0, count }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == index
    }

    /// Out-of-range indices are ignored. Returns whether the tab changed.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.count || index == self.active {
            return false;
        }
        self.active = index;
        true
    }
}

/// Page-at-a-time navigation over a horizontal list
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CarouselPager {
    page: usize,
    page_size: usize,
    item_count: usize,
}

impl CarouselPager {
    pub fn new(item_count: usize, page_size: usize) -> Self {
        Self {
            page: 0,
            page_size: page_size.max(1),
            item_count,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Adopt a new item count, pulling the page back if it no longer exists
    pub fn resize(&mut self, item_count: usize) {
        self.item_count = item_count;
        self.page = self.page.min(self.page_count() - 1);
    }

    pub fn page_count(&self) -> usize {
        self.item_count.div_ceil(self.page_size).max(1)
    }

    pub fn can_prev(&self) -> bool {
        self.page > 0
    }

    pub fn can_next(&self) -> bool {
        self.page + 1 < self.page_count()
    }

    pub fn next(&mut self) -> bool {
        if !self.can_next() {
            return false;
        }
        self.page += 1;
        true
    }

    pub fn prev(&mut self) -> bool {
        if !self.can_prev() {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Indices of the items on the current page
    pub fn visible_range(&self) -> Range<usize> {
        let start = (self.page * self.page_size).min(self.item_count);
        let end = (start + self.page_size).min(self.item_count);
        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_select_ignores_out_of_range() {
        let mut tabs = TabSwitcher::new(2);
        assert!(tabs.is_active(0));
        assert!(tabs.select(1));
        assert!(!tabs.select(1));
        assert!(!tabs.select(5));
        assert_eq!(tabs.active(), 1);
    }

    #[test]
    fn pager_walks_pages() {
        let mut pager = CarouselPager::new(7, 3);
        assert_eq!(pager.page_count(), 3);
        assert_eq!(pager.visible_range(), 0..3);
        assert!(!pager.can_prev());
        assert!(pager.next());
        assert!(pager.next());
        assert_eq!(pager.visible_range(), 6..7);
        assert!(!pager.next());
        assert!(pager.prev());
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn resize_clamps_page() {
        let mut pager = CarouselPager::new(9, 3);
        pager.next();
        pager.next();
        pager.resize(4);
        assert_eq!(pager.page(), 1);
        assert_eq!(pager.visible_range(), 3..4);
    }

    #[test]
    fn empty_pager_has_one_page() {
        let pager = CarouselPager::new(0, 4);
        assert_eq!(pager.page_count(), 1);
        assert_eq!(pager.visible_range(), 0..0);
        assert!(!pager.can_next());
    }
}
