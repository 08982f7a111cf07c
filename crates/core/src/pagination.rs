//! Page math for the product catalog.
//!
//! Pages are 1-based. A zero-match listing still has one (empty) page so the
//! current page is always a valid index.

/// The slice of matches shown for the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Current page, clamped into `[1, total_pages]`.
    pub page: usize,
    /// `ceil(matches / page_size)`; zero when there are no matches.
    pub total_pages: usize,
    /// First match index on this page.
    pub start: usize,
    /// One past the last match index on this page.
    pub end: usize,
}

impl PageWindow {
    /// Whether the match at `index` (position among matches) is on this page.
    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }

    #[must_use]
    pub const fn is_first(&self) -> bool {
        self.page <= 1
    }

    #[must_use]
    pub const fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }
}

/// Number of pages needed for `match_count` items.
#[must_use]
pub const fn total_pages(match_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    match_count.div_ceil(page_size)
}

/// Clamp a requested page into `[1, total_pages]`, or 1 when there are none.
#[must_use]
pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
    requested.clamp(1, total_pages.max(1))
}

/// Compute the visible window for `requested` page.
#[must_use]
pub fn page_window(match_count: usize, requested: usize, page_size: usize) -> PageWindow {
    let total_pages = total_pages(match_count, page_size);
    let page = clamp_page(requested, total_pages);
    let start = page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(match_count);
    let end = start.saturating_add(page_size).min(match_count);
    PageWindow {
        page,
        total_pages,
        start,
        end,
    }
}

/// One numbered page button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    pub number: usize,
    pub active: bool,
}

/// Render model for the pagination bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationControls {
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub pages: Vec<PageButton>,
}

impl PaginationControls {
    /// Controls for `window`, or `None` when everything fits on one page and
    /// the bar should be hidden.
    #[must_use]
    pub fn for_window(window: &PageWindow) -> Option<Self> {
        if window.total_pages <= 1 {
            return None;
        }
        let pages = (1..=window.total_pages)
            .map(|number| PageButton {
                number,
                active: number == window.page,
            })
            .collect();
        Some(Self {
            prev_disabled: window.is_first(),
            next_disabled: window.is_last(),
            pages,
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 9), 0);
        assert_eq!(total_pages(9, 9), 1);
        assert_eq!(total_pages(10, 9), 2);
        assert_eq!(total_pages(23, 9), 3);
    }

    #[test]
    fn test_clamping() {
        assert_eq!(page_window(23, 4, 9).page, 3);
        assert_eq!(page_window(23, 0, 9).page, 1);
        assert_eq!(page_window(0, 5, 9).page, 1);
    }

    #[test]
    fn test_last_page_is_short() {
        let window = page_window(23, 3, 9);
        assert_eq!((window.start, window.end), (18, 23));
        assert!(window.contains(22));
        assert!(!window.contains(17));
    }

    #[test]
    fn test_empty_window() {
        let window = page_window(0, 1, 9);
        assert_eq!(window.total_pages, 0);
        assert_eq!((window.start, window.end), (0, 0));
    }

    #[test]
    fn test_controls_hidden_for_single_page() {
        assert!(PaginationControls::for_window(&page_window(9, 1, 9)).is_none());
        assert!(PaginationControls::for_window(&page_window(0, 1, 9)).is_none());
    }

    #[test]
    fn test_controls_disable_at_boundaries() {
        let first = PaginationControls::for_window(&page_window(23, 1, 9)).unwrap();
        assert!(first.prev_disabled);
        assert!(!first.next_disabled);

        let middle = PaginationControls::for_window(&page_window(23, 2, 9)).unwrap();
        assert!(!middle.prev_disabled);
        assert!(!middle.next_disabled);

        let last = PaginationControls::for_window(&page_window(23, 3, 9)).unwrap();
        assert!(!last.prev_disabled);
        assert!(last.next_disabled);
    }

    #[test]
    fn test_exactly_one_active_page_button() {
        let controls = PaginationControls::for_window(&page_window(40, 3, 9)).unwrap();
        let numbers: Vec<_> = controls.pages.iter().map(|p| p.number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
        let active: Vec<_> = controls.pages.iter().filter(|p| p.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active.first().map(|p| p.number), Some(3));
    }
}
