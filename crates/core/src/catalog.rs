//! Category filtering and pagination for the product catalog.
//!
//! `Catalog` owns the active filter and page. Every change recomputes the
//! matches from the item categories and returns a [`CatalogView`] describing
//! how each card and the pagination bar should be displayed.

use itertools::Itertools;

use crate::config::CatalogConfig;
use crate::pagination::{PageWindow, PaginationControls, page_window};

/// Filter value that matches every item.
pub const ALL: &str = "all";

/// Active category filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// Parse a `data-filter` attribute value. `"all"` and a missing or empty
    /// attribute mean no filtering. The value is compared as written, so
    /// `" skin"` is its own category.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None | Some("" | ALL) => Self::All,
            Some(category) => Self::Category(category.to_string()),
        }
    }

    /// Whether an item tagged with `category` passes this filter.
    #[must_use]
    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Category(wanted) => category == Some(wanted.as_str()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Category(category) => category,
        }
    }
}

/// How one catalog card should be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardDisplay {
    /// Rejected by the filter.
    Filtered,
    /// Matches, but on another page. Reset so it can fade in again later.
    OffPage,
    /// Matches and is on the current page.
    Visible,
}

/// Everything needed to render the catalog after a change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogView {
    /// One entry per catalog item, in document order.
    pub cards: Vec<CardDisplay>,
    pub window: PageWindow,
    /// `None` when the pagination bar should be emptied and hidden.
    pub controls: Option<PaginationControls>,
}

impl CatalogView {
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.cards
            .iter()
            .filter(|card| **card == CardDisplay::Visible)
            .count()
    }
}

/// Filter and page state for one catalog instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Option<String>>,
    filter: CategoryFilter,
    page: usize,
    page_size: usize,
}

impl Catalog {
    /// Create a catalog over items tagged with `categories` (document order),
    /// showing everything from page 1.
    #[must_use]
    pub fn new(categories: Vec<Option<String>>, config: &CatalogConfig) -> Self {
        Self {
            categories,
            filter: CategoryFilter::All,
            page: 1,
            page_size: config.page_size.max(1),
        }
    }

    #[must_use]
    pub const fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.categories.len()
    }

    /// Indices of items passing the active filter.
    #[must_use]
    pub fn matches(&self) -> Vec<usize> {
        self.categories
            .iter()
            .positions(|category| self.filter.matches(category.as_deref()))
            .collect()
    }

    /// Recompute the view, clamping the current page.
    pub fn view(&mut self) -> CatalogView {
        let matches = self.matches();
        let window = page_window(matches.len(), self.page, self.page_size);
        self.page = window.page;

        let mut cards = vec![CardDisplay::Filtered; self.categories.len()];
        for (position, index) in matches.iter().enumerate() {
            if let Some(card) = cards.get_mut(*index) {
                *card = if window.contains(position) {
                    CardDisplay::Visible
                } else {
                    CardDisplay::OffPage
                };
            }
        }

        CatalogView {
            cards,
            controls: PaginationControls::for_window(&window),
            window,
        }
    }

    /// Switch filters. Always resets to page 1.
    pub fn select_filter(&mut self, filter: CategoryFilter) -> CatalogView {
        tracing::debug!(filter = filter.as_str(), "catalog filter selected");
        self.filter = filter;
        self.page = 1;
        self.view()
    }

    /// Jump to `page` (clamped). Returns `None` when the page would not change.
    pub fn go_to(&mut self, page: usize) -> Option<CatalogView> {
        let total = self.view().window.total_pages;
        let target = crate::pagination::clamp_page(page, total);
        if target == self.page {
            return None;
        }
        self.page = target;
        Some(self.view())
    }

    /// Step back one page. `None` on the first page.
    pub fn prev_page(&mut self) -> Option<CatalogView> {
        let target = self.page.checked_sub(1).filter(|page| *page >= 1)?;
        self.go_to(target)
    }

    /// Step forward one page. `None` on the last page.
    pub fn next_page(&mut self) -> Option<CatalogView> {
        let target = self.page.checked_add(1)?;
        self.go_to(target)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn tagged(tags: &[&str]) -> Vec<Option<String>> {
        tags.iter().map(|t| Some((*t).to_string())).collect()
    }

    #[test]
    fn test_parse_filter() {
        assert_eq!(CategoryFilter::parse(Some("all")), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(None), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(Some("")), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse(Some("skin")),
            CategoryFilter::Category("skin".to_string())
        );
    }

    #[test]
    fn test_padded_filter_is_not_trimmed() {
        let padded = CategoryFilter::parse(Some(" skin"));
        assert_eq!(padded, CategoryFilter::Category(" skin".to_string()));
        assert!(!padded.matches(Some("skin")));
    }

    #[test]
    fn test_untagged_item_only_matches_all() {
        let skin = CategoryFilter::Category("skin".to_string());
        assert!(!skin.matches(None));
        assert!(CategoryFilter::All.matches(None));
    }

    #[test]
    fn test_view_marks_filtered_off_page_and_visible() {
        let mut catalog = Catalog::new(
            tagged(&["skin", "hair", "skin", "skin"]),
            &CatalogConfig { page_size: 2 },
        );
        let view = catalog.select_filter(CategoryFilter::Category("skin".to_string()));
        assert_eq!(
            view.cards,
            vec![
                CardDisplay::Visible,
                CardDisplay::Filtered,
                CardDisplay::Visible,
                CardDisplay::OffPage,
            ]
        );
        assert_eq!(view.window.total_pages, 2);
        assert!(view.controls.is_some());
    }

    #[test]
    fn test_prev_on_first_page_is_noop() {
        let mut catalog = Catalog::new(tagged(&["a"; 20]), &CatalogConfig::default());
        assert!(catalog.prev_page().is_none());
        assert_eq!(catalog.page(), 1);
    }

    #[test]
    fn test_next_on_last_page_is_noop() {
        let mut catalog = Catalog::new(tagged(&["a"; 20]), &CatalogConfig::default());
        assert!(catalog.next_page().is_some());
        assert!(catalog.next_page().is_some());
        assert_eq!(catalog.page(), 3);
        assert!(catalog.next_page().is_none());
    }

    #[test]
    fn test_go_to_same_page_is_noop() {
        let mut catalog = Catalog::new(tagged(&["a"; 20]), &CatalogConfig::default());
        assert!(catalog.go_to(1).is_none());
        let view = catalog.go_to(2).unwrap();
        assert_eq!(view.window.page, 2);
        assert_eq!(view.visible_count(), 9);
    }

    #[test]
    fn test_empty_catalog_has_no_controls() {
        let mut catalog = Catalog::new(Vec::new(), &CatalogConfig::default());
        let view = catalog.view();
        assert!(view.cards.is_empty());
        assert_eq!(view.window.page, 1);
        assert!(view.controls.is_none());
    }
}
