//! Behavioral tests for catalog filtering and pagination.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use aestech_core::catalog::{CardDisplay, Catalog, CategoryFilter};
use aestech_core::config::CatalogConfig;
use aestech_core::pagination::{page_window, total_pages};
use proptest::prelude::*;

const CATEGORIES: [&str; 3] = ["skin", "body", "hair"];

/// Route transition logs to the test output; `RUST_LOG=debug` shows them.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// 23 skin items followed by 5 body items and 4 hair items.
fn storefront_catalog() -> Catalog {
    let categories = std::iter::repeat_n("skin", 23)
        .chain(std::iter::repeat_n("body", 5))
        .chain(std::iter::repeat_n("hair", 4))
        .map(|c| Some(c.to_string()))
        .collect();
    Catalog::new(categories, &CatalogConfig::default())
}

fn skin() -> CategoryFilter {
    CategoryFilter::Category("skin".to_string())
}

#[test]
fn given_23_matches_when_paging_then_three_pages() {
    init_tracing();

    // Given
    let mut catalog = storefront_catalog();

    // When
    let view = catalog.select_filter(skin());

    // Then
    assert_eq!(view.window.total_pages, 3);
    assert_eq!(total_pages(23, 9), 3);
}

#[test]
fn given_23_matches_when_page_4_requested_then_clamped_to_3() {
    let mut catalog = storefront_catalog();
    catalog.select_filter(skin());

    let view = catalog.go_to(4).expect("page changes");

    assert_eq!(view.window.page, 3);
    assert_eq!(view.visible_count(), 5);
    assert_eq!(page_window(23, 4, 9).page, 3);
}

#[test]
fn given_23_matches_when_page_0_requested_then_clamped_to_1() {
    let mut catalog = storefront_catalog();
    catalog.select_filter(skin());
    catalog.go_to(3);

    let view = catalog.go_to(0).expect("page changes");

    assert_eq!(view.window.page, 1);
    assert_eq!(page_window(23, 0, 9).page, 1);
}

#[test]
fn given_page_three_when_filter_changes_then_page_resets_to_one() {
    init_tracing();
    let mut catalog = storefront_catalog();
    catalog.go_to(3);
    assert_eq!(catalog.page(), 3);

    let view = catalog.select_filter(CategoryFilter::Category("body".to_string()));

    assert_eq!(catalog.page(), 1);
    assert_eq!(view.window.page, 1);
}

#[test]
fn given_body_filter_when_rendering_then_only_body_cards_visible() {
    let mut catalog = storefront_catalog();

    let view = catalog.select_filter(CategoryFilter::Category("body".to_string()));

    assert_eq!(view.visible_count(), 5);
    assert!(view.controls.is_none(), "one page hides the pagination bar");
    let skin_cards = view.cards.iter().take(23);
    assert!(skin_cards.into_iter().all(|c| *c == CardDisplay::Filtered));
}

#[test]
fn given_page_two_when_page_button_clicked_then_filter_is_kept() {
    let mut catalog = storefront_catalog();
    catalog.select_filter(skin());

    catalog.go_to(2);

    assert_eq!(catalog.filter(), &skin());
    assert_eq!(catalog.page(), 2);
}

#[test]
fn given_unmatched_filter_when_rendering_then_page_one_and_no_controls() {
    let mut catalog = storefront_catalog();

    let view = catalog.select_filter(CategoryFilter::Category("makeup".to_string()));

    assert_eq!(view.window.page, 1);
    assert_eq!(view.visible_count(), 0);
    assert!(view.controls.is_none());
}

fn catalog_strategy() -> impl Strategy<Value = Vec<Option<String>>> {
    prop::collection::vec(
        prop::option::weighted(0.9, prop::sample::select(CATEGORIES.to_vec()))
            .prop_map(|c| c.map(str::to_string)),
        0..80,
    )
}

proptest! {
    #[test]
    fn prop_page_always_within_bounds(items in catalog_strategy(), page in 0usize..20, filter in 0usize..4) {
        let mut catalog = Catalog::new(items, &CatalogConfig::default());
        let filter = CATEGORIES
            .get(filter)
            .map_or(CategoryFilter::All, |c| CategoryFilter::Category((*c).to_string()));
        catalog.select_filter(filter);
        catalog.go_to(page);
        let view = catalog.view();

        prop_assert!(view.window.page >= 1);
        prop_assert!(view.window.page <= view.window.total_pages.max(1));
        prop_assert!(view.visible_count() <= 9);
    }

    #[test]
    fn prop_every_match_visible_on_exactly_one_page(items in catalog_strategy()) {
        let mut catalog = Catalog::new(items, &CatalogConfig::default());
        let view = catalog.select_filter(skin());
        let total = view.window.total_pages;
        let mut seen = vec![0usize; catalog.item_count()];

        for page in 1..=total.max(1) {
            catalog.go_to(page);
            let view = catalog.view();
            for (index, card) in view.cards.iter().enumerate() {
                if *card == CardDisplay::Visible {
                    if let Some(count) = seen.get_mut(index) {
                        *count += 1;
                    }
                }
            }
        }

        let matches = catalog.matches();
        for (index, count) in seen.iter().enumerate() {
            let expected = usize::from(matches.contains(&index));
            prop_assert_eq!(*count, expected);
        }
    }
}
