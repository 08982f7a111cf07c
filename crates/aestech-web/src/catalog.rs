//! Product catalog: category filter buttons, card visibility and the
//! pagination bar.
//!
//! The [`Catalog`] lives in a signal. Filter buttons are existing markup and
//! get plain listeners; the pagination bar is a Leptos component mounted into
//! `#pagination-container` that re-renders from the current controls.

use std::cell::RefCell;
use std::rc::Rc;

use aestech_core::catalog::{CardDisplay, Catalog, CatalogView, CategoryFilter};
use aestech_core::config::CatalogConfig;
use aestech_core::pagination::PaginationControls;
use aestech_core::timer::TimerSlot;
use leptos::prelude::*;
use web_sys::{Document, Event, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::dom::{self, Listen};
use crate::error::Result;
use crate::frame::FrameLoop;

pub const FILTER_SELECTOR: &str = ".filter-item";
pub const CARD_SELECTOR: &str = ".product-catalog-card";
pub const PAGINATION_ID: &str = "pagination-container";

/// A click on the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    Prev,
    Next,
    Number(usize),
}

impl PageRequest {
    /// Apply the request, returning the new view when the page changed.
    pub fn apply(self, catalog: &mut Catalog) -> Option<CatalogView> {
        match self {
            Self::Prev => catalog.prev_page(),
            Self::Next => catalog.next_page(),
            Self::Number(page) => catalog.go_to(page),
        }
    }
}

/// Handle to an initialized catalog.
#[derive(Debug, Clone, Copy)]
pub struct CatalogPage {
    catalog: RwSignal<Catalog>,
    view: RwSignal<CatalogView>,
}

impl CatalogPage {
    /// Wire filters, cards and pagination found in `document`.
    ///
    /// Returns `Ok(None)` when there is no pagination container.
    ///
    /// # Errors
    ///
    /// Returns an error if a selector is rejected or a listener cannot be
    /// attached.
    pub fn init(document: &Document, config: &CatalogConfig) -> Result<Option<Self>> {
        let Some(container) = dom::by_id(document, PAGINATION_ID) else {
            return Ok(None);
        };
        let cards = dom::query_all(document, CARD_SELECTOR)?;
        let filters = dom::query_all(document, FILTER_SELECTOR)?;

        let categories = cards
            .iter()
            .map(|card| card.get_attribute("data-category"))
            .collect();
        let mut catalog = Catalog::new(categories, config);
        let initial = catalog.view();

        let page = Self {
            catalog: RwSignal::new(catalog),
            view: RwSignal::new(initial),
        };

        prepare_reveal(&cards, config.page_size);
        page.render_cards(cards);
        page.mount_pagination(container);

        for item in &filters {
            let buttons = filters.clone();
            let item_ref = item.clone();
            dom::listen(item, "click", Listen::Active, move |_: Event| {
                for button in &buttons {
                    dom::log_failure(dom::set_class(button, "active", false));
                }
                dom::log_failure(dom::set_class(&item_ref, "active", true));
                let filter = CategoryFilter::parse(item_ref.get_attribute("data-filter").as_deref());
                page.select_filter(filter);
            })?;
        }

        Ok(Some(page))
    }

    /// Apply a filter and return to page 1.
    pub fn select_filter(&self, filter: CategoryFilter) {
        if let Some(view) = self.catalog.try_update(|c| c.select_filter(filter)) {
            self.view.set(view);
        }
    }

    /// Handle a pagination click. Returns whether the page changed.
    pub fn request(&self, request: PageRequest) -> bool {
        let Some(view) = self.catalog.try_update(|c| request.apply(c)).flatten() else {
            return false;
        };
        self.view.set(view);
        true
    }

    /// Current view.
    #[must_use]
    pub fn view(&self) -> CatalogView {
        self.view.get_untracked()
    }

    fn render_cards(&self, cards: Vec<HtmlElement>) {
        let view = self.view;
        let reveal: Rc<RefCell<TimerSlot<FrameLoop>>> = Rc::new(RefCell::new(TimerSlot::new()));
        Effect::new(move |_| {
            let displays = view.with(|v| v.cards.clone());
            let mut shown = Vec::new();
            for (card, display) in cards.iter().zip(displays) {
                let styles: &[(&str, &str)] = match display {
                    CardDisplay::Filtered => &[("display", "none")],
                    CardDisplay::OffPage => &[
                        ("display", "none"),
                        ("opacity", "0"),
                        ("transform", "translateY(20px)"),
                    ],
                    CardDisplay::Visible => {
                        shown.push(card.clone());
                        &[("display", "block")]
                    }
                };
                dom::log_failure(dom::set_styles(card, styles));
            }
            // Reveal on the next frame so the opacity transition runs from the
            // freshly displayed state.
            match FrameLoop::once(move || reveal_cards(&shown)) {
                Ok(frame) => reveal.borrow_mut().arm(|| frame),
                Err(e) => web_sys::console::error_1(&e.to_string().into()),
            }
        });
    }

    fn mount_pagination(&self, container: HtmlElement) {
        let page = *self;
        let controls = Memo::new(move |_| page.view.with(|v| v.controls.clone()));

        let shell = container.clone();
        Effect::new(move |_| {
            let display = if controls.with(Option::is_some) { "flex" } else { "none" };
            dom::log_failure(dom::set_style(&shell, "display", display));
        });

        let on_page = Callback::new(move |request: PageRequest| {
            if page.request(request) {
                scroll_to_top();
            }
        });

        // The bar owns the container; drop any placeholder markup.
        container.set_inner_html("");
        leptos::mount::mount_to(container, move || {
            view! { <PaginationBar controls=controls on_page=on_page /> }
        })
        .forget();
    }
}

/// Prev/next buttons around numbered page buttons. Renders nothing when the
/// controls are hidden.
#[component]
pub fn PaginationBar(
    controls: Memo<Option<PaginationControls>>,
    on_page: Callback<PageRequest>,
) -> impl IntoView {
    move || {
        controls.get().map(|controls| {
            let pages = controls
                .pages
                .into_iter()
                .map(|button| {
                    let class = if button.active { "page-num active" } else { "page-num" };
                    let number = button.number;
                    view! {
                        <span
                            class=class
                            data-page=number.to_string()
                            on:click=move |_| on_page.run(PageRequest::Number(number))
                        >
                            {number}
                        </span>
                    }
                })
                .collect_view();

            view! {
                <button
                    class="nav-prev"
                    disabled=controls.prev_disabled
                    on:click=move |_| on_page.run(PageRequest::Prev)
                >
                    "\u{2190} Prev"
                </button>
                <div class="page-numbers">{pages}</div>
                <button
                    class="nav-next"
                    disabled=controls.next_disabled
                    on:click=move |_| on_page.run(PageRequest::Next)
                >
                    "Next \u{2192}"
                </button>
            }
        })
    }
}

fn prepare_reveal(cards: &[HtmlElement], page_size: usize) {
    for (index, card) in cards.iter().enumerate() {
        let delay = format!("{}s", stagger_delay(index, page_size));
        dom::log_failure(dom::set_styles(
            card,
            &[
                ("opacity", "0"),
                ("transform", "translateY(30px)"),
                (
                    "transition",
                    "opacity 0.6s cubic-bezier(0.4, 0, 0.2, 1), transform 0.6s cubic-bezier(0.4, 0, 0.2, 1)",
                ),
                ("transition-delay", &delay),
            ],
        ));
    }
}

fn reveal_cards(cards: &[HtmlElement]) {
    for card in cards {
        dom::log_failure(dom::set_styles(
            card,
            &[("opacity", "1"), ("transform", "translateY(0)")],
        ));
    }
}

/// Fade-in delay for the card at `index`, restarting with every page.
#[must_use]
pub fn stagger_delay(index: usize, page_size: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let slot = (index % page_size.max(1)) as f64;
    slot * 0.05
}

fn scroll_to_top() {
    let Ok(window) = dom::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
