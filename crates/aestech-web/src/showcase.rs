//! Home page showcase carousel
//!
//! Category buttons fade the carousel out, swap in that category's cards
//! after the fade delay, and fade it back in. The swap is a [`Timeout`] held
//! in a [`TimerSlot`], so a quick second click replaces the pending swap
//! instead of racing it.

use std::cell::RefCell;
use std::rc::Rc;

use aestech_core::config::{MomentumConfig, ShowcaseConfig};
use aestech_core::showcase::{Showcase, ShowcaseItem};
use aestech_core::timer::TimerSlot;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use web_sys::{Document, Event, HtmlElement};

use crate::dom::{self, Listen};
use crate::drag_scroll::DragScroll;
use crate::error::Result;

pub const CAROUSEL_ID: &str = "home-products-carousel";
pub const FILTER_SELECTOR: &str = ".home-filter-item";

struct ShowcaseState {
    showcase: Showcase,
    carousel: HtmlElement,
    items: RwSignal<Vec<ShowcaseItem>>,
    swap: TimerSlot<Timeout>,
    fade_ms: u32,
}

/// Handle to the initialized showcase carousel.
#[derive(Clone)]
pub struct ShowcaseCarousel {
    state: Rc<RefCell<ShowcaseState>>,
}

impl std::fmt::Debug for ShowcaseCarousel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ShowcaseCarousel")
            .field("current", &state.showcase.current())
            .field("swaps", &state.swap.generation())
            .finish_non_exhaustive()
    }
}

impl ShowcaseCarousel {
    /// Wire the carousel and its category buttons.
    ///
    /// Returns `Ok(None)` when the page has no carousel.
    ///
    /// # Errors
    ///
    /// Returns an error if a selector is rejected or a listener cannot be
    /// attached.
    pub fn init(
        document: &Document,
        config: &ShowcaseConfig,
        momentum: &MomentumConfig,
    ) -> Result<Option<Self>> {
        let Some(carousel) = dom::by_id(document, CAROUSEL_ID) else {
            return Ok(None);
        };
        let filters = dom::query_all(document, FILTER_SELECTOR)?;

        let items = RwSignal::new(Vec::new());
        carousel.set_inner_html("");
        leptos::mount::mount_to(carousel.clone(), move || {
            view! { <ShowcaseCards items=items /> }
        })
        .forget();

        let showcase = Self {
            state: Rc::new(RefCell::new(ShowcaseState {
                showcase: Showcase::storefront(config),
                carousel: carousel.clone(),
                items,
                swap: TimerSlot::new(),
                fade_ms: config.fade_ms,
            })),
        };

        for item in &filters {
            let handle = showcase.clone();
            let buttons = filters.clone();
            let item_ref = item.clone();
            dom::listen(item, "click", Listen::Active, move |_: Event| {
                for button in &buttons {
                    dom::log_failure(dom::set_class(button, "active", false));
                }
                dom::log_failure(dom::set_class(&item_ref, "active", true));
                let category = item_ref.get_attribute("data-filter").unwrap_or_default();
                handle.select(&category);
            })?;
        }

        DragScroll::attach(&carousel, momentum)?;
        showcase.select(&config.default_category);
        Ok(Some(showcase))
    }

    /// Category currently shown (after fallback).
    #[must_use]
    pub fn current(&self) -> String {
        self.state.borrow().showcase.current().to_string()
    }

    /// Number of swaps scheduled so far.
    #[must_use]
    pub fn swaps(&self) -> u64 {
        self.state.borrow().swap.generation()
    }

    /// Fade out, swap to `category` after the fade delay, fade back in.
    pub fn select(&self, category: &str) {
        let mut state = self.state.borrow_mut();
        let next = state.showcase.select(category).to_vec();
        dom::log_failure(dom::set_styles(
            &state.carousel,
            &[("opacity", "0"), ("transition", "opacity 0.3s ease")],
        ));

        let carousel = state.carousel.clone();
        let items = state.items;
        let fade_ms = state.fade_ms;
        state.swap.arm(move || {
            Timeout::new(fade_ms, move || {
                items.set(next);
                dom::log_failure(dom::set_style(&carousel, "opacity", "1"));
            })
        });
    }
}

/// Product cards for one category followed by the "discover more" end card.
#[component]
pub fn ShowcaseCards(items: RwSignal<Vec<ShowcaseItem>>) -> impl IntoView {
    let cards = move || {
        items
            .get()
            .into_iter()
            .map(|item| {
                let image_id = item.image_element_id();
                let ShowcaseItem {
                    title, image_path, ..
                } = item;
                let alt = title.clone();
                view! {
                    <div class="home-product-wrapper">
                        <div class="home-product-card">
                            <div class="home-product-image">
                                <img
                                    src=image_path
                                    alt=alt
                                    id=image_id
                                    on:dragstart=|ev| ev.prevent_default()
                                />
                            </div>
                        </div>
                        <p class="home-product-title">{title}</p>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        {cards}
        <div class="home-product-wrapper">
            <div class="home-product-card end-card">
                <div class="end-card-content">
                    <a href="products.html" class="discover-btn">
                        "Discover more \u{2192}"
                    </a>
                </div>
            </div>
            <p class="home-product-title" style="visibility: hidden;">
                "\u{a0}"
            </p>
        </div>
    }
}
