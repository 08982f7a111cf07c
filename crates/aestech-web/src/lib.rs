//! Leptos 0.7 CSR enhancements for the AESTECH storefront pages
//!
//! The pages are static markup. This crate finds each component's DOM hooks,
//! drives the `aestech-core` state machines from browser events and renders
//! their output back into the page.
//!
//! ## Architecture
//! - Pure state transitions live in `aestech-core`; nothing here decides
//! - Each component is initialized independently; a missing root element
//!   leaves that component off without affecting the others
//! - Timers and animation frames are owned handles held in `TimerSlot`s
//!
//! ## Module Structure
//! - `banner`: hero slider with dots, swipe and auto-advance
//! - `drag_scroll`: drag-to-scroll with momentum
//! - `catalog`: category filter and pagination bar
//! - `showcase`: home page category carousel
//! - `testimonial`: testimonial track arrows, progress and active card
//! - `config`: page-level configuration override
//! - `dom`, `frame`, `error`: DOM helpers, frame loop and error types

#![forbid(unsafe_code)]

pub mod banner;
pub mod catalog;
pub mod config;
pub mod dom;
pub mod drag_scroll;
pub mod error;
pub mod frame;
pub mod showcase;
pub mod testimonial;

pub use error::{Result, WebError};

use banner::BannerSlider;
use catalog::CatalogPage;
use showcase::ShowcaseCarousel;
use testimonial::TestimonialTrack;

/// Every component that found its markup on this page.
#[derive(Debug, Default)]
pub struct Storefront {
    pub banner: Option<BannerSlider>,
    pub catalog: Option<CatalogPage>,
    pub showcase: Option<ShowcaseCarousel>,
    pub testimonials: Option<TestimonialTrack>,
}

impl Storefront {
    /// Names of the components that were initialized.
    #[must_use]
    pub fn active_components(&self) -> Vec<&'static str> {
        [
            self.banner.as_ref().map(|_| "banner"),
            self.catalog.as_ref().map(|_| "catalog"),
            self.showcase.as_ref().map(|_| "showcase"),
            self.testimonials.as_ref().map(|_| "testimonials"),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Initialize every component present on the current page.
///
/// A component that fails to wire is reported to the console and skipped.
///
/// # Errors
///
/// Returns an error only when there is no window or document at all.
pub fn start() -> Result<Storefront> {
    // Effects are created before anything is mounted, so the executor that
    // runs them has to exist first. Err only means it already does.
    let _ = leptos::task::Executor::init_wasm_bindgen();

    let document = dom::document()?;
    let config = config::load(&document);

    Ok(Storefront {
        banner: report("banner slider", BannerSlider::init(&document, &config.slider)),
        catalog: report("catalog", CatalogPage::init(&document, &config.catalog)),
        showcase: report(
            "showcase",
            ShowcaseCarousel::init(&document, &config.showcase, &config.momentum),
        ),
        testimonials: report(
            "testimonials",
            TestimonialTrack::init(&document, &config.testimonial, &config.momentum),
        ),
    })
}

fn report<T>(component: &str, result: Result<Option<T>>) -> Option<T> {
    result.unwrap_or_else(|e| {
        web_sys::console::error_1(&format!("{component}: {e}").into());
        None
    })
}
