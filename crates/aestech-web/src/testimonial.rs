//! Testimonial track: arrow navigation, progress bar and active card
//!
//! Scroll events are coalesced to one update per animation frame. The card
//! list is re-queried on every update since cards may be added later.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use aestech_core::config::{MomentumConfig, TestimonialConfig};
use aestech_core::testimonial::{self, TrackGeometry, TrackScroll};
use aestech_core::timer::TimerSlot;
use web_sys::{Document, Event, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::dom::{self, Listen};
use crate::drag_scroll::DragScroll;
use crate::error::Result;
use crate::frame::FrameLoop;

pub const TRACK_ID: &str = "testimonial-track";
pub const PROGRESS_ID: &str = "testimonial-progress-fill";
pub const CARD_SELECTOR: &str = ".testimonial-card";
pub const PREV_ID: &str = "prev-testimonial";
pub const NEXT_ID: &str = "next-testimonial";

/// DOM the frame update reads and writes. Queued frames hold a clone of
/// this, never the frame slot itself.
#[derive(Clone)]
struct TrackDom {
    document: Document,
    track: HtmlElement,
    progress: HtmlElement,
    ticking: Rc<Cell<bool>>,
}

/// Handle to the initialized testimonial track.
#[derive(Clone)]
pub struct TestimonialTrack {
    dom: TrackDom,
    config: TestimonialConfig,
    frame: Rc<RefCell<TimerSlot<FrameLoop>>>,
}

impl std::fmt::Debug for TestimonialTrack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestimonialTrack")
            .field("config", &self.config)
            .field("ticking", &self.dom.ticking.get())
            .finish_non_exhaustive()
    }
}

impl TestimonialTrack {
    /// Wire the track found in `document`.
    ///
    /// Returns `Ok(None)` unless both the track and its progress fill exist.
    /// Arrows are optional.
    ///
    /// # Errors
    ///
    /// Returns an error if a listener cannot be attached.
    pub fn init(
        document: &Document,
        config: &TestimonialConfig,
        momentum: &MomentumConfig,
    ) -> Result<Option<Self>> {
        let (Some(track), Some(progress)) =
            (dom::by_id(document, TRACK_ID), dom::by_id(document, PROGRESS_ID))
        else {
            return Ok(None);
        };

        let testimonials = Self {
            dom: TrackDom {
                document: document.clone(),
                track: track.clone(),
                progress,
                ticking: Rc::new(Cell::new(false)),
            },
            config: *config,
            frame: Rc::new(RefCell::new(TimerSlot::new())),
        };

        DragScroll::attach(&track, momentum)?;

        if let (Some(prev), Some(next)) = (dom::by_id(document, PREV_ID), dom::by_id(document, NEXT_ID)) {
            let handle = testimonials.clone();
            dom::listen(&next, "click", Listen::Active, move |_: Event| handle.next())?;
            let handle = testimonials.clone();
            dom::listen(&prev, "click", Listen::Active, move |_: Event| handle.prev())?;
        }

        let handle = testimonials.clone();
        dom::listen(&track, "scroll", Listen::Passive, move |_: Event| {
            handle.schedule_update();
        })?;

        Ok(Some(testimonials))
    }

    /// Advance one card, wrapping to the start at the end.
    pub fn next(&self) {
        if let Some(geometry) = self.dom.geometry() {
            self.dom.scroll(testimonial::next(&geometry, &self.config));
        }
    }

    /// Go back one card, wrapping to the end at the start.
    pub fn prev(&self) {
        if let Some(geometry) = self.dom.geometry() {
            self.dom.scroll(testimonial::prev(&geometry, &self.config));
        }
    }

    /// Queue a progress/active-card update for the next frame unless one is
    /// already queued.
    pub fn schedule_update(&self) {
        if self.dom.ticking.get() {
            return;
        }
        let track_dom = self.dom.clone();
        match FrameLoop::once(move || track_dom.update()) {
            Ok(frame) => {
                self.dom.ticking.set(true);
                self.frame.borrow_mut().arm(|| frame);
            }
            Err(e) => web_sys::console::error_1(&e.to_string().into()),
        }
    }

    /// Redraw the progress bar and move the active marker.
    pub fn update(&self) {
        self.dom.update();
    }
}

impl TrackDom {
    fn update(&self) {
        self.ticking.set(false);
        let cards = self.cards();
        let Some(geometry) = self.geometry_with(&cards) else {
            return;
        };

        if let Some(progress) = testimonial::progress(&geometry, cards.len()) {
            let width = format!("{}%", progress.width_pct);
            let left = format!("{}%", progress.left_pct);
            dom::log_failure(dom::set_styles(
                &self.progress,
                &[("width", &width), ("left", &left)],
            ));
        }

        let track_left = self.track.get_bounding_client_rect().left();
        let positions = cards.iter().map(|card| {
            (
                card.get_bounding_client_rect().left() - track_left,
                f64::from(card.offset_width()),
            )
        });
        if let Some(active) = testimonial::active_card(positions) {
            for (index, card) in cards.iter().enumerate() {
                dom::log_failure(dom::set_class(card, "active", index == active));
            }
        }
    }

    fn cards(&self) -> Vec<HtmlElement> {
        dom::query_all(&self.document, CARD_SELECTOR).unwrap_or_else(|e| {
            web_sys::console::error_1(&e.to_string().into());
            Vec::new()
        })
    }

    fn geometry(&self) -> Option<TrackGeometry> {
        self.geometry_with(&self.cards())
    }

    fn geometry_with(&self, cards: &[HtmlElement]) -> Option<TrackGeometry> {
        let first = cards.first()?;
        Some(TrackGeometry {
            scroll_left: f64::from(self.track.scroll_left()),
            scroll_width: f64::from(self.track.scroll_width()),
            client_width: f64::from(self.track.client_width()),
            card_width: f64::from(first.offset_width()),
        })
    }

    fn scroll(&self, scroll: TrackScroll) {
        let options = ScrollToOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        match scroll {
            TrackScroll::To(left) => {
                options.set_left(left);
                self.track.scroll_to_with_scroll_to_options(&options);
            }
            TrackScroll::By(delta) => {
                options.set_left(delta);
                self.track.scroll_by_with_scroll_to_options(&options);
            }
        }
    }
}
