//! Banner slider: active slide rendering, dot navigation, swipe and the
//! auto-advance interval.
//!
//! The [`Slider`] state machine decides; this module renders markers, moves
//! the cursor and keeps the interval in a [`TimerSlot`] so there is never
//! more than one running.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use aestech_core::config::SliderConfig;
use aestech_core::slider::{Slider, SliderEvent, TimerCommand};
use aestech_core::timer::TimerSlot;
use gloo_timers::callback::Interval;
use web_sys::{Document, Event, HtmlElement};

use crate::dom::{self, Listen};
use crate::error::Result;

pub const ROOT_SELECTOR: &str = ".product-banner-slider";
pub const SLIDE_SELECTOR: &str = ".banner-slide";
pub const DOT_SELECTOR: &str = ".dot";
const ACTIVE: &str = "active";

struct BannerState {
    slider: Slider,
    root: HtmlElement,
    slides: Vec<HtmlElement>,
    dots: Vec<HtmlElement>,
    autoplay: TimerSlot<Interval>,
    interval_ms: u32,
}

/// Shared handle to an initialized banner slider.
#[derive(Clone)]
pub struct BannerSlider {
    state: Rc<RefCell<BannerState>>,
}

impl std::fmt::Debug for BannerSlider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("BannerSlider")
            .field("slider", &state.slider)
            .field("autoplay_armed", &state.autoplay.is_armed())
            .finish_non_exhaustive()
    }
}

impl BannerSlider {
    /// Wire the slider found in `document`.
    ///
    /// Returns `Ok(None)` when the page has no slider root or no slides.
    ///
    /// # Errors
    ///
    /// Returns an error if a selector is rejected or a listener cannot be
    /// attached.
    pub fn init(document: &Document, config: &SliderConfig) -> Result<Option<Self>> {
        let Some(root) = dom::query(document, ROOT_SELECTOR)? else {
            return Ok(None);
        };
        let slides = dom::query_all(document, SLIDE_SELECTOR)?;
        let dots = dom::query_all(document, DOT_SELECTOR)?;
        let Some(slider) = Slider::new(slides.len(), dots.len(), config) else {
            return Ok(None);
        };

        let banner = Self {
            state: Rc::new(RefCell::new(BannerState {
                slider,
                root: root.clone(),
                slides,
                dots: dots.clone(),
                autoplay: TimerSlot::new(),
                interval_ms: config.interval_ms,
            })),
        };

        for (index, dot) in dots.iter().enumerate() {
            let banner = banner.clone();
            dom::listen(dot, "click", Listen::Active, move |_: Event| {
                banner.dispatch(SliderEvent::DotClicked(index));
            })?;
        }
        banner.wire_drag(&root)?;

        banner.render();
        banner.restart_autoplay();
        web_sys::console::log_1(&"Initializing Banner Slider".into());
        Ok(Some(banner))
    }

    /// Index of the active slide.
    #[must_use]
    pub fn current(&self) -> usize {
        self.state.borrow().slider.current()
    }

    /// Whether the auto-advance interval is running.
    #[must_use]
    pub fn is_autoplaying(&self) -> bool {
        self.state.borrow().autoplay.is_armed()
    }

    /// Feed one event through the slider and apply the outcome.
    pub fn dispatch(&self, event: SliderEvent) {
        let was_dragging = self.state.borrow().slider.is_dragging();
        let transition = self.state.borrow_mut().slider.handle(event);
        let is_dragging = self.state.borrow().slider.is_dragging();

        if transition.changed {
            self.render();
        }
        if was_dragging != is_dragging {
            let cursor = if is_dragging { "grabbing" } else { "grab" };
            let root = self.state.borrow().root.clone();
            dom::log_failure(dom::set_style(&root, "cursor", cursor));
        }
        match transition.timer {
            TimerCommand::Keep => {}
            TimerCommand::Stop => {
                self.state.borrow_mut().autoplay.disarm();
            }
            TimerCommand::Restart => self.restart_autoplay(),
        }
    }

    fn wire_drag(&self, root: &HtmlElement) -> Result<()> {
        let window = dom::window()?;

        let banner = self.clone();
        dom::listen(root, "mousedown", Listen::Active, move |e: Event| {
            if let Some(x) = dom::client_x(&e) {
                banner.dispatch(SliderEvent::DragStarted(x));
            }
        })?;
        let banner = self.clone();
        dom::listen(&window, "mousemove", Listen::Active, move |e: Event| {
            if let Some(x) = dom::client_x(&e) {
                banner.dispatch(SliderEvent::DragMoved(x));
            }
        })?;
        let banner = self.clone();
        dom::listen(&window, "mouseup", Listen::Active, move |_: Event| {
            banner.dispatch(SliderEvent::DragReleased);
        })?;

        let banner = self.clone();
        dom::listen(root, "touchstart", Listen::Passive, move |e: Event| {
            if let Some(x) = dom::client_x(&e) {
                banner.dispatch(SliderEvent::DragStarted(x));
            }
        })?;
        let banner = self.clone();
        dom::listen(root, "touchmove", Listen::Passive, move |e: Event| {
            if let Some(x) = dom::client_x(&e) {
                banner.dispatch(SliderEvent::DragMoved(x));
            }
        })?;
        let banner = self.clone();
        dom::listen(root, "touchend", Listen::Passive, move |_: Event| {
            banner.dispatch(SliderEvent::DragReleased);
        })
    }

    fn restart_autoplay(&self) {
        let weak = Rc::downgrade(&self.state);
        let mut state = self.state.borrow_mut();
        let interval_ms = state.interval_ms;
        state
            .autoplay
            .arm(move || Interval::new(interval_ms, move || tick(&weak)));
    }

    fn render(&self) {
        let state = self.state.borrow();
        let markers = state.slider.markers();
        for (index, slide) in state.slides.iter().enumerate() {
            dom::log_failure(dom::set_class(slide, ACTIVE, markers.slide_is_active(index)));
        }
        for (index, dot) in state.dots.iter().enumerate() {
            dom::log_failure(dom::set_class(dot, ACTIVE, markers.dot_is_active(index)));
        }
    }
}

// The interval only holds a weak reference; the slot that owns it lives in
// the state it would otherwise keep alive.
fn tick(state: &Weak<RefCell<BannerState>>) {
    if let Some(state) = state.upgrade() {
        BannerSlider { state }.dispatch(SliderEvent::Tick);
    }
}
