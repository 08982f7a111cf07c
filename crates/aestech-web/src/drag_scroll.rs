//! Drag-to-scroll with momentum for horizontal containers
//!
//! Mouse and touch drags move `scrollLeft` 1:1 through [`Momentum`]; on
//! release the container coasts on a [`FrameLoop`] until the velocity decays.
//! Pressing again drops the frame loop before anything else happens.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use aestech_core::config::MomentumConfig;
use aestech_core::momentum::Momentum;
use aestech_core::timer::TimerSlot;
use web_sys::{Event, HtmlElement};

use crate::dom::{self, Listen, QueryRoot};
use crate::error::Result;
use crate::frame::FrameLoop;

/// Class present on the container while a mouse drag is held.
pub const DRAG_CLASS: &str = "active-drag";

struct DragState {
    element: HtmlElement,
    momentum: Momentum,
    frames: TimerSlot<FrameLoop>,
}

impl DragState {
    fn scroll_left(&self) -> f64 {
        f64::from(self.element.scroll_left())
    }

    fn set_scroll_left(&self, offset: f64) {
        self.element.set_scroll_left(dom::to_px(offset));
    }
}

/// Handle to a drag-scroll container.
#[derive(Clone)]
pub struct DragScroll {
    state: Rc<RefCell<DragState>>,
}

impl std::fmt::Debug for DragScroll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragScroll")
            .field("phase", &self.state.borrow().momentum.phase())
            .finish_non_exhaustive()
    }
}

impl DragScroll {
    /// Make `element` drag-scrollable.
    ///
    /// # Errors
    ///
    /// Returns an error if a listener cannot be attached.
    pub fn attach(element: &HtmlElement, config: &MomentumConfig) -> Result<Self> {
        let drag = Self {
            state: Rc::new(RefCell::new(DragState {
                element: element.clone(),
                momentum: Momentum::new(config),
                frames: TimerSlot::new(),
            })),
        };

        suppress_image_drag(element)?;

        let handle = drag.clone();
        dom::listen(element, "mousedown", Listen::Active, move |e: Event| {
            if let Some(x) = dom::page_x(&e) {
                handle.press(x, true);
            }
        })?;
        let handle = drag.clone();
        dom::listen(element, "mouseleave", Listen::Active, move |_: Event| {
            if handle.is_held() {
                handle.release(true);
            }
        })?;
        let handle = drag.clone();
        dom::listen(element, "mouseup", Listen::Active, move |_: Event| {
            handle.release(true);
        })?;
        let handle = drag.clone();
        dom::listen(element, "mousemove", Listen::Active, move |e: Event| {
            if let Some(x) = dom::page_x(&e) {
                if handle.track(x) {
                    e.prevent_default();
                }
            }
        })?;

        let handle = drag.clone();
        dom::listen(element, "touchstart", Listen::Passive, move |e: Event| {
            if let Some(x) = dom::page_x(&e) {
                handle.press(x, false);
            }
        })?;
        let handle = drag.clone();
        dom::listen(element, "touchend", Listen::Passive, move |_: Event| {
            handle.release(false);
        })?;
        let handle = drag.clone();
        dom::listen(element, "touchmove", Listen::Passive, move |e: Event| {
            if let Some(x) = dom::page_x(&e) {
                handle.track(x);
            }
        })?;

        Ok(drag)
    }

    #[must_use]
    pub fn is_held(&self) -> bool {
        self.state.borrow().momentum.is_held()
    }

    #[must_use]
    pub fn is_coasting(&self) -> bool {
        self.state.borrow().momentum.is_coasting()
    }

    /// Start a drag at `pointer`, cancelling any coasting.
    pub fn press(&self, pointer: f64, mark: bool) {
        let mut state = self.state.borrow_mut();
        state.frames.disarm();
        let scroll = state.scroll_left();
        state.momentum.press(pointer, scroll);
        if mark {
            dom::log_failure(dom::set_class(&state.element, DRAG_CLASS, true));
        }
    }

    /// Follow the pointer. Returns whether a drag was held.
    pub fn track(&self, pointer: f64) -> bool {
        let mut state = self.state.borrow_mut();
        let Some(offset) = state.momentum.drag(pointer) else {
            return false;
        };
        state.set_scroll_left(offset);
        true
    }

    /// Let go, coasting if the last move was fast enough.
    pub fn release(&self, mark: bool) {
        let weak = Rc::downgrade(&self.state);
        let mut state = self.state.borrow_mut();
        if mark {
            dom::log_failure(dom::set_class(&state.element, DRAG_CLASS, false));
        }
        if !state.momentum.release() {
            return;
        }
        match FrameLoop::start(move || coast(&weak)) {
            Ok(frames) => state.frames.arm(|| frames),
            Err(e) => {
                state.momentum.stop();
                web_sys::console::error_1(&e.to_string().into());
            }
        }
    }
}

fn coast(state: &Weak<RefCell<DragState>>) -> bool {
    let Some(state) = state.upgrade() else {
        return false;
    };
    let mut state = state.borrow_mut();
    let scroll = state.scroll_left();
    match state.momentum.step(scroll) {
        Some(offset) => {
            state.set_scroll_left(offset);
            true
        }
        None => false,
    }
}

/// Stop the browser's native image drag for every `<img>` under `root`.
///
/// # Errors
///
/// Returns an error if a listener cannot be attached.
pub fn suppress_image_drag(root: &impl QueryRoot) -> Result<()> {
    dom::query_all(root, "img")?.iter().try_for_each(|img| {
        dom::listen(img, "dragstart", Listen::Active, |e: Event| e.prevent_default())
    })
}
