//! RequestAnimationFrame-based step loop
//!
//! `FrameLoop` calls a step function once per paint frame until the step
//! returns `false`. Dropping the loop cancels the pending frame, so it can
//! live in a [`TimerSlot`](aestech_core::timer::TimerSlot) next to gloo
//! timers and be cancelled the same way.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;

use crate::dom;
use crate::error::{Result, WebError};

/// Type alias for RAF closure to reduce complexity
type FrameClosure = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Handle to a running frame loop. Drop to cancel.
pub struct FrameLoop {
    window: Window,
    request_id: Rc<Cell<Option<i32>>>,
    running: Rc<Cell<bool>>,
    // Owns the callback; the callback only holds a weak reference back.
    _closure: FrameClosure,
}

impl std::fmt::Debug for FrameLoop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameLoop")
            .field("request_id", &self.request_id.get())
            .field("running", &self.running.get())
            .finish_non_exhaustive()
    }
}

impl FrameLoop {
    /// Schedule `step` for the next frame and keep rescheduling it while it
    /// returns `true`.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no window or the first frame cannot be
    /// requested.
    pub fn start<F>(step: F) -> Result<Self>
    where
        F: FnMut() -> bool + 'static,
    {
        let window = dom::window()?;
        let request_id = Rc::new(Cell::new(None::<i32>));
        let running = Rc::new(Cell::new(true));
        let closure: FrameClosure = Rc::new(RefCell::new(None));

        let weak: Weak<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::downgrade(&closure);
        let window_clone = window.clone();
        let request_id_clone = request_id.clone();
        let running_clone = running.clone();
        let mut step = step;

        *closure.borrow_mut() = Some(Closure::wrap(Box::new(move |_timestamp: f64| {
            request_id_clone.set(None);
            if !running_clone.get() {
                return;
            }
            if !step() {
                running_clone.set(false);
                return;
            }
            let Some(closure) = weak.upgrade() else {
                running_clone.set(false);
                return;
            };
            match schedule_next_frame(&window_clone, &closure) {
                Ok(id) => request_id_clone.set(Some(id)),
                Err(e) => {
                    running_clone.set(false);
                    web_sys::console::error_1(&e.to_string().into());
                }
            }
        }) as Box<dyn FnMut(f64)>));

        let first_id = schedule_next_frame(&window, &closure)?;
        request_id.set(Some(first_id));

        Ok(Self {
            window,
            request_id,
            running,
            _closure: closure,
        })
    }

    /// Run `step` once on the next frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame cannot be requested.
    pub fn once<F>(step: F) -> Result<Self>
    where
        F: FnOnce() + 'static,
    {
        let mut step = Some(step);
        Self::start(move || {
            if let Some(step) = step.take() {
                step();
            }
            false
        })
    }

    /// Whether the loop still has frames to run.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Stop the loop and cancel the pending frame, if any.
    pub fn cancel(&self) {
        self.running.set(false);
        if let Some(id) = self.request_id.take() {
            // Cancelling an already-fired id is harmless; nothing to recover.
            let _ = self.window.cancel_animation_frame(id);
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Schedule next RAF frame
fn schedule_next_frame(window: &Window, closure: &FrameClosure) -> Result<i32> {
    closure
        .borrow()
        .as_ref()
        .ok_or_else(|| WebError::FrameRequestFailed("frame callback missing".to_string()))
        .and_then(|cb| {
            window
                .request_animation_frame(cb.as_ref().unchecked_ref())
                .map_err(|e| WebError::FrameRequestFailed(format!("{e:?}")))
        })
}
