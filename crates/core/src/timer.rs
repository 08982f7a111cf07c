//! Single-handle timer slot.
//!
//! A `TimerSlot` owns at most one scheduled-timer handle. Arming always
//! releases the previous handle before installing the new one, so a slot is
//! either disarmed or armed with exactly one handle and can never be
//! double-armed. Cancellation is the handle's `Drop`, which matches
//! `gloo_timers::callback::{Interval, Timeout}` and `FrameLoop`.

/// Holder for the one live timer handle of a component.
#[derive(Debug)]
pub struct TimerSlot<H> {
    handle: Option<H>,
    generation: u64,
}

impl<H> Default for TimerSlot<H> {
    fn default() -> Self {
        Self {
            handle: None,
            generation: 0,
        }
    }
}

impl<H> TimerSlot<H> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            handle: None,
            generation: 0,
        }
    }

    /// Cancel any armed handle, then arm the one produced by `schedule`.
    ///
    /// The old handle is dropped before `schedule` runs, so the two never
    /// coexist even momentarily.
    pub fn arm<F>(&mut self, schedule: F)
    where
        F: FnOnce() -> H,
    {
        self.disarm();
        self.handle = Some(schedule());
        self.generation = self.generation.wrapping_add(1);
    }

    /// Cancel the armed handle, if any. Returns whether one was armed.
    pub fn disarm(&mut self) -> bool {
        self.handle.take().is_some()
    }

    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.handle.is_some()
    }

    /// Number of times the slot has been armed. Useful for telling a stale
    /// callback from the current one.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}
