//! Banner slide rotation.
//!
//! `Slider` owns the active index and the in-progress swipe, and turns input
//! events into a [`SliderTransition`]: whether the active slide changed and
//! what the caller must do with the auto-advance timer. Rendering and timer
//! handles stay with the caller.

use crate::config::SliderConfig;
use crate::swipe::{self, SwipeDirection, SwipeState};

/// Which slide and which indicator dot carry the active marker.
///
/// Dots are optional in markup and may be fewer than slides, so the dot
/// index is only present when that dot exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveMarkers {
    pub slide: usize,
    pub dot: Option<usize>,
}

impl ActiveMarkers {
    /// Whether the element at `index` in a list of slides should be active.
    #[must_use]
    pub const fn slide_is_active(&self, index: usize) -> bool {
        self.slide == index
    }

    #[must_use]
    pub fn dot_is_active(&self, index: usize) -> bool {
        self.dot == Some(index)
    }
}

/// What the caller must do with the auto-advance timer after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    /// Leave the timer as it is.
    Keep,
    /// Cancel the timer without re-arming.
    Stop,
    /// Cancel the timer, then arm a fresh one.
    Restart,
}

/// Input to the slider state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderEvent {
    /// Auto-advance timer fired.
    Tick,
    /// Indicator dot at this index was clicked.
    DotClicked(usize),
    /// Pointer pressed on the slider at this x coordinate.
    DragStarted(f64),
    /// Pointer moved to this x coordinate.
    DragMoved(f64),
    /// Pointer released (mouseup, touchend).
    DragReleased,
}

/// Outcome of handling one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderTransition {
    /// Active markers need re-rendering.
    pub changed: bool,
    pub timer: TimerCommand,
}

impl SliderTransition {
    const fn new(changed: bool, timer: TimerCommand) -> Self {
        Self { changed, timer }
    }
}

/// Active-slide state for one banner slider instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    slide_count: usize,
    dot_count: usize,
    current: usize,
    swipe: SwipeState,
    swipe_threshold: f64,
}

impl Slider {
    /// Create a slider showing slide 0.
    ///
    /// Returns `None` when there are no slides; the component is then not
    /// initialized at all.
    #[must_use]
    pub fn new(slide_count: usize, dot_count: usize, config: &SliderConfig) -> Option<Self> {
        if slide_count == 0 {
            return None;
        }
        Some(Self {
            slide_count,
            dot_count,
            current: 0,
            swipe: SwipeState::Idle,
            swipe_threshold: config.swipe_threshold_px,
        })
    }

    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub const fn slide_count(&self) -> usize {
        self.slide_count
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.swipe, SwipeState::Dragging { .. })
    }

    #[must_use]
    pub fn markers(&self) -> ActiveMarkers {
        ActiveMarkers {
            slide: self.current,
            dot: (self.current < self.dot_count).then_some(self.current),
        }
    }

    /// Make `index` the active slide.
    ///
    /// An out-of-range index is ignored and reported as no change.
    pub fn show(&mut self, index: usize) -> bool {
        if index >= self.slide_count {
            tracing::debug!(index, count = self.slide_count, "ignoring out-of-range slide");
            return false;
        }
        self.current = index;
        true
    }

    /// Advance to the next slide, wrapping to the first after the last.
    pub fn next(&mut self) {
        self.current = wrap_next(self.current, self.slide_count);
    }

    /// Step back to the previous slide, wrapping to the last before the first.
    pub fn prev(&mut self) {
        self.current = wrap_prev(self.current, self.slide_count);
    }

    /// Apply one input event.
    pub fn handle(&mut self, event: SliderEvent) -> SliderTransition {
        match event {
            SliderEvent::Tick => {
                self.next();
                SliderTransition::new(true, TimerCommand::Keep)
            }
            SliderEvent::DotClicked(index) => {
                let changed = self.show(index);
                SliderTransition::new(changed, TimerCommand::Restart)
            }
            SliderEvent::DragStarted(x) => {
                self.swipe = swipe::start_swipe(self.swipe, x);
                SliderTransition::new(false, TimerCommand::Stop)
            }
            SliderEvent::DragMoved(x) => {
                self.swipe = swipe::update_swipe(self.swipe, x);
                SliderTransition::new(false, TimerCommand::Keep)
            }
            SliderEvent::DragReleased => {
                if !self.is_dragging() {
                    return SliderTransition::new(false, TimerCommand::Keep);
                }
                let (idle, direction) = swipe::end_swipe(self.swipe, self.swipe_threshold);
                self.swipe = idle;
                match direction {
                    Some(SwipeDirection::Previous) => self.prev(),
                    Some(SwipeDirection::Next) => self.next(),
                    None => {}
                }
                tracing::debug!(?direction, current = self.current, "swipe released");
                SliderTransition::new(direction.is_some(), TimerCommand::Restart)
            }
        }
    }
}

const fn wrap_next(current: usize, count: usize) -> usize {
    match current.checked_add(1) {
        Some(next) if next < count => next,
        _ => 0,
    }
}

const fn wrap_prev(current: usize, count: usize) -> usize {
    match current.checked_sub(1) {
        Some(prev) => prev,
        None => count.saturating_sub(1),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use super::*;

    fn slider(slides: usize, dots: usize) -> Slider {
        Slider::new(slides, dots, &SliderConfig::default()).expect("non-empty slider")
    }

    #[test]
    fn test_empty_slider_not_created() {
        assert!(Slider::new(0, 0, &SliderConfig::default()).is_none());
    }

    #[test]
    fn test_starts_at_first_slide() {
        let s = slider(3, 3);
        assert_eq!(s.current(), 0);
        assert_eq!(s.markers(), ActiveMarkers { slide: 0, dot: Some(0) });
    }

    #[test]
    fn test_out_of_range_show_is_ignored() {
        let mut s = slider(3, 3);
        s.show(1);
        assert!(!s.show(3));
        assert_eq!(s.current(), 1);
    }

    #[test]
    fn test_missing_dot_has_no_marker() {
        let mut s = slider(4, 2);
        s.show(3);
        assert_eq!(s.markers(), ActiveMarkers { slide: 3, dot: None });
    }

    #[test]
    fn test_wrapping() {
        let mut s = slider(3, 3);
        s.prev();
        assert_eq!(s.current(), 2);
        s.next();
        assert_eq!(s.current(), 0);
    }

    #[test]
    fn test_single_slide_wraps_to_itself() {
        let mut s = slider(1, 1);
        s.next();
        assert_eq!(s.current(), 0);
        s.prev();
        assert_eq!(s.current(), 0);
    }

    #[test]
    fn test_tick_keeps_timer() {
        let mut s = slider(3, 3);
        let t = s.handle(SliderEvent::Tick);
        assert_eq!(t, SliderTransition::new(true, TimerCommand::Keep));
        assert_eq!(s.current(), 1);
    }

    #[test]
    fn test_dot_click_restarts_timer() {
        let mut s = slider(3, 3);
        let t = s.handle(SliderEvent::DotClicked(2));
        assert!(t.changed);
        assert_eq!(t.timer, TimerCommand::Restart);
        assert_eq!(s.current(), 2);
    }

    #[test]
    fn test_drag_start_stops_timer_and_release_restarts() {
        let mut s = slider(3, 3);
        let t = s.handle(SliderEvent::DragStarted(200.0));
        assert_eq!(t.timer, TimerCommand::Stop);
        assert!(s.is_dragging());

        s.handle(SliderEvent::DragMoved(210.0));
        let t = s.handle(SliderEvent::DragReleased);
        assert_eq!(t, SliderTransition::new(false, TimerCommand::Restart));
        assert!(!s.is_dragging());
    }

    #[test]
    fn test_stray_release_is_noop() {
        let mut s = slider(3, 3);
        let t = s.handle(SliderEvent::DragReleased);
        assert_eq!(t, SliderTransition::new(false, TimerCommand::Keep));
    }
}
