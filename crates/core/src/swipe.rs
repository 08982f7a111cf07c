//! Horizontal swipe gesture tracking for the banner slider.
//!
//! Pointer positions are fed in as they arrive (mouse or touch); on release
//! the net horizontal displacement decides whether the gesture selects the
//! previous slide, the next slide, or nothing.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

/// Gesture state between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SwipeState {
    #[default]
    Idle,
    Dragging { start_x: f64, current_x: f64 },
}

/// Slide change selected by a completed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Pointer moved right: reveal the slide before the current one.
    Previous,
    /// Pointer moved left: reveal the slide after the current one.
    Next,
}

#[must_use]
pub const fn start_swipe(_state: SwipeState, x: f64) -> SwipeState {
    SwipeState::Dragging {
        start_x: x,
        current_x: x,
    }
}

/// Record the latest pointer position. Ignored when no gesture is active.
#[must_use]
pub const fn update_swipe(state: SwipeState, x: f64) -> SwipeState {
    match state {
        SwipeState::Idle => SwipeState::Idle,
        SwipeState::Dragging { start_x, .. } => SwipeState::Dragging {
            start_x,
            current_x: x,
        },
    }
}

#[must_use]
pub fn swipe_delta(state: SwipeState) -> Option<f64> {
    match state {
        SwipeState::Idle => None,
        SwipeState::Dragging { start_x, current_x } => Some(current_x - start_x),
    }
}

/// Map a horizontal displacement to a slide change.
///
/// The displacement must strictly exceed `threshold` in either direction;
/// anything within `[-threshold, threshold]` selects nothing.
#[must_use]
pub fn resolve_swipe(delta: f64, threshold: f64) -> Option<SwipeDirection> {
    if delta > threshold {
        Some(SwipeDirection::Previous)
    } else if delta < -threshold {
        Some(SwipeDirection::Next)
    } else {
        None
    }
}

/// Finish the gesture, returning the idle state and the selected direction.
///
/// Releasing while idle yields no direction.
#[must_use]
pub fn end_swipe(state: SwipeState, threshold: f64) -> (SwipeState, Option<SwipeDirection>) {
    let direction = swipe_delta(state).and_then(|delta| resolve_swipe(delta, threshold));
    (SwipeState::Idle, direction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swipe_state_default() {
        assert!(matches!(SwipeState::default(), SwipeState::Idle));
    }

    #[test]
    fn test_update_while_idle_stays_idle() {
        assert_eq!(update_swipe(SwipeState::Idle, 40.0), SwipeState::Idle);
    }

    #[test]
    fn test_delta_tracks_latest_position() {
        let state = start_swipe(SwipeState::Idle, 100.0);
        let state = update_swipe(state, 130.0);
        let state = update_swipe(state, 90.0);
        let delta = swipe_delta(state);
        assert!(delta.is_some_and(|d| (d + 10.0).abs() < 1e-10));
    }

    #[test]
    fn test_threshold_is_strict() {
        assert_eq!(resolve_swipe(50.0, 50.0), None);
        assert_eq!(resolve_swipe(-50.0, 50.0), None);
        assert_eq!(resolve_swipe(50.5, 50.0), Some(SwipeDirection::Previous));
        assert_eq!(resolve_swipe(-50.5, 50.0), Some(SwipeDirection::Next));
    }

    #[test]
    fn test_press_and_release_without_move_selects_nothing() {
        let state = start_swipe(SwipeState::Idle, 300.0);
        let (state, direction) = end_swipe(state, 50.0);
        assert_eq!(state, SwipeState::Idle);
        assert_eq!(direction, None);
    }

    #[test]
    fn test_release_while_idle_selects_nothing() {
        assert_eq!(end_swipe(SwipeState::Idle, 50.0), (SwipeState::Idle, None));
    }
}
