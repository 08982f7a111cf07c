//! Drag-to-scroll with post-release momentum.
//!
//! While the pointer is held the scroll offset follows the pointer 1:1.
//! On release the last per-move pointer delta seeds an exponential decay:
//! every frame the offset moves by the velocity and the velocity is
//! multiplied by the decay factor, until it falls below the stop velocity.
//!
//! # Example
//!
//! ```
//! use aestech_core::config::MomentumConfig;
//! use aestech_core::momentum::Momentum;
//!
//! let mut momentum = Momentum::new(&MomentumConfig::default());
//! momentum.press(500.0, 0.0);
//! let scroll = momentum.drag(480.0);
//! assert_eq!(scroll, Some(20.0));
//!
//! assert!(momentum.release());
//! let mut scroll = 20.0;
//! while let Some(next) = momentum.step(scroll) {
//!     scroll = next;
//! }
//! assert!(!momentum.is_coasting());
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use crate::config::MomentumConfig;

/// Pointer bookkeeping between press and release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub start_pointer: f64,
    pub start_scroll: f64,
    pub last_pointer: f64,
    /// Pointer delta of the most recent move event.
    pub velocity: f64,
}

impl DragSession {
    #[must_use]
    pub const fn new(pointer: f64, scroll: f64) -> Self {
        Self {
            start_pointer: pointer,
            start_scroll: scroll,
            last_pointer: pointer,
            velocity: 0.0,
        }
    }

    /// Scroll offset for the given pointer position.
    #[must_use]
    pub fn scroll_for(&self, pointer: f64) -> f64 {
        self.start_scroll - (pointer - self.start_pointer)
    }
}

/// Phase of one drag-scroll container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MomentumPhase {
    #[default]
    Idle,
    Held(DragSession),
    Coasting { velocity: f64 },
}

/// Drag and momentum state for a single scroll container.
#[derive(Debug, Clone, PartialEq)]
pub struct Momentum {
    phase: MomentumPhase,
    decay: f64,
    stop_velocity: f64,
}

impl Momentum {
    #[must_use]
    pub const fn new(config: &MomentumConfig) -> Self {
        Self {
            phase: MomentumPhase::Idle,
            decay: config.decay,
            stop_velocity: config.stop_velocity,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> MomentumPhase {
        self.phase
    }

    #[must_use]
    pub const fn is_held(&self) -> bool {
        matches!(self.phase, MomentumPhase::Held(_))
    }

    #[must_use]
    pub const fn is_coasting(&self) -> bool {
        matches!(self.phase, MomentumPhase::Coasting { .. })
    }

    /// Begin a drag at `pointer` with the container at `scroll`.
    ///
    /// Any in-flight coasting is cancelled; returns whether that happened so
    /// the caller can drop its frame request.
    pub fn press(&mut self, pointer: f64, scroll: f64) -> bool {
        let was_coasting = self.is_coasting();
        self.phase = MomentumPhase::Held(DragSession::new(pointer, scroll));
        was_coasting
    }

    /// Track a pointer move, returning the scroll offset to apply.
    ///
    /// Returns `None` when no drag is held.
    pub fn drag(&mut self, pointer: f64) -> Option<f64> {
        match &mut self.phase {
            MomentumPhase::Held(session) => {
                session.velocity = pointer - session.last_pointer;
                session.last_pointer = pointer;
                Some(session.scroll_for(pointer))
            }
            MomentumPhase::Idle | MomentumPhase::Coasting { .. } => None,
        }
    }

    /// Release the pointer. Returns `true` when coasting begins and frames
    /// should be scheduled.
    ///
    /// A release without a held drag is ignored.
    pub fn release(&mut self) -> bool {
        let MomentumPhase::Held(session) = self.phase else {
            return false;
        };
        self.phase = if self.is_moving(session.velocity) {
            MomentumPhase::Coasting {
                velocity: session.velocity,
            }
        } else {
            MomentumPhase::Idle
        };
        tracing::trace!(velocity = session.velocity, coasting = self.is_coasting(), "drag released");
        self.is_coasting()
    }

    /// Advance coasting by one frame from `scroll`, returning the new offset.
    ///
    /// Returns `None` (and goes idle) once the velocity has decayed below the
    /// stop velocity, or when not coasting.
    pub fn step(&mut self, scroll: f64) -> Option<f64> {
        let MomentumPhase::Coasting { velocity } = self.phase else {
            return None;
        };
        if !self.is_moving(velocity) {
            self.phase = MomentumPhase::Idle;
            return None;
        }
        self.phase = MomentumPhase::Coasting {
            velocity: velocity * self.decay,
        };
        Some(scroll - velocity)
    }

    /// Cancel coasting without starting a drag.
    pub fn stop(&mut self) {
        if self.is_coasting() {
            self.phase = MomentumPhase::Idle;
        }
    }

    fn is_moving(&self, velocity: f64) -> bool {
        velocity.is_finite() && velocity.abs() >= self.stop_velocity
    }
}

/// Number of frames a release at `velocity` coasts for.
///
/// Always finite: the decay factor is below one and non-finite velocities
/// coast for zero frames.
#[must_use]
pub fn coast_frames(velocity: f64, config: &MomentumConfig) -> usize {
    let mut momentum = Momentum::new(config);
    momentum.phase = MomentumPhase::Held(DragSession {
        velocity,
        ..DragSession::new(0.0, 0.0)
    });
    if !momentum.release() {
        return 0;
    }
    let mut frames = 0_usize;
    let mut scroll = 0.0;
    while let Some(next) = momentum.step(scroll) {
        scroll = next;
        frames = frames.saturating_add(1);
    }
    frames
}
