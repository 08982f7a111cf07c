//! Testimonial track geometry: arrow navigation, progress bar, active card.
//!
//! All functions take a [`TrackGeometry`] snapshot measured from the DOM and
//! return where to scroll or what to draw.

use crate::config::TestimonialConfig;

/// Scroll metrics of the track at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    pub scroll_left: f64,
    pub scroll_width: f64,
    pub client_width: f64,
    /// Width of the first card; cards are uniform.
    pub card_width: f64,
}

impl TrackGeometry {
    /// Furthest the track can scroll. Never negative.
    #[must_use]
    pub fn max_scroll(&self) -> f64 {
        (self.scroll_width - self.client_width).max(0.0)
    }
}

/// Scroll instruction for an arrow click.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackScroll {
    /// Smooth-scroll to this absolute offset.
    To(f64),
    /// Smooth-scroll by this relative amount.
    By(f64),
}

/// Advance one card, wrapping to the start when already at the end.
#[must_use]
pub fn next(geometry: &TrackGeometry, config: &TestimonialConfig) -> TrackScroll {
    if geometry.scroll_left >= geometry.max_scroll() - config.edge_tolerance_px {
        TrackScroll::To(0.0)
    } else {
        TrackScroll::By(geometry.card_width + config.card_gap_px)
    }
}

/// Go back one card, wrapping to the end when already at the start.
#[must_use]
pub fn prev(geometry: &TrackGeometry, config: &TestimonialConfig) -> TrackScroll {
    if geometry.scroll_left <= config.edge_tolerance_px {
        TrackScroll::To(geometry.max_scroll())
    } else {
        TrackScroll::By(-(geometry.card_width + config.card_gap_px))
    }
}

/// Progress bar placement, both in percent of the bar's container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub width_pct: f64,
    pub left_pct: f64,
}

/// Size the bar to one card's share and slide it across the remaining room.
///
/// Returns `None` with no cards.
#[must_use]
pub fn progress(geometry: &TrackGeometry, card_count: usize) -> Option<Progress> {
    if card_count == 0 {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let width_pct = 100.0 / card_count as f64;
    let max_translate = 100.0 - width_pct;
    let max_scroll = geometry.max_scroll();
    let fraction = if max_scroll > 0.0 {
        geometry.scroll_left / max_scroll
    } else {
        0.0
    };
    Some(Progress {
        width_pct,
        left_pct: (fraction * max_translate).clamp(0.0, max_translate),
    })
}

/// Pick the active card from each card's left edge relative to the track's
/// left edge and its width.
///
/// A card is a candidate when its left edge sits within half its width of
/// the track's left edge; the last candidate wins. Returns `None` when no
/// card qualifies, in which case the previous marker is kept.
#[must_use]
pub fn active_card<I>(cards: I) -> Option<usize>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    cards
        .into_iter()
        .enumerate()
        .filter(|(_, (relative_left, width))| relative_left.abs() < width / 2.0)
        .map(|(index, _)| index)
        .last()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn geometry(scroll_left: f64) -> TrackGeometry {
        TrackGeometry {
            scroll_left,
            scroll_width: 2000.0,
            client_width: 800.0,
            card_width: 368.0,
        }
    }

    #[test]
    fn test_next_scrolls_one_card_and_gap() {
        let config = TestimonialConfig::default();
        assert_eq!(next(&geometry(0.0), &config), TrackScroll::By(400.0));
    }

    #[test]
    fn test_next_wraps_near_end() {
        let config = TestimonialConfig::default();
        assert_eq!(next(&geometry(1195.0), &config), TrackScroll::To(0.0));
        assert_eq!(next(&geometry(1200.0), &config), TrackScroll::To(0.0));
    }

    #[test]
    fn test_prev_wraps_near_start() {
        let config = TestimonialConfig::default();
        assert_eq!(prev(&geometry(10.0), &config), TrackScroll::To(1200.0));
        assert_eq!(prev(&geometry(500.0), &config), TrackScroll::By(-400.0));
    }

    #[test]
    fn test_progress_spans_remaining_room() {
        let start = progress(&geometry(0.0), 4).unwrap();
        assert!((start.width_pct - 25.0).abs() < 1e-10);
        assert!(start.left_pct.abs() < 1e-10);

        let end = progress(&geometry(1200.0), 4).unwrap();
        assert!((end.left_pct - 75.0).abs() < 1e-10);
    }

    #[test]
    fn test_progress_without_overflow_stays_left() {
        let g = TrackGeometry {
            scroll_left: 0.0,
            scroll_width: 800.0,
            client_width: 800.0,
            card_width: 368.0,
        };
        let p = progress(&g, 2).unwrap();
        assert!(p.left_pct.abs() < 1e-10);
        assert!(progress(&g, 0).is_none());
    }

    #[test]
    fn test_active_card() {
        let cards = [(-400.0, 368.0), (10.0, 368.0), (410.0, 368.0)];
        assert_eq!(active_card(cards), Some(1));
        assert_eq!(active_card([(300.0, 368.0)]), None);
    }
}
