//! Storefront configuration.
//!
//! Every field has a default matching the shipped page behavior, so an empty
//! JSON object (or no override at all) yields a working configuration.
//! Overrides are partial: only the keys present are replaced.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::result::Result;

/// Top-level configuration for all storefront components.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorefrontConfig {
    pub slider: SliderConfig,
    pub momentum: MomentumConfig,
    pub catalog: CatalogConfig,
    pub showcase: ShowcaseConfig,
    pub testimonial: TestimonialConfig,
}

/// Banner slider timing and gesture settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SliderConfig {
    /// Auto-advance period in milliseconds.
    pub interval_ms: u32,
    /// Horizontal distance a swipe must exceed to change slides.
    pub swipe_threshold_px: f64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            interval_ms: 5_000,
            swipe_threshold_px: 50.0,
        }
    }
}

/// Inertial scrolling settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MomentumConfig {
    /// Per-frame velocity multiplier, in (0, 1).
    pub decay: f64,
    /// Coasting stops once |velocity| drops below this.
    pub stop_velocity: f64,
}

impl Default for MomentumConfig {
    fn default() -> Self {
        Self {
            decay: 0.95,
            stop_velocity: 0.5,
        }
    }
}

/// Product catalog pagination settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    pub page_size: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { page_size: 9 }
    }
}

/// Home page showcase carousel settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShowcaseConfig {
    /// Delay between fade-out and content swap.
    pub fade_ms: u32,
    /// Category shown on load and used for unknown keys.
    pub default_category: String,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            fade_ms: 300,
            default_category: "skin".to_string(),
        }
    }
}

/// Testimonial track geometry settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TestimonialConfig {
    /// Gap between cards, matching the stylesheet spacing.
    pub card_gap_px: f64,
    /// How close to an end the track must be to wrap around.
    pub edge_tolerance_px: f64,
}

impl Default for TestimonialConfig {
    fn default() -> Self {
        Self {
            card_gap_px: 32.0,
            edge_tolerance_px: 10.0,
        }
    }
}

impl StorefrontConfig {
    /// Parse and validate a JSON override.
    ///
    /// # Errors
    ///
    /// Returns [`Error::JsonParseFailed`] for malformed JSON or unknown keys,
    /// and [`Error::InvalidConfig`] when a value is out of range.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()
    }

    /// Check value ranges, returning the config unchanged when valid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] naming the first offending field.
    pub fn validate(self) -> Result<Self> {
        if self.slider.interval_ms == 0 {
            return Err(Error::invalid_config(
                "slider.interval_ms",
                "must be greater than zero",
            ));
        }
        if !is_positive(self.slider.swipe_threshold_px) {
            return Err(Error::invalid_config(
                "slider.swipe_threshold_px",
                format!("must be a positive number, got {}", self.slider.swipe_threshold_px),
            ));
        }
        if !(self.momentum.decay > 0.0 && self.momentum.decay < 1.0) {
            return Err(Error::invalid_config(
                "momentum.decay",
                format!("must be in (0, 1), got {}", self.momentum.decay),
            ));
        }
        if !is_positive(self.momentum.stop_velocity) {
            return Err(Error::invalid_config(
                "momentum.stop_velocity",
                format!("must be a positive number, got {}", self.momentum.stop_velocity),
            ));
        }
        if self.catalog.page_size == 0 {
            return Err(Error::invalid_config(
                "catalog.page_size",
                "must be at least 1",
            ));
        }
        if self.showcase.default_category.trim().is_empty() {
            return Err(Error::invalid_config(
                "showcase.default_category",
                "must not be empty",
            ));
        }
        if !self.testimonial.card_gap_px.is_finite() || self.testimonial.card_gap_px < 0.0 {
            return Err(Error::invalid_config(
                "testimonial.card_gap_px",
                format!("must be a non-negative number, got {}", self.testimonial.card_gap_px),
            ));
        }
        if !self.testimonial.edge_tolerance_px.is_finite()
            || self.testimonial.edge_tolerance_px < 0.0
        {
            return Err(Error::invalid_config(
                "testimonial.edge_tolerance_px",
                format!(
                    "must be a non-negative number, got {}",
                    self.testimonial.edge_tolerance_px
                ),
            ));
        }

        tracing::debug!(?self, "storefront config validated");
        Ok(self)
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn test_defaults_match_page_behavior() {
        let config = StorefrontConfig::default();
        assert_eq!(config.slider.interval_ms, 5_000);
        assert!((config.slider.swipe_threshold_px - 50.0).abs() < f64::EPSILON);
        assert!((config.momentum.decay - 0.95).abs() < f64::EPSILON);
        assert!((config.momentum.stop_velocity - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.catalog.page_size, 9);
        assert_eq!(config.showcase.fade_ms, 300);
        assert_eq!(config.showcase.default_category, "skin");
        assert!((config.testimonial.card_gap_px - 32.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_object_is_default() {
        let config = StorefrontConfig::from_json("{}").unwrap();
        assert_eq!(config, StorefrontConfig::default());
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config =
            StorefrontConfig::from_json(r#"{"catalog": {"page_size": 12}, "slider": {"interval_ms": 8000}}"#)
                .unwrap();
        assert_eq!(config.catalog.page_size, 12);
        assert_eq!(config.slider.interval_ms, 8_000);
        assert!((config.slider.swipe_threshold_px - 50.0).abs() < f64::EPSILON);
        assert_eq!(config.momentum, MomentumConfig::default());
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = StorefrontConfig::from_json(r#"{"catalog": {"page_size": 0}}"#).unwrap_err();
        assert_eq!(err.field(), Some("catalog.page_size"));
    }

    #[test]
    fn test_decay_out_of_range_rejected() {
        for decay in ["0.0", "1.0", "1.5", "-0.2"] {
            let raw = format!(r#"{{"momentum": {{"decay": {decay}}}}}"#);
            let err = StorefrontConfig::from_json(&raw).unwrap_err();
            assert_eq!(err.field(), Some("momentum.decay"), "decay {decay}");
        }
    }

    #[test]
    fn test_non_positive_stop_velocity_rejected() {
        let err =
            StorefrontConfig::from_json(r#"{"momentum": {"stop_velocity": 0}}"#).unwrap_err();
        assert_eq!(err.field(), Some("momentum.stop_velocity"));
    }

    #[test]
    fn test_non_positive_threshold_rejected() {
        let err = StorefrontConfig::from_json(r#"{"slider": {"swipe_threshold_px": -5}}"#)
            .unwrap_err();
        assert_eq!(err.field(), Some("slider.swipe_threshold_px"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = StorefrontConfig::from_json(r#"{"carousel": {}}"#).unwrap_err();
        assert!(matches!(err, Error::JsonParseFailed { .. }));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = StorefrontConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, Error::JsonParseFailed { .. }));
    }
}
