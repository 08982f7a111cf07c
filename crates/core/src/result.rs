//! Result alias and fallback combinators.
//!
//! Storefront components degrade instead of failing, so most callers want the
//! value or a logged fallback rather than a propagated error.

use crate::error::Error;

/// The standard Result type for storefront operations.
///
/// # Examples
///
/// ```
/// use aestech_core::{Result, StorefrontConfig};
///
/// fn page_size(raw: &str) -> Result<usize> {
///     let config = StorefrontConfig::from_json(raw)?;
///     Ok(config.catalog.page_size)
/// }
///
/// assert_eq!(page_size(r#"{"catalog": {"page_size": 12}}"#), Ok(12));
/// assert!(page_size("not json").is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Fallbacks for config results that should degrade to defaults.
pub trait ResultExt<T> {
    /// Take the value, or `default` after logging why it was rejected.
    fn or_default_logged(self, default: T) -> T;

    /// Call `f` with the error, if any, and pass the result through.
    fn inspect_error<F: FnOnce(&Error)>(self, f: F) -> Self;
}

impl<T> ResultExt<T> for Result<T> {
    fn or_default_logged(self, default: T) -> T {
        self.unwrap_or_else(|e| {
            tracing::warn!(field = e.field(), "falling back to defaults: {e}");
            default
        })
    }

    fn inspect_error<F: FnOnce(&Error)>(self, f: F) -> Self {
        if let Err(ref e) = self {
            f(e);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StorefrontConfig;

    #[test]
    fn test_rejected_config_falls_back_to_default() {
        let rejected = StorefrontConfig::from_json(r#"{"catalog": {"page_size": 0}}"#);
        let config = rejected.or_default_logged(StorefrontConfig::default());
        assert_eq!(config, StorefrontConfig::default());
    }

    #[test]
    fn test_accepted_config_kept() {
        let accepted = StorefrontConfig::from_json(r#"{"catalog": {"page_size": 12}}"#);
        let config = accepted.or_default_logged(StorefrontConfig::default());
        assert_eq!(config.catalog.page_size, 12);
    }

    #[test]
    fn test_inspect_error_sees_error_once() {
        let mut fields = Vec::new();
        let back = StorefrontConfig::from_json(r#"{"catalog": {"page_size": 0}}"#)
            .inspect_error(|e| fields.push(e.field()));
        assert!(back.is_err());
        assert_eq!(fields, vec![Some("catalog.page_size")]);
    }

    #[test]
    fn test_inspect_error_skips_ok() {
        let mut seen = 0;
        let back = StorefrontConfig::from_json("{}").inspect_error(|_| seen += 1);
        assert!(back.is_ok());
        assert_eq!(seen, 0);
    }
}
