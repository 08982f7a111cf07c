//! Page-level configuration override
//!
//! `<body data-storefront-config='{"catalog": {"page_size": 12}}'>` overrides
//! any subset of the defaults. A missing attribute means defaults; a bad one
//! is reported to the console and ignored.

use aestech_core::{ResultExt, StorefrontConfig};
use web_sys::Document;

/// Attribute on `<body>` holding the JSON override.
pub const CONFIG_ATTRIBUTE: &str = "data-storefront-config";

/// Read the override from the page, falling back to defaults.
#[must_use]
pub fn load(document: &Document) -> StorefrontConfig {
    let raw = document
        .body()
        .and_then(|body| body.get_attribute(CONFIG_ATTRIBUTE));
    from_attribute(raw.as_deref())
}

/// Resolve an attribute value into a config.
#[must_use]
pub fn from_attribute(raw: Option<&str>) -> StorefrontConfig {
    match raw.map(str::trim) {
        None | Some("") => StorefrontConfig::default(),
        Some(raw) => StorefrontConfig::from_json(raw)
            .inspect_error(report_invalid)
            .or_default_logged(StorefrontConfig::default()),
    }
}

#[cfg(target_arch = "wasm32")]
fn report_invalid(err: &aestech_core::Error) {
    web_sys::console::warn_1(&format!("ignoring {CONFIG_ATTRIBUTE}: {err}").into());
}

#[cfg(not(target_arch = "wasm32"))]
fn report_invalid(_err: &aestech_core::Error) {}
