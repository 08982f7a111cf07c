//! DOM-free state machines for the AESTECH storefront.
//!
//! Every interactive component on the storefront pages is split into a pure
//! transition layer (this crate) and a thin rendering layer in
//! `aestech-web`. Nothing here touches the DOM, timers or the clock, so all
//! behavior is testable natively.
//!
//! ## Module Structure
//! - `slider`: banner slide rotation and swipe handling
//! - `swipe`: horizontal swipe gesture tracking
//! - `timer`: single-handle timer slot for auto-advance and delayed swaps
//! - `momentum`: drag-to-scroll with exponential-decay coasting
//! - `catalog`, `pagination`: category filter and page window math
//! - `showcase`: home page category carousel content
//! - `testimonial`: testimonial track navigation and progress geometry
//! - `config`, `error`, `result`: configuration and error handling

#![forbid(unsafe_code)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod momentum;
pub mod pagination;
pub mod result;
pub mod showcase;
pub mod slider;
pub mod swipe;
pub mod testimonial;
pub mod timer;

pub use config::StorefrontConfig;
pub use error::Error;
pub use result::{Result, ResultExt};
