//! Error types for the storefront DOM layer
//!
//! A missing DOM hook is not an error: component initializers return
//! `Ok(None)` for it. These variants cover genuine JS interop failures.

use wasm_bindgen::JsValue;

/// Errors that can occur while wiring components to the page
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WebError {
    /// Not running in a browser window
    #[error("failed to get window: window is not available")]
    WindowNotAvailable,

    /// Window has no document
    #[error("failed to get document: document is not available")]
    DocumentNotAvailable,

    /// Selector query rejected by the browser
    #[error("invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// Event listener registration failed
    #[error("failed to add '{event}' listener: {reason}")]
    ListenerFailed { event: String, reason: String },

    /// requestAnimationFrame failed
    #[error("failed to request animation frame: {0}")]
    FrameRequestFailed(String),

    /// Style or class mutation failed
    #[error("failed to update element: {0}")]
    DomUpdateFailed(String),
}

impl WebError {
    pub fn listener_failed(event: &str, err: &JsValue) -> Self {
        Self::ListenerFailed {
            event: event.to_string(),
            reason: format!("{err:?}"),
        }
    }

    pub fn dom_update_failed(err: &JsValue) -> Self {
        Self::DomUpdateFailed(format!("{err:?}"))
    }
}

/// Result type alias for DOM operations
pub type Result<T> = std::result::Result<T, WebError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = WebError::InvalidSelector {
            selector: "..".to_string(),
            reason: "SyntaxError".to_string(),
        };
        assert_eq!(error.to_string(), "invalid selector '..': SyntaxError");

        let error = WebError::ListenerFailed {
            event: "mousedown".to_string(),
            reason: "detached".to_string(),
        };
        assert_eq!(error.to_string(), "failed to add 'mousedown' listener: detached");
    }

    #[test]
    fn test_error_clone() {
        let error = WebError::FrameRequestFailed("denied".to_string());
        assert_eq!(error.clone(), error);
    }
}
