//! DOM lookup, mutation and listener helpers
//!
//! Thin, panic-free wrappers over `web-sys`. Lookups return `Option`/`Vec`
//! so a missing hook simply disables the component that needed it.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, MouseEvent,
    TouchEvent, Window,
};

use crate::error::{Result, WebError};

/// Get window object
///
/// # Errors
///
/// Returns [`WebError::WindowNotAvailable`] outside a browser.
pub fn window() -> Result<Window> {
    web_sys::window().ok_or(WebError::WindowNotAvailable)
}

/// Get document from window
///
/// # Errors
///
/// Returns an error if there is no window or it has no document.
pub fn document() -> Result<Document> {
    window()?.document().ok_or(WebError::DocumentNotAvailable)
}

/// First element matching `selector`, if any.
///
/// # Errors
///
/// Returns [`WebError::InvalidSelector`] if the browser rejects the selector.
pub fn query(document: &Document, selector: &str) -> Result<Option<HtmlElement>> {
    document
        .query_selector(selector)
        .map_err(|e| invalid_selector(selector, &e))
        .map(|found| found.and_then(|el| el.dyn_into::<HtmlElement>().ok()))
}

/// All elements matching `selector`, in document order.
///
/// # Errors
///
/// Returns [`WebError::InvalidSelector`] if the browser rejects the selector.
pub fn query_all(root: &impl QueryRoot, selector: &str) -> Result<Vec<HtmlElement>> {
    let list = root
        .select_all(selector)
        .map_err(|e| invalid_selector(selector, &e))?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

/// Element with the given id, if present.
#[must_use]
pub fn by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Something `querySelectorAll` can be called on.
pub trait QueryRoot {
    /// Run `querySelectorAll` on this root.
    ///
    /// # Errors
    ///
    /// Returns the browser's exception for an invalid selector.
    fn select_all(&self, selector: &str) -> std::result::Result<web_sys::NodeList, wasm_bindgen::JsValue>;
}

impl QueryRoot for Document {
    fn select_all(&self, selector: &str) -> std::result::Result<web_sys::NodeList, wasm_bindgen::JsValue> {
        self.query_selector_all(selector)
    }
}

impl QueryRoot for Element {
    fn select_all(&self, selector: &str) -> std::result::Result<web_sys::NodeList, wasm_bindgen::JsValue> {
        self.query_selector_all(selector)
    }
}

impl QueryRoot for HtmlElement {
    fn select_all(&self, selector: &str) -> std::result::Result<web_sys::NodeList, wasm_bindgen::JsValue> {
        self.query_selector_all(selector)
    }
}

fn invalid_selector(selector: &str, err: &wasm_bindgen::JsValue) -> WebError {
    WebError::InvalidSelector {
        selector: selector.to_string(),
        reason: format!("{err:?}"),
    }
}

/// Add or remove `class` on `element`.
///
/// # Errors
///
/// Returns an error if the class list rejects the token.
pub fn set_class(element: &Element, class: &str, on: bool) -> Result<()> {
    let classes = element.class_list();
    let updated = if on {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
    updated.map_err(|e| WebError::dom_update_failed(&e))
}

/// Set an inline style property.
///
/// # Errors
///
/// Returns an error if the style declaration rejects the property.
pub fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<()> {
    element
        .style()
        .set_property(property, value)
        .map_err(|e| WebError::dom_update_failed(&e))
}

/// Set several inline style properties, stopping at the first failure.
///
/// # Errors
///
/// Returns the first property that failed to apply.
pub fn set_styles(element: &HtmlElement, properties: &[(&str, &str)]) -> Result<()> {
    properties
        .iter()
        .try_for_each(|(property, value)| set_style(element, property, value))
}

/// Listener registration flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Listen {
    #[default]
    Active,
    /// Never calls `preventDefault`; lets touch scrolling stay on the fast path.
    Passive,
}

/// Attach `handler` for `event` on `target` for the lifetime of the page.
///
/// # Errors
///
/// Returns [`WebError::ListenerFailed`] if registration is rejected.
pub fn listen<E, F>(target: &EventTarget, event: &str, mode: Listen, handler: F) -> Result<()>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let mut handler = handler;
    let closure = Closure::wrap(Box::new(move |raw: Event| {
        if let Ok(typed) = raw.dyn_into::<E>() {
            handler(typed);
        }
    }) as Box<dyn FnMut(Event)>);

    let callback = closure.as_ref().unchecked_ref();
    let registered = match mode {
        Listen::Active => target.add_event_listener_with_callback(event, callback),
        Listen::Passive => {
            let options = AddEventListenerOptions::new();
            options.set_passive(true);
            target.add_event_listener_with_callback_and_add_event_listener_options(
                event, callback, &options,
            )
        }
    };
    registered.map_err(|e| WebError::listener_failed(event, &e))?;

    // Keep closure alive
    closure.forget();

    Ok(())
}

/// Report a failed DOM update to the console and carry on.
pub fn log_failure(result: Result<()>) {
    if let Err(e) = result {
        web_sys::console::error_1(&e.to_string().into());
    }
}

/// Horizontal pointer position of a mouse or touch event in page coordinates.
///
/// Touch events use the first active touch; a touch event with no touches
/// (e.g. `touchend`) yields `None`.
#[must_use]
pub fn page_x(event: &Event) -> Option<f64> {
    if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
        return Some(f64::from(mouse.page_x()));
    }
    event
        .dyn_ref::<TouchEvent>()
        .and_then(|touch| touch.touches().get(0))
        .map(|t| f64::from(t.page_x()))
}

/// Horizontal pointer position of a mouse or touch event in viewport coordinates.
#[must_use]
pub fn client_x(event: &Event) -> Option<f64> {
    if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
        return Some(f64::from(mouse.client_x()));
    }
    event
        .dyn_ref::<TouchEvent>()
        .and_then(|touch| touch.touches().get(0))
        .map(|t| f64::from(t.client_x()))
}

/// Round a fractional offset to the integer pixels the DOM scroll API takes.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn to_px(value: f64) -> i32 {
    if value.is_finite() {
        value
            .round()
            .clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
    } else {
        0
    }
}


#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod browser_tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_document_available() {
        assert!(document().is_ok());
    }

    #[wasm_bindgen_test]
    fn test_missing_hook_is_none() {
        let document = document().expect("document");
        assert!(query(&document, ".no-such-hook").expect("valid selector").is_none());
        assert!(query_all(&document, ".no-such-hook").expect("valid selector").is_empty());
        assert!(by_id(&document, "no-such-id").is_none());
    }

    #[wasm_bindgen_test]
    fn test_invalid_selector_is_error() {
        let document = document().expect("document");
        assert!(matches!(
            query(&document, "[[["),
            Err(WebError::InvalidSelector { .. })
        ));
    }

    #[wasm_bindgen_test]
    fn test_set_class_toggles() {
        let document = document().expect("document");
        let element = document.create_element("div").expect("element");
        set_class(&element, "active", true).expect("class added");
        assert!(element.class_list().contains("active"));
        set_class(&element, "active", false).expect("class removed");
        assert!(!element.class_list().contains("active"));
    }
}
