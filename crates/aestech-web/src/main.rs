//! WASM entry point
//!
//! Trunk compiles this to WASM and loads it on every storefront page. It
//! wires whichever components the page's markup contains.

fn main() {
    // Set up panic hook for better error messages in browser console
    console_error_panic_hook::set_once();

    match aestech_web::start() {
        Ok(storefront) => {
            let active = storefront.active_components().join(", ");
            web_sys::console::log_1(&format!("AESTECH storefront ready: [{active}]").into());
        }
        Err(e) => web_sys::console::error_1(&e.to_string().into()),
    }
}
