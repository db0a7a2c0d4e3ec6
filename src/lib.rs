//! # product-page
//!
//! Leptos + WASM frontend for the product detail page: image gallery, variant
//! pickers, and the mini cart drawer.
//!
//! All page state lives in the `storefront` crate's `PageCore`. This crate
//! renders it, turns DOM events into `PageEvent`s, applies the focus and
//! scroll effects that come back, and supplies the `localStorage` backend.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the page.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    util::dom::mark_js_enabled();
    leptos::mount::mount_to_body(app::App);
}
