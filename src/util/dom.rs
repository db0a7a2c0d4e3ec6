//! DOM helpers: focus, scroll lock, drawer focusables, and page chrome.
//!
//! Drawer visibility and `aria-expanded` are driven reactively from page state,
//! so [`apply_effects`] only handles the effects that need imperative DOM work.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use storefront::cart::LineId;
use storefront::config::ProductConfig;
use storefront::modal::{Focusable, ModalEffect};

#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;

/// Elements that take part in the drawer's focus loop.
pub const FOCUSABLE_SELECTOR: &str = r#"button, [href], input, select, textarea, [tabindex]:not([tabindex="-1"])"#;

/// Id of the drawer container.
pub const DRAWER_ID: &str = "miniCart";

/// Id of the header button that opens the drawer.
pub const OPEN_CART_ID: &str = "openCart";

/// Id of the `<script type="application/json">` holding the product config.
pub const PRODUCT_CONFIG_ID: &str = "product-config";

/// DOM id for one control on a cart row, e.g. `cart-<uuid>-qty`.
#[must_use]
pub fn row_control_id(id: LineId, part: &str) -> String {
    format!("cart-{id}-{part}")
}

/// Whether the key handler that produced `effects` must cancel the browser default.
#[must_use]
pub fn wants_prevent_default(effects: &[ModalEffect]) -> bool {
    effects.contains(&ModalEffect::PreventDefault)
}

/// Whether a click landed on an element flagged `data-close`.
pub fn is_dismiss_target(ev: &leptos::ev::MouseEvent) -> bool {
    #[cfg(feature = "csr")]
    {
        ev.target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .is_some_and(|el| el.has_attribute("data-close"))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ev;
        false
    }
}

/// Id of the focused element, if it has one.
pub fn active_element_id() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let id = web_sys::window()?.document()?.active_element()?.id();
        if id.is_empty() { None } else { Some(id) }
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Focus-loop candidates inside the element `container_id`, in document order.
pub fn collect_focusables(container_id: &str) -> Vec<Focusable> {
    #[cfg(feature = "csr")]
    {
        let Some(container) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(container_id))
        else {
            return Vec::new();
        };
        let Ok(nodes) = container.query_selector_all(FOCUSABLE_SELECTOR) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
            .map(|el| Focusable {
                id: el.id(),
                disabled: el.has_attribute("disabled"),
                hidden: el.offset_parent().is_none(),
            })
            .collect()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = container_id;
        Vec::new()
    }
}

/// Apply focus and scroll effects. Focus moves on the next tick so it lands
/// after the drawer has been revealed.
pub fn apply_effects(effects: &[ModalEffect]) {
    for effect in effects {
        match effect {
            ModalEffect::Focus(id) => focus_later(id.clone()),
            ModalEffect::LockScroll => set_body_overflow("hidden"),
            ModalEffect::UnlockScroll => set_body_overflow(""),
            ModalEffect::Reveal | ModalEffect::Hide | ModalEffect::SetExpanded(_) | ModalEffect::PreventDefault => {}
        }
    }
}

fn focus_later(id: String) {
    #[cfg(feature = "csr")]
    {
        gloo_timers::callback::Timeout::new(0, move || {
            let el = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(&id))
                .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
            if let Some(el) = el {
                let _ = el.focus();
            }
        })
        .forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
    }
}

fn set_body_overflow(value: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.style().set_property("overflow", value);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = value;
    }
}

/// Drop the `no-js` class from `<html>` once the page is interactive.
pub fn mark_js_enabled() {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.class_list().remove_1("no-js");
        }
    }
}

/// Current calendar year for the footer.
pub fn current_year() -> Option<u32> {
    #[cfg(feature = "csr")]
    {
        Some(js_sys::Date::new_0().get_full_year())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Product config embedded in the page, or the built-in demo product.
pub fn read_product_config() -> ProductConfig {
    #[cfg(feature = "csr")]
    {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(PRODUCT_CONFIG_ID))
            .and_then(|el| el.text_content());
        match raw.map(|raw| ProductConfig::from_json(&raw)) {
            Some(Ok(config)) => config,
            Some(Err(e)) => {
                log::warn!("product config rejected, using demo product: {e}");
                ProductConfig::default()
            }
            None => ProductConfig::default(),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        ProductConfig::default()
    }
}
