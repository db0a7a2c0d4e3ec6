#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use leptos::prelude::*;
use storefront::cart::LineId;
use storefront::engine::{PageCore, PageEvent};
use storefront::modal::ModalEffect;

use crate::util::dom;
use crate::util::storage::BrowserStorage;

/// Page state backed by `localStorage`.
pub type PageState = PageCore<BrowserStorage>;

/// Build page state from the embedded product config and the saved cart.
pub fn load_page_state() -> PageState {
    PageCore::new(dom::read_product_config(), BrowserStorage)
}

/// Run `event` against the page and apply the resulting DOM effects.
///
/// Returns the effects so key handlers can honor `PreventDefault`.
pub fn dispatch(page: RwSignal<PageState>, event: PageEvent) -> Vec<ModalEffect> {
    let effects = page.try_update(|p| p.dispatch(event)).unwrap_or_default();
    dom::apply_effects(&effects);
    effects
}

/// Send a key press to the drawer, cancelling the browser default when asked.
pub fn dispatch_key(page: RwSignal<PageState>, ev: &leptos::ev::KeyboardEvent, focusables: Vec<storefront::modal::Focusable>) {
    let effects = dispatch(
        page,
        PageEvent::KeyDown {
            key: ev.key(),
            shift: ev.shift_key(),
            active: dom::active_element_id(),
            focusables,
        },
    );
    if dom::wants_prevent_default(&effects) {
        ev.prevent_default();
    }
}

/// The stored quantity of line `id` as field text; empty once the line is gone.
///
/// Read reactively so a clamped entry snaps back even when the model did not
/// change.
pub fn line_qty_text(page: RwSignal<PageState>, id: LineId) -> String {
    page.with(|p| p.cart().get(id).map(|item| item.qty.to_string()).unwrap_or_default())
}
