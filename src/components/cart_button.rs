//! Header button that opens the cart drawer and shows the item count.

use leptos::prelude::*;
use storefront::engine::PageEvent;

use crate::state::page::{PageState, dispatch};
use crate::util::dom::{self, DRAWER_ID, OPEN_CART_ID};

#[component]
pub fn CartButton() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();

    let expanded = move || page.with(|p| p.modal().is_open()).to_string();
    let count = move || page.with(|p| p.cart().count()).to_string();

    view! {
        <button
            id=OPEN_CART_ID
            class="btn ghost cart-button"
            aria-haspopup="dialog"
            aria-controls=DRAWER_ID
            aria-expanded=expanded
            on:click=move |_| {
                dispatch(page, PageEvent::OpenCart { active: dom::active_element_id() });
            }
        >
            "Cart "
            <span id="cartCount" class="cart-button__count">{count}</span>
        </button>
    }
}
