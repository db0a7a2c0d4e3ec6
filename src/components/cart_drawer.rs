//! Modal cart drawer: line items, subtotal, and checkout.
//!
//! The whole body is rebuilt from `CartView` on every signal update, including
//! ones that leave the cart unchanged (a clamped entry). Clicks on any
//! `data-close` element dismiss it; Tab and Shift+Tab loop inside it.

use leptos::prelude::*;
use storefront::consts::CLOSE_CART_ID;
use storefront::engine::PageEvent;
use storefront::view::CartBody;

use crate::components::cart_row::CartRow;
use crate::state::page::{PageState, dispatch, dispatch_key};
use crate::util::dom::{self, DRAWER_ID};

#[component]
pub fn CartDrawer() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();

    let hidden = move || !page.with(|p| p.modal().is_open());
    let cart_view = move || page.with(|p| p.cart_view());

    let on_click = move |ev: leptos::ev::MouseEvent| {
        let dismiss = dom::is_dismiss_target(&ev);
        dispatch(page, PageEvent::DrawerClick { dismiss });
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Tab" {
            dispatch_key(page, &ev, dom::collect_focusables(DRAWER_ID));
        }
    };

    view! {
        <div
            id=DRAWER_ID
            class="mini-cart"
            role="dialog"
            aria-modal="true"
            aria-labelledby="miniCartTitle"
            hidden=hidden
            on:click=on_click
            on:keydown=on_keydown
        >
            <div class="mini-cart__backdrop" data-close=""></div>
            <aside class="mini-cart__panel">
                <header class="mini-cart__header">
                    <h2 id="miniCartTitle">"Your cart"</h2>
                    <button
                        id=CLOSE_CART_ID
                        class="btn ghost"
                        aria-label="Close cart"
                        on:click=move |_| {
                            dispatch(page, PageEvent::CloseCart);
                        }
                    >
                        "\u{2715}"
                    </button>
                </header>
                <div id="cartItems" class="mini-cart__items">
                    {move || match cart_view().body {
                        CartBody::Empty(message) => view! { <p class="muted">{message}</p> }.into_any(),
                        CartBody::Rows(rows) => {
                            rows.into_iter()
                                .map(|row| view! { <CartRow row=row/> })
                                .collect::<Vec<_>>()
                                .into_any()
                        }
                    }}
                </div>
                <footer class="mini-cart__footer">
                    <div class="mini-cart__subtotal">
                        <span>"Subtotal"</span>
                        <strong id="cartSubtotal">{move || cart_view().subtotal}</strong>
                    </div>
                    <button
                        id="checkout"
                        class="btn"
                        on:click=move |_| {
                            dispatch(page, PageEvent::Checkout);
                        }
                    >
                        "Checkout"
                    </button>
                </footer>
            </aside>
        </div>
    }
}
