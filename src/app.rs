//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::{
    buy_box::BuyBox, cart_button::CartButton, cart_drawer::CartDrawer, footer::Footer, gallery::Gallery,
};
use crate::state::page::{self, PageState};

/// Root application component.
///
/// Loads page state (product config plus the saved cart), provides it as
/// context, and listens for Escape on the whole window.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let page: RwSignal<PageState> = RwSignal::new(page::load_page_state());
    provide_context(page);

    let title = page.with_untracked(|p| p.config().title.clone());

    // Escape closes the drawer from anywhere; Tab is trapped by the drawer itself.
    let _ = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            page::dispatch_key(page, &ev, Vec::new());
        }
    });

    view! {
        <Title text=title/>
        <header class="site-header">
            <a href="/" class="site-header__brand">"Riviera Supply"</a>
            <span class="site-header__spacer"></span>
            <CartButton/>
        </header>
        <main class="product">
            <Gallery/>
            <BuyBox/>
        </main>
        <CartDrawer/>
        <Footer/>
    }
}
