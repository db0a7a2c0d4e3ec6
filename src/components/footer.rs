//! Page footer with the current year.

use leptos::prelude::*;

use crate::util::dom;

#[component]
pub fn Footer() -> impl IntoView {
    let year = dom::current_year().map(|y| y.to_string()).unwrap_or_default();

    view! {
        <footer class="site-footer">
            "\u{a9} "
            <span id="year">{year}</span>
            " Riviera Supply"
        </footer>
    }
}
