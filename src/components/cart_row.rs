//! One line in the cart drawer with its quantity stepper and remove control.

use leptos::prelude::*;
use storefront::engine::PageEvent;
use storefront::view::{CartRowView, RowAction};

use crate::state::page::{PageState, dispatch, line_qty_text};
use crate::util::dom::row_control_id;

#[component]
pub fn CartRow(row: CartRowView) -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();
    let id = row.id;
    let send = move |action: RowAction| {
        dispatch(page, PageEvent::Row { id, action });
    };

    view! {
        <div class="cart-item">
            <img src=row.image alt="" width="64" height="64"/>
            <div>
                <h4>{row.title}</h4>
                <div class="meta">{row.meta}</div>
                <div class="cart-qty">
                    <button
                        id=row_control_id(id, "dec")
                        class="btn ghost"
                        aria-label="Decrease"
                        on:click=move |_| send(RowAction::Decrement)
                    >
                        "\u{2212}"
                    </button>
                    <input
                        id=row_control_id(id, "qty")
                        type="number"
                        min="1"
                        max="10"
                        prop:value=move || line_qty_text(page, id)
                        aria-label=row.qty_label
                        on:change=move |ev| send(RowAction::SetQty(event_target_value(&ev)))
                    />
                    <button
                        id=row_control_id(id, "inc")
                        class="btn ghost"
                        aria-label="Increase"
                        on:click=move |_| send(RowAction::Increment)
                    >
                        "+"
                    </button>
                </div>
            </div>
            <div class="cart-item__side">
                <strong>{row.line_total}</strong>
                <button
                    id=row_control_id(id, "remove")
                    class="remove"
                    aria-label=row.remove_label
                    on:click=move |_| send(RowAction::Remove)
                >
                    "Remove"
                </button>
            </div>
        </div>
    }
}
