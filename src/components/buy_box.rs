//! Purchase panel: title, price, color/size pickers, quantity, and buy buttons.

use leptos::prelude::*;
use storefront::engine::PageEvent;

use crate::state::page::{PageState, dispatch};
use crate::util::dom;

/// An exclusive radio group for one variant axis.
#[component]
fn ChoiceFieldset(
    name: String,
    legend: &'static str,
    options: Vec<String>,
    selected: Signal<String>,
    on_choose: Callback<String>,
) -> impl IntoView {
    view! {
        <fieldset class="choice">
            <legend>{legend}</legend>
            {options
                .into_iter()
                .map(|option| {
                    let checked_value = option.clone();
                    let chosen_value = option.clone();
                    let name = name.clone();
                    view! {
                        <label class="choice__option">
                            <input
                                type="radio"
                                name=name
                                value=option.clone()
                                prop:checked=move || selected.get() == checked_value
                                on:change=move |_| on_choose.run(chosen_value.clone())
                            />
                            <span>{option}</span>
                        </label>
                    }
                })
                .collect::<Vec<_>>()}
        </fieldset>
    }
}

/// Buy box next to the gallery.
///
/// "Buy now" adds to the cart exactly like "Add to cart"; there is no
/// separate checkout flow.
#[component]
pub fn BuyBox() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();

    let (title, price) = page.with_untracked(|p| (p.config().title.clone(), p.config().price.to_string()));
    let (color_group, color_options, size_group, size_options) = page.with_untracked(|p| {
        let variants = p.variants();
        (
            variants.color.name().to_owned(),
            variants.color.options().to_vec(),
            variants.size.name().to_owned(),
            variants.size.options().to_vec(),
        )
    });

    let color = Signal::derive(move || page.with(|p| p.variants().color().to_owned()));
    let size = Signal::derive(move || page.with(|p| p.variants().size().to_owned()));
    let qty = move || page.with(|p| p.qty().to_string());

    let on_color = Callback::new(move |value: String| {
        dispatch(page, PageEvent::ColorChosen(value));
    });
    let on_size = Callback::new(move |value: String| {
        dispatch(page, PageEvent::SizeChosen(value));
    });

    view! {
        <section class="buy-box">
            <h1 class="buy-box__title">{title}</h1>
            <p class="buy-box__price">{price}</p>
            <ChoiceFieldset name=color_group legend="Color" options=color_options selected=color on_choose=on_color/>
            <ChoiceFieldset name=size_group legend="Size" options=size_options selected=size on_choose=on_size/>
            <div class="buy-box__qty">
                <button
                    id="decQty"
                    class="btn ghost"
                    aria-label="Decrease quantity"
                    on:click=move |_| {
                        dispatch(page, PageEvent::DecQty);
                    }
                >
                    "\u{2212}"
                </button>
                <input
                    id="qty"
                    type="number"
                    min="1"
                    max="10"
                    aria-label="Quantity"
                    prop:value=qty
                    on:change=move |ev| {
                        dispatch(page, PageEvent::QtyInput(event_target_value(&ev)));
                    }
                />
                <button
                    id="incQty"
                    class="btn ghost"
                    aria-label="Increase quantity"
                    on:click=move |_| {
                        dispatch(page, PageEvent::IncQty);
                    }
                >
                    "+"
                </button>
            </div>
            <div class="buy-box__actions">
                <button
                    id="addToCart"
                    class="btn"
                    on:click=move |_| {
                        dispatch(page, PageEvent::AddToCart { active: dom::active_element_id() });
                    }
                >
                    "Add to cart"
                </button>
                <button
                    id="buyNow"
                    class="btn ghost"
                    on:click=move |_| {
                        dispatch(page, PageEvent::BuyNow { active: dom::active_element_id() });
                    }
                >
                    "Buy now"
                </button>
            </div>
        </section>
    }
}
