//! Product image gallery: hero image, prev/next arrows, and thumbnail strip.

use leptos::prelude::*;
use storefront::engine::PageEvent;

use crate::state::page::{PageState, dispatch};

/// Gallery for the product images.
///
/// The hero image takes focus so ArrowLeft/ArrowRight can page through it.
#[component]
pub fn Gallery() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();

    let hero = move || page.with(|p| p.gallery().hero());
    let hero_src = move || hero().map(|h| h.src).unwrap_or_default();
    let hero_alt = move || hero().map(|h| h.alt).unwrap_or_default();

    view! {
        <section class="gallery" aria-label="Product images">
            <div class="gallery__hero">
                <button
                    id="prevImg"
                    class="gallery__nav gallery__nav--prev"
                    aria-label="Previous image"
                    on:click=move |_| {
                        dispatch(page, PageEvent::PrevImage);
                    }
                >
                    "\u{2190}"
                </button>
                <img
                    id="heroImg"
                    class="gallery__hero-img"
                    tabindex="0"
                    src=hero_src
                    alt=hero_alt
                    on:keydown=move |ev| {
                        dispatch(page, PageEvent::HeroKey(ev.key()));
                    }
                />
                <button
                    id="nextImg"
                    class="gallery__nav gallery__nav--next"
                    aria-label="Next image"
                    on:click=move |_| {
                        dispatch(page, PageEvent::NextImage);
                    }
                >
                    "\u{2192}"
                </button>
            </div>
            <div class="gallery__thumbs" role="tablist" aria-label="Choose image">
                {move || {
                    page.with(|p| p.gallery().thumbs())
                        .into_iter()
                        .map(|thumb| {
                            let index = thumb.index;
                            let selected = if thumb.active { "true" } else { "false" };
                            view! {
                                <button
                                    class="thumb"
                                    class:is-active=thumb.active
                                    role="tab"
                                    aria-selected=selected
                                    on:click=move |_| {
                                        dispatch(page, PageEvent::ThumbClicked(index));
                                    }
                                >
                                    <img src=thumb.src alt=thumb.alt width="72" height="72"/>
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </section>
    }
}
