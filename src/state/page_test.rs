#![cfg(not(feature = "csr"))]

use leptos::prelude::*;
use storefront::view::RowAction;

use super::*;

#[test]
fn load_page_state_uses_demo_product_and_empty_cart() {
    let page = load_page_state();
    assert_eq!(page.config().sku, "riviera-tee");
    assert!(page.cart().is_empty());
}

#[test]
fn dispatch_updates_signal_and_returns_effects() {
    let page = RwSignal::new(load_page_state());
    let effects = dispatch(page, PageEvent::AddToCart { active: Some("addToCart".to_owned()) });
    assert!(effects.contains(&ModalEffect::Reveal));
    assert_eq!(page.with_untracked(|p| p.cart().count()), 1);
    assert!(page.with_untracked(|p| p.modal().is_open()));
}

#[test]
fn dispatch_row_action_through_signal() {
    let page = RwSignal::new(load_page_state());
    dispatch(page, PageEvent::AddToCart { active: None });
    let id = page.with_untracked(|p| p.cart().items()[0].id);
    dispatch(page, PageEvent::Row { id, action: RowAction::Increment });
    assert_eq!(page.with_untracked(|p| p.cart_view().count.clone()), "2");
}

#[test]
fn line_qty_text_snaps_back_after_clamped_entry() {
    let page = RwSignal::new(load_page_state());
    dispatch(page, PageEvent::AddToCart { active: None });
    let id = page.with_untracked(|p| p.cart().items()[0].id);
    for _ in 0..12 {
        dispatch(page, PageEvent::Row { id, action: RowAction::Increment });
    }
    assert_eq!(line_qty_text(page, id), "10");
    dispatch(page, PageEvent::Row { id, action: RowAction::SetQty("50".to_owned()) });
    assert_eq!(line_qty_text(page, id), "10");
    dispatch(page, PageEvent::Row { id, action: RowAction::SetQty("abc".to_owned()) });
    assert_eq!(line_qty_text(page, id), "1");
}

#[test]
fn line_qty_text_of_removed_line_is_empty() {
    let page = RwSignal::new(load_page_state());
    dispatch(page, PageEvent::AddToCart { active: None });
    let id = page.with_untracked(|p| p.cart().items()[0].id);
    dispatch(page, PageEvent::Row { id, action: RowAction::Remove });
    assert_eq!(line_qty_text(page, id), "");
}
