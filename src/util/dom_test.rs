#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn row_control_ids_are_unique_per_line_and_part() {
    let a = LineId::new();
    let b = LineId::new();
    assert_eq!(row_control_id(a, "qty"), format!("cart-{a}-qty"));
    assert_ne!(row_control_id(a, "qty"), row_control_id(a, "inc"));
    assert_ne!(row_control_id(a, "qty"), row_control_id(b, "qty"));
}

#[test]
fn prevent_default_only_when_requested() {
    assert!(wants_prevent_default(&[ModalEffect::PreventDefault, ModalEffect::Focus("x".to_owned())]));
    assert!(!wants_prevent_default(&[ModalEffect::Hide]));
    assert!(!wants_prevent_default(&[]));
}

#[test]
fn focusable_selector_skips_negative_tabindex() {
    assert!(FOCUSABLE_SELECTOR.contains(r#":not([tabindex="-1"])"#));
    assert!(FOCUSABLE_SELECTOR.starts_with("button"));
}

#[test]
fn browser_queries_are_empty_outside_browser() {
    assert!(active_element_id().is_none());
    assert!(collect_focusables(DRAWER_ID).is_empty());
    assert!(current_year().is_none());
}

#[test]
fn effects_are_callable_outside_browser() {
    apply_effects(&[ModalEffect::LockScroll, ModalEffect::Focus("closeCart".to_owned()), ModalEffect::UnlockScroll]);
    mark_js_enabled();
}

#[test]
fn product_config_falls_back_to_demo() {
    assert_eq!(read_product_config(), ProductConfig::default());
}
