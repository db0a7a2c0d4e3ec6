#![cfg(not(feature = "csr"))]

use storefront::config::ProductConfig;
use storefront::engine::{PageCore, PageEvent};
use storefront::store::CartStore;

use super::*;

#[test]
fn reads_report_unavailable_outside_browser() {
    assert!(matches!(BrowserStorage.get_item("mini-cart-v1"), Err(StoreError::Unavailable)));
}

#[test]
fn writes_report_unavailable_outside_browser() {
    let mut storage = BrowserStorage;
    assert!(matches!(storage.set_item("mini-cart-v1", "{}"), Err(StoreError::Unavailable)));
}

#[test]
fn cart_store_fails_open_on_load() {
    let store = CartStore::new(BrowserStorage);
    assert!(store.load().is_empty());
}

#[test]
fn page_keeps_working_when_storage_is_unavailable() {
    let mut page = PageCore::new(ProductConfig::default(), BrowserStorage);
    page.dispatch(PageEvent::AddToCart { active: None });
    assert_eq!(page.cart().count(), 1);
    assert!(page.last_store_error().is_some());
}
