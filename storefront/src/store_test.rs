use super::*;
use crate::cart::LineId;
use crate::money::Money;

// =============================================================
// Helpers
// =============================================================

fn line(color: &str, qty: u32) -> LineItem {
    LineItem {
        id: LineId::new(),
        sku: "riviera-tee".to_owned(),
        title: "Riviera Tee".to_owned(),
        color: color.to_owned(),
        size: "M".to_owned(),
        price: Money::from_cents(2490),
        qty,
        image: "img/tee-1.jpg".to_owned(),
    }
}

fn store_with(raw: &str) -> CartStore<MemoryStorage> {
    let mut storage = MemoryStorage::new();
    storage.set_item(STORAGE_KEY, raw).unwrap();
    CartStore::new(storage)
}

/// Storage whose every call fails, like a sandboxed iframe.
struct BrokenStorage;

impl KeyValueStorage for BrokenStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable)
    }

    fn set_item(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Backend("SecurityError".to_owned()))
    }
}

// =============================================================
// load
// =============================================================

#[test]
fn load_missing_key_is_empty() {
    let store = CartStore::new(MemoryStorage::new());
    assert!(store.load().is_empty());
}

#[test]
fn load_corrupt_blob_is_empty() {
    for raw in ["{not json", "", "[]", "42", "\"items\"", "{\"items\": 3}", "{\"items\": null}"] {
        assert!(store_with(raw).load().is_empty(), "blob {raw:?} should load empty");
    }
}

#[test]
fn load_null_is_empty() {
    assert!(store_with("null").load().is_empty());
}

#[test]
fn load_missing_items_field_is_empty() {
    assert!(store_with("{\"cart\": []}").load().is_empty());
}

#[test]
fn load_item_missing_field_is_empty() {
    let raw = r#"{"items":[{"sku":"riviera-tee","title":"Riviera Tee","color":"Sand","size":"M","qty":1,"img":"a.jpg"}]}"#;
    assert!(store_with(raw).load().is_empty());
}

#[test]
fn load_ignores_extra_fields() {
    let raw = r#"{"version":2,"items":[{"sku":"riviera-tee","title":"Riviera Tee","color":"Sand","size":"M","price":24.9,"qty":2,"img":"a.jpg","gift":true}]}"#;
    let items = store_with(raw).load();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].qty, 2);
    assert_eq!(items[0].price, Money::from_cents(2490));
    assert_eq!(items[0].image, "a.jpg");
}

#[test]
fn load_unavailable_storage_is_empty() {
    let store = CartStore::new(BrokenStorage);
    assert!(store.load().is_empty());
}

#[test]
fn load_cart_clamps_stored_quantities() {
    let raw = r#"{"items":[{"sku":"riviera-tee","title":"Riviera Tee","color":"Sand","size":"M","price":24.9,"qty":40,"img":"a.jpg"}]}"#;
    let cart = store_with(raw).load_cart();
    assert_eq!(cart.items()[0].qty, 10);
}

/// Two-line blob where only the first line's qty varies.
fn two_line_blob(first_qty: &str) -> String {
    format!(
        r#"{{"items":[
            {{"sku":"riviera-tee","title":"Riviera Tee","color":"Sand","size":"M","price":24.9,"qty":{first_qty},"img":"a.jpg"}},
            {{"sku":"riviera-tee","title":"Riviera Tee","color":"Navy","size":"M","price":24.9,"qty":3,"img":"a.jpg"}}
        ]}}"#
    )
}

#[test]
fn load_coerces_any_numeric_stored_qty() {
    for (stored, expected) in [("-1", 1), ("0", 1), ("0.5", 1), ("2.0", 2), ("9.99", 9), ("4294967296", 10), ("1e12", 10)] {
        let items = store_with(&two_line_blob(stored)).load();
        assert_eq!(items.len(), 2, "qty {stored} should keep both lines");
        assert_eq!(items[0].qty, expected, "qty {stored}");
        assert_eq!(items[1].qty, 3);
    }
}

#[test]
fn load_non_numeric_qty_is_empty() {
    for stored in ["\"2\"", "null", "true"] {
        assert!(store_with(&two_line_blob(stored)).load().is_empty(), "qty {stored}");
    }
}

#[test]
fn load_negative_price_is_empty() {
    let raw = r#"{"items":[{"sku":"riviera-tee","title":"Riviera Tee","color":"Sand","size":"M","price":-24.9,"qty":2,"img":"a.jpg"}]}"#;
    let store = store_with(raw);
    assert!(store.load().is_empty());
    assert_eq!(store.load_cart().subtotal(), Money::ZERO);
}

#[test]
fn load_zero_price_is_kept() {
    let raw = r#"{"items":[{"sku":"riviera-tee","title":"Riviera Tee","color":"Sand","size":"M","price":0,"qty":2,"img":"a.jpg"}]}"#;
    assert_eq!(store_with(raw).load_cart().subtotal(), Money::ZERO);
    assert_eq!(store_with(raw).load().len(), 1);
}

#[test]
fn load_assigns_fresh_distinct_ids() {
    let raw = r#"{"items":[
        {"sku":"riviera-tee","title":"Riviera Tee","color":"Sand","size":"M","price":24.9,"qty":1,"img":"a.jpg"},
        {"sku":"riviera-tee","title":"Riviera Tee","color":"Navy","size":"M","price":24.9,"qty":1,"img":"a.jpg"}
    ]}"#;
    let items = store_with(raw).load();
    assert_ne!(items[0].id, items[1].id);
}

// =============================================================
// save
// =============================================================

#[test]
fn save_writes_items_blob_under_key() {
    let mut store = CartStore::new(MemoryStorage::new());
    store.save(&[line("Sand", 2)]).unwrap();
    let raw = store.storage().get_item("mini-cart-v1").unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let item = &value["items"][0];
    assert_eq!(item["sku"], "riviera-tee");
    assert_eq!(item["color"], "Sand");
    assert_eq!(item["qty"], 2);
    assert_eq!(item["price"], 24.9);
    assert_eq!(item["img"], "img/tee-1.jpg");
    assert!(item.get("id").is_none());
}

#[test]
fn save_then_load_round_trips_fields() {
    let mut store = CartStore::new(MemoryStorage::new());
    let saved = vec![line("Sand", 2), line("Navy", 10)];
    store.save(&saved).unwrap();
    let loaded = store.load();
    assert_eq!(loaded.len(), saved.len());
    for (a, b) in saved.iter().zip(&loaded) {
        assert!(a.same_fields(b));
    }
}

#[test]
fn save_empty_cart_writes_empty_items() {
    let mut store = CartStore::new(MemoryStorage::new());
    store.save(&[]).unwrap();
    assert_eq!(store.storage().get_item(STORAGE_KEY).unwrap().as_deref(), Some("{\"items\":[]}"));
}

#[test]
fn save_over_quota_reports_error() {
    let mut store = CartStore::new(MemoryStorage::with_quota(32));
    let err = store.save(&[line("Sand", 1)]).unwrap_err();
    assert!(matches!(err, StoreError::QuotaExceeded { .. }));
    assert!(store.load().is_empty());
}

#[test]
fn save_to_broken_storage_reports_error() {
    let mut store = CartStore::new(BrokenStorage);
    assert!(matches!(store.save(&[]), Err(StoreError::Backend(_))));
}

#[test]
fn custom_key_is_used() {
    let mut store = CartStore::with_key(MemoryStorage::new(), "other-cart");
    store.save(&[line("Sand", 1)]).unwrap();
    assert_eq!(store.key(), "other-cart");
    assert!(store.storage().get_item(STORAGE_KEY).unwrap().is_none());
    assert_eq!(store.load().len(), 1);
}

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_quota_counts_replacement_not_accumulation() {
    let mut storage = MemoryStorage::with_quota(10);
    storage.set_item("k", "12345").unwrap();
    storage.set_item("k", "123456789").unwrap();
    assert!(storage.set_item("k", "1234567890").is_err());
    assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("123456789"));
}
