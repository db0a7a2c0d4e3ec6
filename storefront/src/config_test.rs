use super::*;

#[test]
fn default_is_riviera_tee() {
    let config = ProductConfig::default();
    assert_eq!(config.sku, "riviera-tee");
    assert_eq!(config.price.to_string(), "$24.90");
    assert_eq!(config.images.len(), 4);
    assert_eq!(config.storage_key, "mini-cart-v1");
    assert!(config.colors.iter().any(|c| c == "Sand"));
    assert!(config.sizes.iter().any(|s| s == "M"));
}

#[test]
fn from_json_fills_missing_fields_with_defaults() {
    let config = ProductConfig::from_json(r#"{"title":"Harbor Hoodie","price":59.5}"#).unwrap();
    assert_eq!(config.title, "Harbor Hoodie");
    assert_eq!(config.price, Money::from_cents(5950));
    assert_eq!(config.sku, "riviera-tee");
    assert_eq!(config.images.len(), 4);
}

#[test]
fn from_json_rejects_malformed_json() {
    assert!(matches!(ProductConfig::from_json("{"), Err(ConfigError::Parse(_))));
}

#[test]
fn from_json_rejects_empty_sku() {
    let err = ProductConfig::from_json(r#"{"sku":"  "}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
    assert!(err.to_string().contains("sku"));
}

#[test]
fn from_json_rejects_negative_price() {
    assert!(matches!(ProductConfig::from_json(r#"{"price":-1}"#), Err(ConfigError::Invalid(_))));
}

#[test]
fn line_item_copies_catalog_fields() {
    let config = ProductConfig::default();
    let item = config.line_item("Navy", "L", 3, "img/tee-2.jpg".to_owned());
    assert_eq!(item.sku, "riviera-tee");
    assert_eq!(item.title, "Riviera Tee");
    assert_eq!(item.color, "Navy");
    assert_eq!(item.size, "L");
    assert_eq!(item.qty, 3);
    assert_eq!(item.price, Money::from_cents(2490));
}
