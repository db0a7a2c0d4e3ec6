//! Product configuration: the catalog entry the page is built around.
//!
//! A page either uses [`ProductConfig::default`] (the Riviera Tee demo) or
//! parses a JSON blob with [`ProductConfig::from_json`]. Missing fields fall
//! back to the demo values.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::cart::{LineId, LineItem};
use crate::consts::STORAGE_KEY;
use crate::gallery::GalleryImage;
use crate::money::Money;

/// Error returned by [`ProductConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The blob is not valid JSON for a product config.
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),
    /// The blob parsed but a field is unusable.
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductConfig {
    pub sku: String,
    pub title: String,
    pub price: Money,
    pub images: Vec<GalleryImage>,
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
    pub storage_key: String,
}

impl Default for ProductConfig {
    fn default() -> Self {
        let images = [(1, "Front"), (2, "Back"), (3, "Detail"), (4, "On model")]
            .into_iter()
            .map(|(n, alt)| GalleryImage {
                full: format!("img/tee-{n}.jpg"),
                thumb: format!("img/tee-{n}-thumb.jpg"),
                alt: alt.to_owned(),
            })
            .collect();
        Self {
            sku: "riviera-tee".to_owned(),
            title: "Riviera Tee".to_owned(),
            price: Money::from_cents(2490),
            images,
            colors: ["Sand", "Navy", "Olive"].map(str::to_owned).to_vec(),
            sizes: ["XS", "S", "M", "L", "XL"].map(str::to_owned).to_vec(),
            storage_key: STORAGE_KEY.to_owned(),
        }
    }
}

impl ProductConfig {
    /// Parse and validate a JSON product config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] when a required field is empty or negative.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.sku.trim().is_empty() {
            return Err(ConfigError::Invalid("sku must not be empty".into()));
        }
        if self.title.trim().is_empty() {
            return Err(ConfigError::Invalid("title must not be empty".into()));
        }
        if self.price < Money::ZERO {
            return Err(ConfigError::Invalid(format!("price must not be negative, got {}", self.price)));
        }
        if self.storage_key.is_empty() {
            return Err(ConfigError::Invalid("storage_key must not be empty".into()));
        }
        Ok(())
    }

    /// A new cart line for this product in the given variant.
    #[must_use]
    pub fn line_item(&self, color: &str, size: &str, qty: u32, image: String) -> LineItem {
        LineItem {
            id: LineId::new(),
            sku: self.sku.clone(),
            title: self.title.clone(),
            color: color.to_owned(),
            size: size.to_owned(),
            price: self.price,
            qty,
            image,
        }
    }
}
