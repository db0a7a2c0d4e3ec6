//! Persistent store adapter for the cart blob.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser exposes a flat string key-value store (`localStorage`). The
//! engine only sees it through [`KeyValueStorage`], so the frontend plugs in
//! the real thing and tests plug in [`MemoryStorage`].
//!
//! Loading is fail-open: a missing key, unreadable storage, or a blob that does
//! not parse all produce an empty cart. Saving is strict: a failed write comes
//! back as a [`StoreError`] so the caller can report it.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::cart::{Cart, LineItem};
use crate::consts::STORAGE_KEY;

/// Error returned by storage reads and writes.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No storage facility is reachable (private mode, sandboxed frame, SSR).
    #[error("storage is unavailable")]
    Unavailable,
    /// The write would exceed the storage quota.
    #[error("storage quota exceeded writing {bytes} bytes to {key}")]
    QuotaExceeded { key: String, bytes: usize },
    /// The cart could not be serialized.
    #[error("failed to serialize cart: {0}")]
    Serialize(#[from] serde_json::Error),
    /// The storage facility rejected the operation.
    #[error("storage operation failed: {0}")]
    Backend(String),
}

/// A flat string key-value store shaped like `window.localStorage`.
pub trait KeyValueStorage {
    /// Read the value at `key`, `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the storage facility cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` at `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the write is rejected.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory [`KeyValueStorage`] with an optional byte quota.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that rejects writes once keys plus values exceed `bytes`.
    #[must_use]
    pub fn with_quota(bytes: usize) -> Self {
        Self { entries: HashMap::new(), quota: Some(bytes) }
    }

    fn used_bytes_without(&self, key: &str) -> usize {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if let Some(quota) = self.quota {
            let bytes = key.len() + value.len();
            if self.used_bytes_without(key) + bytes > quota {
                return Err(StoreError::QuotaExceeded { key: key.to_owned(), bytes });
            }
        }
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[derive(Serialize)]
struct CartBlobRef<'a> {
    items: &'a [LineItem],
}

#[derive(Deserialize)]
struct CartBlob {
    items: Vec<LineItem>,
}

/// Reads and writes the cart blob under a fixed key.
#[derive(Debug)]
pub struct CartStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> CartStore<S> {
    /// Store using the default [`STORAGE_KEY`].
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self { storage, key: key.into() }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Load the stored lines, or an empty list when nothing usable is stored.
    pub fn load(&self) -> Vec<LineItem> {
        let raw = match self.storage.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::debug!("cart load: storage read failed, starting empty: {e}");
                return Vec::new();
            }
        };
        match serde_json::from_str::<Option<CartBlob>>(&raw) {
            Ok(Some(blob)) => blob.items,
            Ok(None) => Vec::new(),
            Err(e) => {
                log::debug!("cart load: stored blob is malformed, starting empty: {e}");
                Vec::new()
            }
        }
    }

    /// Load the stored lines into a [`Cart`], merging and clamping as needed.
    pub fn load_cart(&self) -> Cart {
        Cart::from_items(self.load())
    }

    /// Serialize `{"items": [...]}` and write it under the key.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when serialization or the write fails.
    pub fn save(&mut self, items: &[LineItem]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(&CartBlobRef { items })?;
        self.storage.set_item(&self.key, &raw)
    }
}
