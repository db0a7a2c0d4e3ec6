//! `localStorage` backend for the cart store.
//!
//! The handle is looked up on every call rather than held, which keeps
//! [`BrowserStorage`] `Send + Sync` so page state can live in a plain
//! `RwSignal`. Outside the browser every call reports the store unavailable.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use storefront::store::{KeyValueStorage, StoreError};

/// [`KeyValueStorage`] over `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StoreError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StoreError::Unavailable)
}

#[cfg(feature = "csr")]
fn backend_error(err: &wasm_bindgen::JsValue, key: &str, bytes: usize) -> StoreError {
    let err = js_sys::Error::from(err.clone());
    if String::from(err.name()) == "QuotaExceededError" {
        StoreError::QuotaExceeded { key: key.to_owned(), bytes }
    } else {
        StoreError::Backend(err.message().into())
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).map_err(|e| backend_error(&e, key, 0))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StoreError::Unavailable)
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| backend_error(&e, key, key.len() + value.len()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StoreError::Unavailable)
        }
    }
}
