//! Browser Storage
//!
//! `KeyValueStore` backed by `window.localStorage`.

use branch_list::{KeyValueStore, StorageError, StorageResult};
use wasm_bindgen::JsValue;

/// localStorage handle; `None` when the browser exposes no storage
pub struct BrowserStorage {
    storage: Option<web_sys::Storage>,
}

impl BrowserStorage {
    pub fn new() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if storage.is_none() {
            log::warn!("[STORE] localStorage unavailable, branches will not persist");
        }
        Self { storage }
    }
}

impl Default for BrowserStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        let Some(storage) = &self.storage else {
            return Ok(None);
        };
        storage.get_item(key).map_err(|e| StorageError::Read(js_error(&e)))
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
        storage.set_item(key, value).map_err(|e| StorageError::Write(js_error(&e)))
    }
}

fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
