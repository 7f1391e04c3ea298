//! List Store
//!
//! Loads and saves the full branch list under a fixed key.

use super::traits::{KeyValueStore, StorageError, StorageResult};
use crate::model::BranchList;

/// Key of the single persisted entry
pub const STORAGE_KEY: &str = "branches-todo-v1";

/// Branch list persistence over any key-value store
#[derive(Debug, Clone)]
pub struct ListStore<S> {
    backend: S,
}

impl<S: KeyValueStore> ListStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Read and parse the stored list without absorbing failures.
    ///
    /// `Ok(None)` means nothing has been stored yet.
    pub fn try_load(&self) -> StorageResult<Option<BranchList>> {
        let Some(raw) = self.backend.get_item(STORAGE_KEY)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StorageError::Read(e.to_string()))
    }

    /// Stored list, or an empty one if the entry is missing or unreadable
    pub fn load(&self) -> BranchList {
        match self.try_load() {
            Ok(Some(list)) => {
                log::info!("[STORE] Loaded {} branches", list.len());
                list
            }
            Ok(None) => {
                log::debug!("[STORE] No saved branches, starting empty");
                BranchList::new()
            }
            Err(e) => {
                log::warn!("[STORE] Discarding saved branches: {}", e);
                BranchList::new()
            }
        }
    }

    /// Overwrite the stored entry with the full list
    pub fn save(&self, list: &BranchList) -> StorageResult<()> {
        let json = serde_json::to_string(list).map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.backend.set_item(STORAGE_KEY, &json)?;
        log::debug!("[STORE] Saved {} branches", list.len());
        Ok(())
    }
}
