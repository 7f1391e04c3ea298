//! Storage Layer
//!
//! Persists the whole branch list as one serialized value in a key-value store.
//! Implementations can use browser localStorage, in-memory maps, etc.

mod traits;
mod memory;
mod list_store;

pub use traits::{KeyValueStore, StorageError, StorageResult};
pub use memory::MemoryStore;
pub use list_store::{ListStore, STORAGE_KEY};
