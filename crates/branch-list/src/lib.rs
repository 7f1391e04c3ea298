//! Branch List Core
//!
//! Layered like the frontend expects it:
//! - model: Branch, BranchList and FilterMode
//! - ops: pure list transformations driven by UI events
//! - view: filtered projections and counts
//! - storage: key-value persistence of the whole list

mod model;
mod ops;
mod view;
pub mod storage;

pub use model::{Branch, BranchId, BranchList, FilterMode};
pub use ops::{add, edit_name, next_id, remove, toggle_done};
pub use view::{counts, filter_view, Counts};
pub use storage::{KeyValueStore, ListStore, MemoryStore, StorageError, StorageResult, STORAGE_KEY};
