//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use branch_list::{BranchList, FilterMode};

/// Widget state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All branches, in insertion order
    pub branches: BranchList,
    /// Which subset of branches is shown
    pub filter: FilterMode,
    /// Contents of the new-branch input
    pub draft: String,
}

impl AppState {
    pub fn new(branches: BranchList) -> Self {
        Self {
            branches,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
