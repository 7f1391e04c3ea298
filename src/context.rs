//! Branch Actions
//!
//! UI event handlers shared via Leptos Context API. Each action applies a pure
//! list operation, writes the result back to the store and saves the whole
//! list.

use leptos::prelude::*;
use branch_list::{self as ops, BranchId, BranchList, FilterMode, KeyValueStore, ListStore};

use crate::store::{AppStore, AppStateStoreFields};

/// List store over whichever key-value backend the app was started with
pub type SharedListStore = ListStore<Box<dyn KeyValueStore>>;

/// Milliseconds since the Unix epoch
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// Mutation handle provided via context
#[derive(Clone, Copy)]
pub struct BranchActions {
    store: AppStore,
    list_store: StoredValue<SharedListStore, LocalStorage>,
    /// Clock used for new branch ids
    clock: fn() -> u64,
}

impl BranchActions {
    pub fn new(store: AppStore, list_store: SharedListStore) -> Self {
        Self::with_clock(store, list_store, now_ms)
    }

    pub fn with_clock(store: AppStore, list_store: SharedListStore, clock: fn() -> u64) -> Self {
        Self {
            store,
            list_store: StoredValue::new_local(list_store),
            clock,
        }
    }

    /// Overwrite the saved list with the current one.
    ///
    /// A failed write is logged; the session carries on from memory.
    pub fn persist(&self) {
        let result = self
            .store
            .branches()
            .with_untracked(|list| self.list_store.with_value(|s| s.save(list)));
        if let Err(e) = result {
            log::warn!("[APP] Failed to save branches: {}", e);
        }
    }

    fn apply(&self, op: impl FnOnce(&BranchList) -> BranchList) {
        let next = self.store.branches().with_untracked(op);
        self.store.branches().set(next);
        self.persist();
    }

    /// Keep the input box in sync with what the user typed
    pub fn set_draft(&self, text: String) {
        self.store.draft().set(text);
    }

    /// Add the drafted name as a new branch and clear the input.
    ///
    /// Blank drafts are ignored and left in the input.
    pub fn add_draft(&self) {
        let draft = self.store.draft().get_untracked();
        if draft.trim().is_empty() {
            return;
        }
        let now = (self.clock)();
        self.apply(|list| {
            let id = ops::next_id(list, now);
            log::debug!("[APP] Adding branch {} as #{}", draft.trim(), id);
            ops::add(list, &draft, id)
        });
        self.store.draft().set(String::new());
    }

    pub fn toggle_done(&self, id: BranchId) {
        log::debug!("[APP] Toggling branch #{}", id);
        self.apply(|list| ops::toggle_done(list, id));
    }

    pub fn remove(&self, id: BranchId) {
        log::debug!("[APP] Removing branch #{}", id);
        self.apply(|list| ops::remove(list, id));
    }

    pub fn edit_name(&self, id: BranchId, name: String) {
        self.apply(|list| ops::edit_name(list, id, &name));
    }

    pub fn set_filter(&self, mode: FilterMode) {
        self.store.filter().set(mode);
    }
}

/// Get the branch actions from context
pub fn use_branch_actions() -> BranchActions {
    use_context::<BranchActions>().expect("BranchActions should be provided")
}
