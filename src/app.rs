//! Branches TODO App
//!
//! Root component: loads the saved list and provides state and actions via
//! context. Every action saves the list back to localStorage.

use leptos::prelude::*;
use reactive_stores::Store;
use branch_list::{KeyValueStore, ListStore};

use crate::components::{BranchListView, FilterBar, NewBranchForm};
use crate::context::BranchActions;
use crate::storage::BrowserStorage;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let backend: Box<dyn KeyValueStore> = Box::new(BrowserStorage::new());
    let list_store = ListStore::new(backend);

    // State
    let store = Store::new(AppState::new(list_store.load()));
    let actions = BranchActions::new(store, list_store);

    // Rewrite once at mount so an unreadable entry is replaced
    actions.persist();

    // Provide context to all children
    provide_context(store);
    provide_context(actions);

    view! {
        <div class="app-layout">
            <div class="card">
                <header class="card-header">
                    <h1>"Branches TODO"</h1>
                    <p class="subtitle">"Add branch names and manage them (save in localStorage)"</p>
                </header>

                <NewBranchForm />

                <FilterBar />

                <BranchListView />

                <footer class="tip">
                    "Tip: press Enter to add. Branch names are stored locally in your browser."
                </footer>
            </div>
        </div>
    }
}
