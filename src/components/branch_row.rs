//! Branch Row Component
//!
//! Checkbox, editable name and remove button for one branch.

use leptos::prelude::*;
use branch_list::BranchId;

use crate::context::use_branch_actions;
use crate::store::{use_app_store, AppStateStoreFields};

/// A single branch row.
///
/// Looks the branch up by id on every change so the name input keeps focus
/// while the user types.
#[component]
pub fn BranchRow(id: BranchId) -> impl IntoView {
    let store = use_app_store();
    let actions = use_branch_actions();

    let branch = Memo::new(move |_| store.branches().with(|list| list.get(id).cloned()));
    let done = move || branch.with(|b| b.as_ref().is_some_and(|b| b.done));
    let name = move || branch.with(|b| b.as_ref().map(|b| b.name.clone()).unwrap_or_default());

    view! {
        <li class="branch-row">
            <input
                type="checkbox"
                prop:checked=done
                on:change=move |_| actions.toggle_done(id)
            />

            <input
                type="text"
                class=move || if done() { "branch-name done" } else { "branch-name" }
                prop:value=name
                on:input=move |ev| actions.edit_name(id, event_target_value(&ev))
            />

            <button class="remove-btn" on:click=move |_| actions.remove(id)>"Remove"</button>
        </li>
    }
}
