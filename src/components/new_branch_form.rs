//! New Branch Form Component
//!
//! Text input plus "Add" button; Enter also adds.

use leptos::prelude::*;

use crate::context::use_branch_actions;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn NewBranchForm() -> impl IntoView {
    let store = use_app_store();
    let actions = use_branch_actions();

    view! {
        <section class="new-branch-form">
            <input
                type="text"
                placeholder="Enter branch name (e.g. feature/auth)"
                prop:value=move || store.draft().get()
                on:input=move |ev| actions.set_draft(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        actions.add_draft();
                    }
                }
            />
            <button class="add-btn" on:click=move |_| actions.add_draft()>"Add"</button>
        </section>
    }
}
