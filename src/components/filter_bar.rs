//! Filter Bar Component
//!
//! All / Active / Done selector and running counts.

use leptos::prelude::*;
use branch_list::{counts, FilterMode};

use crate::context::use_branch_actions;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_app_store();
    let actions = use_branch_actions();

    let summary = move || store.branches().with(|list| counts(list).to_string());

    view! {
        <section class="filter-bar">
            <div class="filter-buttons">
                {FilterMode::ALL.into_iter().map(|mode| {
                    let is_active = move || store.filter().get() == mode;
                    view! {
                        <button
                            class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                            data-filter=mode.as_str()
                            on:click=move |_| actions.set_filter(mode)
                        >
                            {mode.label()}
                        </button>
                    }
                }).collect_view()}
            </div>

            <div class="branch-count">{summary}</div>
        </section>
    }
}
