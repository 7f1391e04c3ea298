//! Branch List View Component
//!
//! Rows for the branches visible under the current filter.

use leptos::prelude::*;
use branch_list::filter_view;

use crate::components::BranchRow;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn BranchListView() -> impl IntoView {
    let store = use_app_store();

    let visible = Memo::new(move |_| {
        let mode = store.filter().get();
        store.branches().with(|list| filter_view(list, mode))
    });

    view! {
        <ul class="branch-list">
            <Show when=move || visible.with(|v| v.is_empty())>
                <li class="empty-state">"No branches to show"</li>
            </Show>

            <For
                each=move || visible.get()
                key=|branch| branch.id
                children=move |branch| view! { <BranchRow id=branch.id /> }
            />
        </ul>
    }
}
