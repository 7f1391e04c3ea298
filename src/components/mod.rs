//! UI Components
//!
//! Leptos components making up the branch list widget.

mod new_branch_form;
mod filter_bar;
mod branch_row;
mod branch_list_view;

pub use new_branch_form::NewBranchForm;
pub use filter_bar::FilterBar;
pub use branch_row::BranchRow;
pub use branch_list_view::BranchListView;
