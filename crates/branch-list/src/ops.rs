//! List Mutations
//!
//! Every operation takes the current list and returns a new one.
//! Unknown ids are silently ignored.

use crate::model::{Branch, BranchId, BranchList};

/// Append a new branch with the trimmed name.
///
/// A name that trims to empty leaves the list unchanged.
pub fn add(list: &BranchList, name: &str, id: BranchId) -> BranchList {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return list.clone();
    }
    list.iter()
        .cloned()
        .chain(std::iter::once(Branch::new(id, trimmed)))
        .collect()
}

/// Flip `done` on the first branch with the given id
pub fn toggle_done(list: &BranchList, id: BranchId) -> BranchList {
    update_first(list, id, |b| Branch { done: !b.done, ..b.clone() })
}

/// Drop the branch with the given id
pub fn remove(list: &BranchList, id: BranchId) -> BranchList {
    list.iter().filter(|b| b.id != id).cloned().collect()
}

/// Replace the name verbatim; empty and untrimmed names are kept as typed.
pub fn edit_name(list: &BranchList, id: BranchId, new_name: &str) -> BranchList {
    update_first(list, id, |b| Branch { name: new_name.to_string(), ..b.clone() })
}

/// Id for a branch created at `now_ms`.
///
/// Falls back to one past the largest existing id when `now_ms` is already taken
/// (two additions within the same millisecond, or a clock that went backwards).
/// If the largest id is `u64::MAX`, the lowest id nobody holds is used instead.
pub fn next_id(list: &BranchList, now_ms: u64) -> BranchId {
    match list.max_id() {
        Some(max) if max.0 >= now_ms => max
            .0
            .checked_add(1)
            .map(BranchId)
            .unwrap_or_else(|| lowest_free_id(list)),
        _ => BranchId(now_ms),
    }
}

fn lowest_free_id(list: &BranchList) -> BranchId {
    (0..=u64::MAX)
        .map(BranchId)
        .find(|id| list.get(*id).is_none())
        .unwrap_or(BranchId(0))
}

fn update_first(list: &BranchList, id: BranchId, f: impl FnOnce(&Branch) -> Branch) -> BranchList {
    let mut branches = list.clone().into_vec();
    if let Some(branch) = branches.iter_mut().find(|b| b.id == id) {
        *branch = f(branch);
    }
    branches.into()
}
