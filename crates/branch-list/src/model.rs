//! Branch Models
//!
//! Data structures persisted to the key-value store.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Branch identifier: creation time in milliseconds since the Unix epoch.
///
/// Only used to target edits, toggles and removals, never for ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BranchId(pub u64);

impl fmt::Display for BranchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single branch entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub id: BranchId,
    pub name: String,
    pub done: bool,
}

impl Branch {
    pub fn new(id: BranchId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            done: false,
        }
    }
}

/// Ordered branches; insertion order is display order.
///
/// Serialized as a bare array so the stored blob is `[{"id":..,"name":..,"done":..}]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BranchList(Vec<Branch>);

impl BranchList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Branch> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Branch] {
        &self.0
    }

    /// First branch with the given id
    pub fn get(&self, id: BranchId) -> Option<&Branch> {
        self.0.iter().find(|b| b.id == id)
    }

    pub fn max_id(&self) -> Option<BranchId> {
        self.0.iter().map(|b| b.id).max()
    }

    pub fn into_vec(self) -> Vec<Branch> {
        self.0
    }
}

impl From<Vec<Branch>> for BranchList {
    fn from(branches: Vec<Branch>) -> Self {
        Self(branches)
    }
}

impl FromIterator<Branch> for BranchList {
    fn from_iter<I: IntoIterator<Item = Branch>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a BranchList {
    type Item = &'a Branch;
    type IntoIter = std::slice::Iter<'a, Branch>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for BranchList {
    type Item = Branch;
    type IntoIter = std::vec::IntoIter<Branch>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Display-only projection selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterMode {
    #[default]
    All,
    Active,
    Done,
}

impl FilterMode {
    /// Button order in the filter bar
    pub const ALL: [FilterMode; 3] = [FilterMode::All, FilterMode::Active, FilterMode::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Active => "active",
            FilterMode::Done => "done",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Active => "Active",
            FilterMode::Done => "Done",
        }
    }

    pub fn matches(&self, branch: &Branch) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Active => !branch.done,
            FilterMode::Done => branch.done,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_list_json_shape() {
        let list = BranchList::from(vec![Branch {
            id: BranchId(1700000000000),
            name: "feature/auth".to_string(),
            done: true,
        }]);

        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"[{"id":1700000000000,"name":"feature/auth","done":true}]"#);
    }

    #[test]
    fn test_branch_list_parses_stored_blob() {
        let json = r#"[{"id":1,"name":"main","done":false},{"id":2,"name":"dev","done":true}]"#;
        let list: BranchList = serde_json::from_str(json).unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list.get(BranchId(2)).map(|b| b.name.as_str()), Some("dev"));
        assert_eq!(list.max_id(), Some(BranchId(2)));
    }

    #[test]
    fn test_filter_mode_matches() {
        let open = Branch::new(BranchId(1), "open");
        let closed = Branch { done: true, ..Branch::new(BranchId(2), "closed") };

        assert!(FilterMode::All.matches(&open) && FilterMode::All.matches(&closed));
        assert!(FilterMode::Active.matches(&open));
        assert!(!FilterMode::Active.matches(&closed));
        assert!(FilterMode::Done.matches(&closed));
        assert!(!FilterMode::Done.matches(&open));
    }

    #[test]
    fn test_filter_mode_labels() {
        let labels: Vec<_> = FilterMode::ALL.iter().map(|m| m.label()).collect();
        assert_eq!(labels, ["All", "Active", "Done"]);
        assert_eq!(FilterMode::default(), FilterMode::All);
        assert_eq!(FilterMode::Done.as_str(), "done");
    }
}
