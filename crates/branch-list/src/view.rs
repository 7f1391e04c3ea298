//! Derived Views
//!
//! Read-only projections of the list for rendering.

use crate::model::{Branch, BranchList, FilterMode};

/// Branches visible under `mode`, in list order
pub fn filter_view(list: &BranchList, mode: FilterMode) -> Vec<Branch> {
    list.iter().filter(|b| mode.matches(b)).cloned().collect()
}

/// Running totals shown next to the filter buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counts {
    pub total: usize,
    pub done: usize,
}

impl std::fmt::Display for Counts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} total • {} done", self.total, self.done)
    }
}

pub fn counts(list: &BranchList) -> Counts {
    Counts {
        total: list.len(),
        done: list.iter().filter(|b| b.done).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BranchId;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn make_branch(id: u64, done: bool) -> Branch {
        Branch {
            id: BranchId(id),
            name: format!("branch-{}", id),
            done,
        }
    }

    #[test]
    fn test_filter_view_preserves_order() {
        let list = BranchList::from(vec![
            make_branch(3, false),
            make_branch(1, true),
            make_branch(2, false),
            make_branch(4, true),
        ]);

        let ids = |mode| -> Vec<u64> { filter_view(&list, mode).iter().map(|b| b.id.0).collect() };
        assert_eq!(ids(FilterMode::All), [3, 1, 2, 4]);
        assert_eq!(ids(FilterMode::Active), [3, 2]);
        assert_eq!(ids(FilterMode::Done), [1, 4]);
    }

    #[test]
    fn test_filter_view_empty_list() {
        for mode in FilterMode::ALL {
            assert!(filter_view(&BranchList::new(), mode).is_empty());
        }
    }

    #[test]
    fn test_counts_display() {
        let list = BranchList::from(vec![make_branch(1, true), make_branch(2, false)]);
        let c = counts(&list);
        assert_eq!(c, Counts { total: 2, done: 1 });
        assert_eq!(c.to_string(), "2 total • 1 done");
        assert_eq!(counts(&BranchList::new()).to_string(), "0 total • 0 done");
    }

    proptest! {
        #[test]
        fn prop_active_and_done_partition_all(flags in prop::collection::vec(any::<bool>(), 0..40)) {
            let list: BranchList = flags
                .iter()
                .enumerate()
                .map(|(i, done)| make_branch(i as u64, *done))
                .collect();

            let ids = |mode| -> HashSet<BranchId> {
                filter_view(&list, mode).iter().map(|b| b.id).collect()
            };
            let all = ids(FilterMode::All);
            let active = ids(FilterMode::Active);
            let done = ids(FilterMode::Done);

            prop_assert_eq!(active.union(&done).cloned().collect::<HashSet<_>>(), all);
            prop_assert!(active.is_disjoint(&done));
            prop_assert_eq!(done.len(), counts(&list).done);
        }
    }
}
