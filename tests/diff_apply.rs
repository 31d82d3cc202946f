//! Property tests for snapshot diffs.

use proptest::prelude::*;
use repo_viewer::list::{build, Diff, Snapshot};
use repo_viewer::model::{Item, ItemId, Period};
use std::collections::HashSet;

fn snapshot(ids: &[u64]) -> Snapshot {
    let items: Vec<Item> = ids.iter().map(|id| Item::new(*id, format!("repo-{id}"))).collect();
    build(&items, "", Period::Day)
}

/// Distinct ids drawn from `0..universe`, in random order.
fn shuffled_ids(universe: u64) -> impl Strategy<Value = Vec<u64>> {
    let all: Vec<u64> = (0..universe).collect();
    prop::sample::subsequence(all, 0..=universe as usize).prop_shuffle()
}

fn longest_increasing(seq: &[usize]) -> usize {
    let mut best = vec![1usize; seq.len()];
    for i in 0..seq.len() {
        for j in 0..i {
            if seq[j] < seq[i] {
                best[i] = best[i].max(best[j] + 1);
            }
        }
    }
    best.into_iter().max().unwrap_or(0)
}

proptest! {
    /// Applying the diff to the old rows yields exactly the new rows.
    #[test]
    fn prop_apply_reproduces_new_snapshot(old in shuffled_ids(12), new in shuffled_ids(12)) {
        let (old, new) = (snapshot(&old), snapshot(&new));
        let diff = Diff::between(&old, &new);

        let mut rows = old.ids().to_vec();
        diff.apply_to(&mut rows);
        prop_assert_eq!(rows.as_slice(), new.ids());
    }

    /// Raw collections may repeat ids; the deduplicated snapshots still diff
    /// and apply cleanly.
    #[test]
    fn prop_apply_with_duplicate_sources(
        old in prop::collection::vec(0u64..8, 0..16),
        new in prop::collection::vec(0u64..8, 0..16),
    ) {
        let (old, new) = (snapshot(&old), snapshot(&new));
        let mut rows = old.ids().to_vec();
        Diff::between(&old, &new).apply_to(&mut rows);
        prop_assert_eq!(rows.as_slice(), new.ids());
    }

    /// Survivors outside one longest increasing run are the only moves.
    #[test]
    fn prop_move_count_is_minimal(old in shuffled_ids(10), new in shuffled_ids(10)) {
        let (old, new) = (snapshot(&old), snapshot(&new));
        let diff = Diff::between(&old, &new);

        let targets: Vec<usize> = old
            .ids()
            .iter()
            .filter_map(|id| new.position(*id))
            .collect();
        prop_assert_eq!(diff.moved().len(), targets.len() - longest_increasing(&targets));
    }

    /// Removals and insertions are the set differences, with indices into
    /// the old and new snapshot respectively.
    #[test]
    fn prop_removals_and_insertions_are_set_differences(
        old in shuffled_ids(15),
        new in shuffled_ids(15),
    ) {
        let (old, new) = (snapshot(&old), snapshot(&new));
        let diff = Diff::between(&old, &new);

        let old_set: HashSet<ItemId> = old.ids().iter().copied().collect();
        let new_set: HashSet<ItemId> = new.ids().iter().copied().collect();

        let removed: HashSet<ItemId> = diff.removed().iter().map(|r| r.id).collect();
        let inserted: HashSet<ItemId> = diff.inserted().iter().map(|i| i.id).collect();
        prop_assert_eq!(removed, &old_set - &new_set);
        prop_assert_eq!(inserted, &new_set - &old_set);

        for entry in diff.removed() {
            prop_assert_eq!(old.get(entry.index), Some(entry.id));
        }
        for entry in diff.inserted() {
            prop_assert_eq!(new.get(entry.index), Some(entry.id));
        }
    }
}

#[test]
fn identical_snapshots_produce_no_changes() {
    let ids = [5, 3, 9, 1];
    let diff = Diff::between(&snapshot(&ids), &snapshot(&ids));
    assert!(diff.is_empty());
    assert_eq!(diff.change_count(), 0);
}

#[test]
fn first_load_inserts_everything() {
    let empty = snapshot(&[]);
    let full = snapshot(&[4, 2, 8]);
    let diff = Diff::between(&empty, &full);
    let inserted: Vec<(usize, u64)> = diff.inserted().iter().map(|i| (i.index, i.id.0)).collect();
    assert_eq!(inserted, vec![(0, 4), (1, 2), (2, 8)]);
    assert!(diff.removed().is_empty());
    assert!(diff.moved().is_empty());
}

#[test]
fn reversal_keeps_one_row_in_place() {
    let old = snapshot(&[1, 2, 3, 4, 5]);
    let new = snapshot(&[5, 4, 3, 2, 1]);
    let diff = Diff::between(&old, &new);
    assert_eq!(diff.moved().len(), 4);

    let mut rows = old.ids().to_vec();
    diff.apply_to(&mut rows);
    assert_eq!(rows, new.ids());
}
