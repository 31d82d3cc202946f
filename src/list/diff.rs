//! Insert/remove/move changes between two snapshots.
//!
//! Indices follow batch-update conventions: removals and move sources refer
//! to the old snapshot, insertions and move targets to the new one. Items
//! that keep their relative order (the longest increasing run of new
//! positions) are left in place, so the number of moves is minimal.

use std::collections::HashMap;

use crate::list::snapshot::{SectionId, Snapshot};
use crate::model::ItemId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indexed {
    pub index: usize,
    pub id: ItemId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub id: ItemId,
    pub from: usize,
    pub to: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Diff {
    section: SectionId,
    removed: Vec<Indexed>,
    inserted: Vec<Indexed>,
    moved: Vec<Move>,
}

impl Diff {
    /// Compute the changes that turn `old` into `new`.
    pub fn between(old: &Snapshot, new: &Snapshot) -> Self {
        let old_positions = positions(old.ids());
        let new_positions = positions(new.ids());

        let removed = old
            .ids()
            .iter()
            .enumerate()
            .filter(|(_, id)| !new_positions.contains_key(*id))
            .map(|(index, id)| Indexed { index, id: *id })
            .collect();

        let inserted = new
            .ids()
            .iter()
            .enumerate()
            .filter(|(_, id)| !old_positions.contains_key(*id))
            .map(|(index, id)| Indexed { index, id: *id })
            .collect();

        // Surviving ids in old order, paired with where they end up.
        let survivors: Vec<Move> = old
            .ids()
            .iter()
            .enumerate()
            .filter_map(|(from, id)| {
                new_positions
                    .get(id)
                    .map(|&to| Move { id: *id, from, to })
            })
            .collect();
        let targets: Vec<usize> = survivors.iter().map(|m| m.to).collect();
        let stable = increasing_run(&targets);

        let mut moved: Vec<Move> = survivors
            .into_iter()
            .zip(stable)
            .filter(|(_, keep)| !keep)
            .map(|(m, _)| m)
            .collect();
        moved.sort_by_key(|m| m.to);

        Self {
            section: new.section(),
            removed,
            inserted,
            moved,
        }
    }

    pub fn section(&self) -> SectionId {
        self.section
    }

    pub fn removed(&self) -> &[Indexed] {
        &self.removed
    }

    pub fn inserted(&self) -> &[Indexed] {
        &self.inserted
    }

    pub fn moved(&self) -> &[Move] {
        &self.moved
    }

    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.inserted.is_empty() && self.moved.is_empty()
    }

    pub fn change_count(&self) -> usize {
        self.removed.len() + self.inserted.len() + self.moved.len()
    }

    /// Apply to rows currently laid out as the old snapshot.
    ///
    /// Deletes (removals and move sources) run from the highest old index
    /// down, then inserts (insertions and move targets) run from the lowest
    /// new index up.
    pub fn apply_to(&self, rows: &mut Vec<ItemId>) {
        let mut deletes: Vec<usize> = self
            .removed
            .iter()
            .map(|r| r.index)
            .chain(self.moved.iter().map(|m| m.from))
            .collect();
        deletes.sort_unstable_by(|a, b| b.cmp(a));
        for index in deletes {
            if index < rows.len() {
                rows.remove(index);
            }
        }

        let mut inserts: Vec<Indexed> = self
            .inserted
            .iter()
            .copied()
            .chain(self.moved.iter().map(|m| Indexed {
                index: m.to,
                id: m.id,
            }))
            .collect();
        inserts.sort_by_key(|i| i.index);
        for insert in inserts {
            let index = insert.index.min(rows.len());
            rows.insert(index, insert.id);
        }
    }
}

fn positions(ids: &[ItemId]) -> HashMap<ItemId, usize> {
    ids.iter()
        .enumerate()
        .map(|(index, id)| (*id, index))
        .collect()
}

/// Marks one longest strictly increasing subsequence of `seq`.
fn increasing_run(seq: &[usize]) -> Vec<bool> {
    let mut tails: Vec<usize> = Vec::new();
    let mut previous: Vec<Option<usize>> = vec![None; seq.len()];

    for (i, &value) in seq.iter().enumerate() {
        let slot = tails.partition_point(|&t| seq[t] < value);
        if slot > 0 {
            previous[i] = Some(tails[slot - 1]);
        }
        if slot == tails.len() {
            tails.push(i);
        } else {
            tails[slot] = i;
        }
    }

    let mut keep = vec![false; seq.len()];
    let mut cursor = tails.last().copied();
    while let Some(i) = cursor {
        keep[i] = true;
        cursor = previous[i];
    }
    keep
}
