//! Ordered, deduplicated view of the items that pass the filter.

use std::collections::HashSet;

use crate::list::filter::matches;
use crate::model::{Item, ItemId, Period};

/// The list has exactly one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionId {
    #[default]
    Rows,
}

/// Identities to render, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    section: SectionId,
    scope: Option<Period>,
    ids: Vec<ItemId>,
}

impl Snapshot {
    pub fn section(&self) -> SectionId {
        self.section
    }

    /// Scope the snapshot was built under. `None` for the initial empty one.
    pub fn scope(&self) -> Option<Period> {
        self.scope
    }

    pub fn ids(&self) -> &[ItemId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<ItemId> {
        self.ids.get(index).copied()
    }

    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.ids.iter().position(|existing| *existing == id)
    }
}

/// Filter `items` by `query`, keeping source order and the first occurrence
/// of each identity.
///
/// Scope filtering belongs to the model, which fetches per period; `scope`
/// is only recorded on the result.
pub fn build(items: &[Item], query: &str, scope: Period) -> Snapshot {
    let mut seen = HashSet::with_capacity(items.len());
    let ids = items
        .iter()
        .filter(|item| matches(item, query))
        .filter(|item| seen.insert(item.id))
        .map(|item| item.id)
        .collect();

    Snapshot {
        section: SectionId::Rows,
        scope: Some(scope),
        ids,
    }
}
