//! Maps a selected row back to the model's current item.

use thiserror::Error;

use crate::list::snapshot::Snapshot;
use crate::model::{Item, ItemId, RepoModel};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The row's repository left the model after the row was rendered.
    #[error("Repository {id} is no longer available")]
    Stale { id: ItemId },
}

/// Resolve row `index` of `snapshot` to the model's current item.
///
/// The lookup goes by identity, not position, because the model may have
/// changed since the row was drawn.
///
/// # Panics
/// When `index` is outside the snapshot. The surface only reports rows it
/// displays, so this means the surface and the synchronizer disagree.
pub fn resolve(
    index: usize,
    snapshot: &Snapshot,
    model: &dyn RepoModel,
) -> Result<Item, SelectionError> {
    assert!(
        index < snapshot.len(),
        "selected row {} outside snapshot of {} rows",
        index,
        snapshot.len()
    );
    let id = snapshot.ids()[index];
    model
        .items()
        .iter()
        .find(|item| item.id == id)
        .cloned()
        .ok_or(SelectionError::Stale { id })
}
