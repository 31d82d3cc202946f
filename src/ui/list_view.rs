//! Row state of the master list; the synchronizer's rendering surface.

use crate::list::{Diff, RenderSurface, SectionId};
use crate::model::ItemId;

/// Rows as identities plus the selection and the error label.
///
/// Only ever changed through diffs. The selection follows its identity
/// across a diff; if that row is gone the selection stays at the same
/// position, clamped to the new length.
#[derive(Debug, Default)]
pub struct ListView {
    rows: Vec<ItemId>,
    selected: Option<usize>,
    error: Option<String>,
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[ItemId] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_id(&self) -> Option<ItemId> {
        self.selected.and_then(|index| self.rows.get(index).copied())
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn move_selection(&mut self, delta: isize) {
        if self.rows.is_empty() {
            self.selected = None;
            return;
        }
        let last = self.rows.len() - 1;
        let next = match self.selected {
            None => 0,
            Some(current) => current.saturating_add_signed(delta).min(last),
        };
        self.selected = Some(next);
    }

    pub fn select_first(&mut self) {
        self.selected = if self.rows.is_empty() { None } else { Some(0) };
    }

    pub fn select_last(&mut self) {
        self.selected = self.rows.len().checked_sub(1);
    }
}

impl RenderSurface for ListView {
    fn apply(&mut self, _section: SectionId, diff: &Diff) {
        let anchor = self.selected_id();
        diff.apply_to(&mut self.rows);

        self.selected = match anchor.and_then(|id| self.rows.iter().position(|row| *row == id)) {
            Some(index) => Some(index),
            None if self.rows.is_empty() => None,
            None => Some(self.selected.unwrap_or(0).min(self.rows.len() - 1)),
        };
    }

    fn show_error(&mut self, message: Option<&str>) {
        self.error = message.map(str::to_string);
    }
}
