use crate::model::{Item, ItemId};
use crate::ui::mvi::UiState;

/// What the detail pane shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailPaneState {
    #[default]
    Empty,
    Showing {
        item: Item,
        favourite: bool,
    },
    /// The selected row's repository vanished before it could be opened.
    Stale {
        id: ItemId,
    },
}

impl UiState for DetailPaneState {}

impl DetailPaneState {
    pub fn item(&self) -> Option<&Item> {
        match self {
            Self::Showing { item, .. } => Some(item),
            _ => None,
        }
    }
}
