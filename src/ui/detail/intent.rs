use crate::model::{Item, ItemId};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DetailIntent {
    Show { item: Item, favourite: bool },
    Stale { id: ItemId },
    /// Favourite flag changed for `id`; ignored unless it is the shown item.
    FavouriteChanged { id: ItemId, favourite: bool },
    Clear,
}

impl Intent for DetailIntent {}
