use crate::ui::detail::intent::DetailIntent;
use crate::ui::detail::state::DetailPaneState;
use crate::ui::mvi::Reducer;

pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = DetailPaneState;
    type Intent = DetailIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailIntent::Show { item, favourite } => DetailPaneState::Showing { item, favourite },
            DetailIntent::Stale { id } => DetailPaneState::Stale { id },
            DetailIntent::FavouriteChanged { id, favourite } => match state {
                DetailPaneState::Showing { item, .. } if item.id == id => {
                    DetailPaneState::Showing { item, favourite }
                }
                other => other,
            },
            DetailIntent::Clear => DetailPaneState::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Item, ItemId};

    #[test]
    fn favourite_change_only_touches_shown_item() {
        let shown = DetailPaneState::Showing {
            item: Item::new(1, "a/b"),
            favourite: false,
        };
        let other = DetailReducer::reduce(
            shown.clone(),
            DetailIntent::FavouriteChanged {
                id: ItemId(2),
                favourite: true,
            },
        );
        assert_eq!(other, shown);

        let same = DetailReducer::reduce(
            shown,
            DetailIntent::FavouriteChanged {
                id: ItemId(1),
                favourite: true,
            },
        );
        assert!(matches!(same, DetailPaneState::Showing { favourite: true, .. }));
    }

    #[test]
    fn stale_replaces_whatever_was_shown() {
        let state = DetailReducer::reduce(
            DetailPaneState::Empty,
            DetailIntent::Stale { id: ItemId(9) },
        );
        assert_eq!(state, DetailPaneState::Stale { id: ItemId(9) });
        assert_eq!(state.item(), None);
    }
}
