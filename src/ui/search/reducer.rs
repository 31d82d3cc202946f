use crate::ui::mvi::Reducer;
use crate::ui::search::intent::SearchIntent;
use crate::ui::search::state::SearchBarState;

pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchBarState;
    type Intent = SearchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SearchIntent::Focus => SearchBarState {
                editing: true,
                ..state
            },
            SearchIntent::Submit => SearchBarState {
                editing: false,
                ..state
            },
            SearchIntent::Cancel => SearchBarState::default(),
            SearchIntent::Insert(ch) => {
                if !state.editing || ch.is_control() {
                    return state;
                }
                let mut text = state.text;
                text.push(ch);
                SearchBarState {
                    text,
                    editing: true,
                }
            }
            SearchIntent::Backspace => {
                if !state.editing {
                    return state;
                }
                let mut text = state.text;
                text.pop();
                SearchBarState {
                    text,
                    editing: true,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editing(text: &str) -> SearchBarState {
        SearchBarState {
            text: text.to_string(),
            editing: true,
        }
    }

    #[test]
    fn typing_requires_focus() {
        let state = SearchReducer::reduce(SearchBarState::default(), SearchIntent::Insert('a'));
        assert_eq!(state, SearchBarState::default());
    }

    #[test]
    fn backspace_pops_a_char_not_a_byte() {
        let state = SearchReducer::reduce(editing("née"), SearchIntent::Backspace);
        assert_eq!(state.text, "né");
    }

    #[test]
    fn control_chars_are_ignored() {
        let state = SearchReducer::reduce(editing("a"), SearchIntent::Insert('\n'));
        assert_eq!(state.text, "a");
    }
}
