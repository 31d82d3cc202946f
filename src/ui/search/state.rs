use crate::ui::mvi::UiState;

/// Search bar contents. `editing` is true while keystrokes go to the bar.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchBarState {
    pub text: String,
    pub editing: bool,
}

impl UiState for SearchBarState {}

impl SearchBarState {
    pub fn is_active(&self) -> bool {
        self.editing || !self.text.is_empty()
    }
}
