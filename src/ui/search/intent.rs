use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SearchIntent {
    /// Start routing keystrokes to the bar.
    Focus,
    /// Stop editing, keep the text.
    Submit,
    /// Stop editing and clear the text.
    Cancel,
    Insert(char),
    Backspace,
}

impl Intent for SearchIntent {}
