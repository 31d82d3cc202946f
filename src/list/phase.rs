//! Synchronizer phase (MVI state + reducer).

use crate::list::sync::SyncTrigger;
use crate::ui::mvi::{Intent, Reducer, UiState};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SyncPhase {
    #[default]
    Idle,
    /// A pass is running for `trigger`.
    Recomputing { trigger: SyncTrigger },
    /// The last pass applied its snapshot but the model reported an error.
    Error { message: String },
}

impl UiState for SyncPhase {}

impl SyncPhase {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message } => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum PhaseIntent {
    Begin { trigger: SyncTrigger },
    /// Snapshot built and applied; `error` is the model's error at read time.
    Finished { error: Option<String> },
}

impl Intent for PhaseIntent {}

pub struct PhaseReducer;

impl Reducer for PhaseReducer {
    type State = SyncPhase;
    type Intent = PhaseIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PhaseIntent::Begin { trigger } => SyncPhase::Recomputing { trigger },
            PhaseIntent::Finished { error } => match state {
                SyncPhase::Recomputing { .. } => match error {
                    Some(message) => SyncPhase::Error { message },
                    None => SyncPhase::Idle,
                },
                other => other,
            },
        }
    }
}
