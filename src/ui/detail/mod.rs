//! Detail pane (MVI + rendering).

mod intent;
mod pane;
mod reducer;
mod state;

pub use intent::DetailIntent;
pub use pane::render_detail_pane;
pub use reducer::DetailReducer;
pub use state::DetailPaneState;
