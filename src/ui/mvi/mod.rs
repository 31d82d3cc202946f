//! Model-View-Intent (MVI) primitives.
//!
//! The search bar, the detail pane and the list synchronizer's phase all
//! change state only through a reducer.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
