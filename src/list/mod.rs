//! Filtered list synchronization.
//!
//! ```text
//! model changed ─┐
//! query edited  ─┼─→ ListSynchronizer ─→ build(items, query) ─→ Diff ─→ RenderSurface
//! scope changed ─┘                                                         │
//!                          selection::resolve(index) ←── selected row ─────┘
//! ```

pub mod diff;
pub mod filter;
pub mod phase;
pub mod selection;
pub mod snapshot;
pub mod sync;

pub use diff::{Diff, Indexed, Move};
pub use filter::{matches, matches_fields};
pub use phase::{PhaseIntent, PhaseReducer, SyncPhase};
pub use selection::{resolve, SelectionError};
pub use snapshot::{build, SectionId, Snapshot};
pub use sync::{coalesce, ListSynchronizer, RenderSurface, SyncTrigger, TriggerSender};
