//! Terminal front end: a master list kept in sync by
//! [`ListSynchronizer`](crate::list::ListSynchronizer), with a detail pane
//! beside it.

pub mod app;
pub mod detail;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod list_view;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod search;
pub mod terminal_guard;
pub mod theme;
