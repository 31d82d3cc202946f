//! External model collaborator: items, paging, favourites and the
//! `changed` signal.

pub mod fixture;
pub mod github;
pub mod item;
#[cfg(any(test, feature = "test-support"))]
pub mod memory;
pub mod observers;
pub mod repo_model;
pub mod source;
pub mod store;

pub use fixture::FixtureSource;
pub use github::GithubSource;
pub use item::{Domain, Item, ItemId, Period};
#[cfg(any(test, feature = "test-support"))]
pub use memory::MemoryModel;
pub use observers::{ChangeListener, SubscriptionId};
pub use repo_model::{Completion, ModelSnapshot, RepoModel};
pub use source::{FetchError, RepoSource};
pub use store::RepoStore;
