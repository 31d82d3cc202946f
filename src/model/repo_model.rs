//! The read/subscribe interface the list core depends on.

use std::sync::Arc;

use crate::model::item::{Domain, Item, ItemId, Period};
use crate::model::observers::{ChangeListener, SubscriptionId};

/// Callback invoked once a `load_more_items` request settles.
pub type Completion = Box<dyn FnOnce() + Send>;

/// A consistent point-in-time read of the model.
#[derive(Debug, Clone)]
pub struct ModelSnapshot {
    pub items: Arc<[Item]>,
    pub error: Option<String>,
    pub period: Period,
    pub domain: Domain,
}

/// Source of truth for the repositories on screen.
///
/// Implementations mutate from background tasks and fire the `changed`
/// signal afterwards; readers only ever see whole collections.
pub trait RepoModel: Send + Sync {
    /// Items, error, period and domain read under a single lock.
    fn snapshot(&self) -> ModelSnapshot;

    fn items(&self) -> Arc<[Item]> {
        self.snapshot().items
    }

    fn error(&self) -> Option<String> {
        self.snapshot().error
    }

    fn period(&self) -> Period {
        self.snapshot().period
    }

    fn set_period(&self, period: Period);

    fn domain(&self) -> Domain {
        self.snapshot().domain
    }

    fn set_domain(&self, domain: Domain);

    fn subscribe(&self, listener: ChangeListener) -> SubscriptionId;

    fn unsubscribe(&self, id: SubscriptionId) -> bool;

    /// Fetch the next page. Fire-and-forget; `on_complete` runs on an
    /// arbitrary thread once the request has settled (success or not).
    fn load_more_items(&self, on_complete: Completion);

    /// Drop fetched items and start over from the first page.
    fn reload(&self);

    /// Returns whether the item is a favourite after the toggle.
    fn toggle_favourite(&self, id: ItemId) -> bool;

    fn is_favourite(&self, id: ItemId) -> bool;
}
