//! Hand-driven `RepoModel`: the owner replaces items and errors directly.
//!
//! Test support only. Built for unit tests and, through the `test-support`
//! feature, for the integration tests in `tests/`.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::model::item::{Domain, Item, ItemId, Period};
use crate::model::observers::{ChangeListener, Observers, SubscriptionId};
use crate::model::repo_model::{Completion, ModelSnapshot, RepoModel};

pub struct MemoryModel {
    state: RwLock<MemoryState>,
    observers: Observers,
}

struct MemoryState {
    items: Arc<[Item]>,
    favourites: Vec<ItemId>,
    error: Option<String>,
    period: Period,
    domain: Domain,
    load_requests: usize,
}

impl MemoryModel {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            state: RwLock::new(MemoryState {
                items: Arc::from(items),
                favourites: Vec::new(),
                error: None,
                period: Period::default(),
                domain: Domain::default(),
                load_requests: 0,
            }),
            observers: Observers::new(),
        }
    }

    /// Swap the whole collection and fire `changed`.
    pub fn replace_items(&self, items: Vec<Item>) {
        self.state.write().items = Arc::from(items);
        self.observers.notify();
    }

    pub fn set_error(&self, error: Option<String>) {
        self.state.write().error = error;
        self.observers.notify();
    }

    pub fn load_requests(&self) -> usize {
        self.state.read().load_requests
    }
}

impl RepoModel for MemoryModel {
    fn snapshot(&self) -> ModelSnapshot {
        let state = self.state.read();
        let items = match state.domain {
            Domain::Repositories => Arc::clone(&state.items),
            Domain::Favourites => state
                .items
                .iter()
                .filter(|item| state.favourites.contains(&item.id))
                .cloned()
                .collect(),
        };
        ModelSnapshot {
            items,
            error: state.error.clone(),
            period: state.period,
            domain: state.domain,
        }
    }

    fn set_period(&self, period: Period) {
        self.state.write().period = period;
        self.observers.notify();
    }

    fn set_domain(&self, domain: Domain) {
        self.state.write().domain = domain;
        self.observers.notify();
    }

    fn subscribe(&self, listener: ChangeListener) -> SubscriptionId {
        self.observers.subscribe(listener)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    fn load_more_items(&self, on_complete: Completion) {
        self.state.write().load_requests += 1;
        on_complete();
    }

    fn reload(&self) {
        self.observers.notify();
    }

    fn toggle_favourite(&self, id: ItemId) -> bool {
        let now_favourite = {
            let mut state = self.state.write();
            if let Some(pos) = state.favourites.iter().position(|fav| *fav == id) {
                state.favourites.remove(pos);
                false
            } else {
                state.favourites.push(id);
                true
            }
        };
        self.observers.notify();
        now_favourite
    }

    fn is_favourite(&self, id: ItemId) -> bool {
        self.state.read().favourites.contains(&id)
    }
}
