//! In-memory `RepoModel` backed by a paged `RepoSource`.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tokio::runtime::Handle;

use crate::model::item::{Domain, Item, ItemId, Period};
use crate::model::observers::{ChangeListener, Observers, SubscriptionId};
use crate::model::repo_model::{Completion, ModelSnapshot, RepoModel};
use crate::model::source::{FetchError, RepoSource};

/// Thread-safe repository store.
///
/// Fetches run on the tokio runtime. Every reset of the fetched list bumps a
/// generation counter; a page that arrives for an older generation is
/// dropped instead of being mixed into the new list.
pub struct RepoStore<S: RepoSource> {
    shared: Arc<Shared<S>>,
}

impl<S: RepoSource> Clone for RepoStore<S> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

struct Shared<S> {
    source: S,
    runtime: Handle,
    state: RwLock<StoreState>,
    /// Pending `load_more_items` callbacks, tagged with the generation they
    /// were queued under.
    completions: Mutex<Vec<(u64, Completion)>>,
    observers: Observers,
}

struct StoreState {
    period: Period,
    domain: Domain,
    fetched: Arc<[Item]>,
    favourites: Arc<[Item]>,
    error: Option<String>,
    next_page: u32,
    exhausted: bool,
    generation: u64,
    in_flight: Option<u64>,
}

impl StoreState {
    fn visible(&self) -> Arc<[Item]> {
        match self.domain {
            Domain::Repositories => Arc::clone(&self.fetched),
            Domain::Favourites => Arc::clone(&self.favourites),
        }
    }

    fn reset(&mut self) {
        self.generation += 1;
        self.fetched = Arc::from(Vec::new());
        self.error = None;
        self.next_page = 1;
        self.exhausted = false;
        self.in_flight = None;
    }
}

impl<S: RepoSource> RepoStore<S> {
    pub fn new(source: S, runtime: Handle, period: Period) -> Self {
        let state = StoreState {
            period,
            domain: Domain::default(),
            fetched: Arc::from(Vec::new()),
            favourites: Arc::from(Vec::new()),
            error: None,
            next_page: 1,
            exhausted: false,
            generation: 0,
            in_flight: None,
        };

        Self {
            shared: Arc::new(Shared {
                source,
                runtime,
                state: RwLock::new(state),
                completions: Mutex::new(Vec::new()),
                observers: Observers::new(),
            }),
        }
    }

    /// Current fetch generation.
    pub fn generation(&self) -> u64 {
        self.shared.state.read().generation
    }

    pub fn is_loading(&self) -> bool {
        self.shared.state.read().in_flight.is_some()
    }

    pub fn is_exhausted(&self) -> bool {
        self.shared.state.read().exhausted
    }

    fn start_load(&self, on_complete: Option<Completion>) {
        let (period, page, generation) = {
            let mut state = self.shared.state.write();
            if let Some(on_complete) = on_complete {
                self.shared
                    .completions
                    .lock()
                    .push((state.generation, on_complete));
            }
            if state.in_flight == Some(state.generation) {
                // Already fetching this generation; the completion rides along.
                return;
            }
            if state.exhausted {
                let current = state.generation;
                drop(state);
                self.shared.flush_completions(current);
                return;
            }
            state.in_flight = Some(state.generation);
            (state.period, state.next_page, state.generation)
        };

        let shared = Arc::clone(&self.shared);
        self.shared.runtime.spawn(async move {
            let result = shared.source.fetch_page(period, page).await;
            shared.finish_load(generation, page, result);
        });
    }
}

impl<S: RepoSource> Shared<S> {
    fn finish_load(&self, generation: u64, page: u32, result: Result<Vec<Item>, FetchError>) {
        let changed = {
            let mut state = self.state.write();
            if state.generation != generation {
                tracing::debug!(
                    generation,
                    current = state.generation,
                    page,
                    "Discarding page from superseded fetch"
                );
                false
            } else {
                state.in_flight = None;
                match result {
                    Ok(items) if items.is_empty() => {
                        state.exhausted = true;
                        state.error = None;
                    }
                    Ok(items) => {
                        tracing::debug!(page, count = items.len(), "Page loaded");
                        let mut merged = Vec::with_capacity(state.fetched.len() + items.len());
                        merged.extend(state.fetched.iter().cloned());
                        merged.extend(items);
                        state.fetched = Arc::from(merged);
                        state.next_page = page + 1;
                        state.error = None;
                    }
                    Err(err) => {
                        tracing::warn!(page, error = %err, "Failed to load repositories");
                        state.error = Some(err.user_message());
                    }
                }
                true
            }
        };

        if changed {
            self.observers.notify();
        }
        // A superseded page only settles callbacks queued for its own (or an
        // older) generation; the current request still owes the rest.
        self.flush_completions(generation);
    }

    /// Run every callback queued at or before `generation`.
    fn flush_completions(&self, generation: u64) {
        let due: Vec<Completion> = {
            let mut pending = self.completions.lock();
            let (due, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut *pending)
                .into_iter()
                .partition(|(queued, _)| *queued <= generation);
            *pending = waiting;
            due.into_iter().map(|(_, completion)| completion).collect()
        };
        for completion in due {
            completion();
        }
    }
}

impl<S: RepoSource> RepoModel for RepoStore<S> {
    fn snapshot(&self) -> ModelSnapshot {
        let state = self.shared.state.read();
        ModelSnapshot {
            items: state.visible(),
            error: state.error.clone(),
            period: state.period,
            domain: state.domain,
        }
    }

    fn set_period(&self, period: Period) {
        {
            let mut state = self.shared.state.write();
            if state.period == period {
                return;
            }
            tracing::info!(?period, "Switching period");
            state.period = period;
            state.reset();
        }
        self.shared.observers.notify();
        self.start_load(None);
    }

    fn set_domain(&self, domain: Domain) {
        {
            let mut state = self.shared.state.write();
            if state.domain == domain {
                return;
            }
            state.domain = domain;
        }
        self.shared.observers.notify();
    }

    fn subscribe(&self, listener: ChangeListener) -> SubscriptionId {
        self.shared.observers.subscribe(listener)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.shared.observers.unsubscribe(id)
    }

    fn load_more_items(&self, on_complete: Completion) {
        self.start_load(Some(on_complete));
    }

    fn reload(&self) {
        self.shared.state.write().reset();
        self.shared.observers.notify();
        self.start_load(None);
    }

    fn toggle_favourite(&self, id: ItemId) -> bool {
        let now_favourite = {
            let mut state = self.shared.state.write();
            let mut favourites: Vec<Item> = state.favourites.iter().cloned().collect();
            let now_favourite = if let Some(pos) = favourites.iter().position(|item| item.id == id) {
                favourites.remove(pos);
                false
            } else if let Some(item) = state.fetched.iter().find(|item| item.id == id) {
                favourites.push(item.clone());
                true
            } else {
                return false;
            };
            state.favourites = Arc::from(favourites);
            now_favourite
        };
        self.shared.observers.notify();
        now_favourite
    }

    fn is_favourite(&self, id: ItemId) -> bool {
        self.shared
            .state
            .read()
            .favourites
            .iter()
            .any(|item| item.id == id)
    }
}
