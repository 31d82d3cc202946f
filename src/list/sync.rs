//! Keeps a rendering surface in step with the model and the search query.
//!
//! All state here lives on the UI thread. Signals from other threads come in
//! through a [`TriggerSender`], which posts onto the UI event channel; the
//! UI loop drains and [`coalesce`]s them before calling
//! [`ListSynchronizer::handle`].

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::list::diff::Diff;
use crate::list::phase::{PhaseIntent, PhaseReducer, SyncPhase};
use crate::list::snapshot::{self, SectionId, Snapshot};
use crate::model::{ChangeListener, Item, ItemId, Period, RepoModel, SubscriptionId};
use crate::ui::mvi::Reducer;

/// Events that make the list recompute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncTrigger {
    ModelChanged,
    QueryChanged(String),
    ScopeChanged(Period),
}

/// Whatever draws the rows. Receives only diffs, never a full rebuild.
pub trait RenderSurface {
    fn apply(&mut self, section: SectionId, diff: &Diff);

    /// `None` clears the error label. Independent of the rows.
    fn show_error(&mut self, message: Option<&str>);
}

/// Thread-safe poster of triggers onto the UI thread.
#[derive(Clone)]
pub struct TriggerSender {
    post: Arc<dyn Fn(SyncTrigger) -> bool + Send + Sync>,
}

impl TriggerSender {
    /// `post` must hand the trigger to the UI thread without blocking and
    /// return `false` once the receiver is gone.
    pub fn new<F>(post: F) -> Self
    where
        F: Fn(SyncTrigger) -> bool + Send + Sync + 'static,
    {
        Self {
            post: Arc::new(post),
        }
    }

    pub fn send(&self, trigger: SyncTrigger) -> bool {
        (self.post)(trigger)
    }

    /// Listener for the model's `changed` signal.
    pub fn model_listener(&self) -> ChangeListener {
        let sender = self.clone();
        Box::new(move || {
            if !sender.send(SyncTrigger::ModelChanged) {
                tracing::trace!("Model change dropped (UI receiver gone)");
            }
        })
    }
}

/// Collapse a burst of triggers.
///
/// Keeps one trigger per kind (the last query, the last scope, a single
/// model change), ordered by where each kind last appeared, so the final
/// event of the burst is always the final one handled.
pub fn coalesce<I>(triggers: I) -> Vec<SyncTrigger>
where
    I: IntoIterator<Item = SyncTrigger>,
{
    let mut out: Vec<SyncTrigger> = Vec::new();
    for trigger in triggers {
        out.retain(|existing| std::mem::discriminant(existing) != std::mem::discriminant(&trigger));
        out.push(trigger);
    }
    out
}

pub struct ListSynchronizer {
    model: Arc<dyn RepoModel>,
    query: String,
    phase: SyncPhase,
    applied: Snapshot,
    catalog: HashMap<ItemId, Item>,
    generation: u64,
}

impl ListSynchronizer {
    pub fn new(model: Arc<dyn RepoModel>) -> Self {
        Self {
            model,
            query: String::new(),
            phase: SyncPhase::default(),
            applied: Snapshot::default(),
            catalog: HashMap::new(),
            generation: 0,
        }
    }

    /// Subscribe `sender` to the model's `changed` signal.
    pub fn attach(&self, sender: &TriggerSender) -> SubscriptionId {
        self.model.subscribe(sender.model_listener())
    }

    pub fn detach(&self, subscription: SubscriptionId) -> bool {
        self.model.unsubscribe(subscription)
    }

    pub fn model(&self) -> &Arc<dyn RepoModel> {
        &self.model
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn phase(&self) -> &SyncPhase {
        &self.phase
    }

    /// The snapshot the surface currently shows.
    pub fn snapshot(&self) -> &Snapshot {
        &self.applied
    }

    /// Number of completed passes.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Item data for a row as of the last pass.
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.catalog.get(&id)
    }

    pub fn on_model_changed(&mut self, surface: &mut dyn RenderSurface) -> Diff {
        self.handle(SyncTrigger::ModelChanged, surface)
    }

    pub fn set_query(&mut self, query: impl Into<String>, surface: &mut dyn RenderSurface) -> Diff {
        self.handle(SyncTrigger::QueryChanged(query.into()), surface)
    }

    pub fn set_scope(&mut self, scope: Period, surface: &mut dyn RenderSurface) -> Diff {
        self.handle(SyncTrigger::ScopeChanged(scope), surface)
    }

    /// Run one pass: read the model once, rebuild, diff, apply.
    pub fn handle(&mut self, trigger: SyncTrigger, surface: &mut dyn RenderSurface) -> Diff {
        match &trigger {
            SyncTrigger::ModelChanged => {}
            SyncTrigger::QueryChanged(query) => self.query.clone_from(query),
            SyncTrigger::ScopeChanged(period) => self.model.set_period(*period),
        }
        self.phase = PhaseReducer::reduce(
            std::mem::take(&mut self.phase),
            PhaseIntent::Begin { trigger },
        );

        let read = self.model.snapshot();
        let next = snapshot::build(&read.items, &self.query, read.period);
        let diff = Diff::between(&self.applied, &next);

        if !diff.is_empty() {
            surface.apply(next.section(), &diff);
        }
        surface.show_error(read.error.as_deref());

        let shown: HashSet<ItemId> = next.ids().iter().copied().collect();
        let mut catalog = HashMap::with_capacity(shown.len());
        for item in read.items.iter().filter(|item| shown.contains(&item.id)) {
            catalog.entry(item.id).or_insert_with(|| item.clone());
        }
        self.catalog = catalog;
        self.applied = next;
        self.generation += 1;

        tracing::trace!(
            generation = self.generation,
            rows = self.applied.len(),
            changes = diff.change_count(),
            "List synchronized"
        );

        self.phase = PhaseReducer::reduce(
            std::mem::take(&mut self.phase),
            PhaseIntent::Finished { error: read.error },
        );
        diff
    }
}
