//! Shared test utilities and fakes.

#![allow(dead_code, unused_imports)]

use parking_lot::Mutex;
use repo_viewer::list::{Diff, RenderSurface, SectionId};
use repo_viewer::model::{FetchError, FixtureSource, Item, ItemId, Period, RepoModel, RepoSource};
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;

/// Render surface that replays every diff onto a plain row vector.
#[derive(Default)]
pub struct RecordingSurface {
    pub rows: Vec<ItemId>,
    pub error: Option<String>,
    pub applied: usize,
}

impl RecordingSurface {
    pub fn ids(&self) -> Vec<u64> {
        self.rows.iter().map(|id| id.0).collect()
    }
}

impl RenderSurface for RecordingSurface {
    fn apply(&mut self, section: SectionId, diff: &Diff) {
        assert_eq!(section, SectionId::Rows);
        diff.apply_to(&mut self.rows);
        self.applied += 1;
    }

    fn show_error(&mut self, message: Option<&str>) {
        self.error = message.map(str::to_string);
    }
}

/// Items `alpha`, `beta`, ... with ids starting at `first_id`.
pub fn named_items(first_id: u64, names: &[&str]) -> Vec<Item> {
    names
        .iter()
        .enumerate()
        .map(|(offset, name)| Item::new(first_id + offset as u64, *name))
        .collect()
}

/// Fixture source whose fetches wait until the test opens the gate for
/// their period, one fetch per `release`.
pub struct GatedSource {
    inner: FixtureSource,
    gates: HashMap<Period, Arc<Semaphore>>,
}

impl GatedSource {
    pub fn new(inner: FixtureSource) -> Self {
        let gates = Period::ALL
            .iter()
            .map(|period| (*period, Arc::new(Semaphore::new(0))))
            .collect();
        Self { inner, gates }
    }

    pub fn release(&self, period: Period) {
        self.gates[&period].add_permits(1);
    }
}

impl RepoSource for GatedSource {
    fn fetch_page(
        &self,
        period: Period,
        page: u32,
    ) -> impl Future<Output = Result<Vec<Item>, FetchError>> + Send {
        let gate = Arc::clone(&self.gates[&period]);
        let fetch = self.inner.fetch_page(period, page);
        async move {
            gate.acquire().await.expect("gate closed").forget();
            fetch.await
        }
    }
}

/// Ask for the next page and wait until the model reports completion.
pub async fn load_more(model: &dyn RepoModel) {
    let (tx, rx) = tokio::sync::oneshot::channel();
    model.load_more_items(Box::new(move || {
        let _ = tx.send(());
    }));
    tokio::time::timeout(Duration::from_secs(5), rx)
        .await
        .expect("load did not complete in time")
        .expect("completion dropped");
}

pub fn ids(model: &dyn RepoModel) -> Vec<u64> {
    model.items().iter().map(|item| item.id.0).collect()
}
