mod common;

use common::{ids, load_more, named_items, GatedSource};
use repo_viewer::model::{Domain, FixtureSource, ItemId, Period, RepoModel, RepoStore};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tokio::time::timeout;

fn two_page_source() -> FixtureSource {
    FixtureSource::new()
        .with_page(Period::Day, 1, named_items(1, &["alpha", "beta"]))
        .with_page(Period::Day, 2, named_items(3, &["gamma"]))
        .with_page(Period::Month, 1, named_items(10, &["delta", "epsilon"]))
}

#[tokio::test]
async fn pages_append_until_exhausted() {
    let store = RepoStore::new(two_page_source(), Handle::current(), Period::Day);

    store.reload();
    load_more(&store).await;
    assert_eq!(ids(&store), vec![1, 2]);

    load_more(&store).await;
    assert_eq!(ids(&store), vec![1, 2, 3]);
    assert!(!store.is_exhausted());

    // Page 3 is empty.
    load_more(&store).await;
    assert!(store.is_exhausted());
    assert_eq!(ids(&store), vec![1, 2, 3]);

    // Nothing left to fetch: the completion still fires.
    load_more(&store).await;
    assert!(!store.is_loading());
}

#[tokio::test]
async fn fetch_error_keeps_loaded_items() {
    let source = FixtureSource::new()
        .with_page(Period::Day, 1, named_items(1, &["alpha", "beta"]))
        .with_failure(Period::Day, 2, 500);
    let store = RepoStore::new(source, Handle::current(), Period::Day);

    load_more(&store).await;
    load_more(&store).await;

    assert_eq!(ids(&store), vec![1, 2]);
    assert_eq!(
        store.error().as_deref(),
        Some("Server responded with status 500")
    );
}

#[tokio::test]
async fn rate_limit_gets_friendly_error() {
    let source = FixtureSource::new().with_failure(Period::Day, 1, 403);
    let store = RepoStore::new(source, Handle::current(), Period::Day);

    load_more(&store).await;

    assert!(ids(&store).is_empty());
    assert_eq!(
        store.error().as_deref(),
        Some("Rate limit reached, try again later")
    );
}

#[tokio::test]
async fn superseded_fetch_is_discarded() {
    let source = Arc::new(GatedSource::new(two_page_source()));
    let store = RepoStore::new(Arc::clone(&source), Handle::current(), Period::Day);

    store.reload();
    let (day_tx, day_rx) = oneshot::channel();
    store.load_more_items(Box::new(move || {
        let _ = day_tx.send(());
    }));

    let before = store.generation();
    store.set_period(Period::Month);
    assert!(store.generation() > before);
    let (month_tx, mut month_rx) = oneshot::channel();
    store.load_more_items(Box::new(move || {
        let _ = month_tx.send(());
    }));

    // The day page lands first but belongs to the old generation: it settles
    // the callback queued for it and nothing else.
    source.release(Period::Day);
    timeout(Duration::from_secs(5), day_rx)
        .await
        .expect("day callback timed out")
        .expect("day callback dropped");
    assert!(ids(&store).is_empty());
    assert!(store.is_loading());
    assert_eq!(month_rx.try_recv(), Err(TryRecvError::Empty));

    source.release(Period::Month);
    timeout(Duration::from_secs(5), month_rx)
        .await
        .expect("month callback timed out")
        .expect("month callback dropped");
    assert_eq!(ids(&store), vec![10, 11]);
    assert_eq!(store.period(), Period::Month);
    assert!(!store.is_loading());
}

#[tokio::test]
async fn period_switch_notifies_and_refetches() {
    let store = RepoStore::new(two_page_source(), Handle::current(), Period::Day);
    let notified = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&notified);
    let subscription = store.subscribe(Box::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    }));

    load_more(&store).await;
    assert_eq!(notified.load(Ordering::SeqCst), 1);

    store.set_period(Period::Month);
    // Reset is announced immediately, the new page when it lands.
    load_more(&store).await;
    assert_eq!(notified.load(Ordering::SeqCst), 3);
    assert_eq!(ids(&store), vec![10, 11]);

    // Same period again is a no-op.
    store.set_period(Period::Month);
    assert_eq!(notified.load(Ordering::SeqCst), 3);

    assert!(store.unsubscribe(subscription));
    store.reload();
    load_more(&store).await;
    assert_eq!(notified.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn favourites_domain_shows_toggled_items() {
    let store = RepoStore::new(two_page_source(), Handle::current(), Period::Day);
    load_more(&store).await;

    assert!(store.toggle_favourite(ItemId(2)));
    assert!(store.is_favourite(ItemId(2)));
    assert!(!store.toggle_favourite(ItemId(99)));

    store.set_domain(Domain::Favourites);
    assert_eq!(ids(&store), vec![2]);

    // Favourites survive a period switch.
    store.set_period(Period::Month);
    assert_eq!(ids(&store), vec![2]);

    assert!(!store.toggle_favourite(ItemId(2)));
    assert!(ids(&store).is_empty());

    store.set_domain(Domain::Repositories);
    load_more(&store).await;
    assert_eq!(ids(&store), vec![10, 11]);
}
