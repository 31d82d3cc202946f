//! Observer list behind the model's `changed` signal.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

/// Callback fired after any model mutation. May run on any thread.
pub type ChangeListener = Box<dyn Fn() + Send + Sync>;

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
pub struct Observers {
    next_id: AtomicU64,
    listeners: Mutex<Vec<(SubscriptionId, Arc<dyn Fn() + Send + Sync>)>>,
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: ChangeListener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners.lock().push((id, Arc::from(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.lock();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    /// Fire every listener. Listeners run outside the lock so they may
    /// subscribe or unsubscribe re-entrantly.
    pub fn notify(&self) {
        let listeners: Vec<_> = self
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener();
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn notify_reaches_every_subscriber_until_unsubscribed() {
        let observers = Observers::new();
        let hits = Arc::new(AtomicUsize::new(0));

        let first = {
            let hits = Arc::clone(&hits);
            observers.subscribe(Box::new(move || {
                hits.fetch_add(1, Ordering::SeqCst);
            }))
        };
        {
            let hits = Arc::clone(&hits);
            observers.subscribe(Box::new(move || {
                hits.fetch_add(10, Ordering::SeqCst);
            }));
        }

        observers.notify();
        assert_eq!(hits.load(Ordering::SeqCst), 11);

        assert!(observers.unsubscribe(first));
        assert!(!observers.unsubscribe(first));
        observers.notify();
        assert_eq!(hits.load(Ordering::SeqCst), 21);
        assert_eq!(observers.len(), 1);
    }
}
