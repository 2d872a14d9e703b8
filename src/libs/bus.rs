//! Change notifications for storage keys.
//!
//! Every successful write publishes the key it touched. Views subscribe to
//! the keys they derive from (or to all keys) and re-read storage when they
//! are told something changed. A [`Subscription`] stays active until it is
//! dropped.

use super::storage::StorageKey;
use parking_lot::Mutex;
use std::sync::{Arc, Weak};

type Listener = Arc<dyn Fn(&StorageKey) + Send + Sync>;

#[derive(Clone)]
enum Topic {
    Key(StorageKey),
    All,
}

impl Topic {
    fn matches(&self, key: &StorageKey) -> bool {
        match self {
            Topic::Key(k) => k == key,
            Topic::All => true,
        }
    }
}

struct Entry {
    id: u64,
    topic: Topic,
    listener: Listener,
}

#[derive(Default)]
struct BusInner {
    next_id: u64,
    entries: Vec<Entry>,
}

/// Process-wide publisher of "this key changed" events.
#[derive(Clone, Default)]
pub struct ChangeBus {
    inner: Arc<Mutex<BusInner>>,
}

impl ChangeBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls `listener` after every write to `key`.
    pub fn subscribe<F>(&self, key: StorageKey, listener: F) -> Subscription
    where
        F: Fn(&StorageKey) + Send + Sync + 'static,
    {
        self.register(Topic::Key(key), Arc::new(listener))
    }

    /// Calls `listener` after every write to any key.
    pub fn subscribe_all<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&StorageKey) + Send + Sync + 'static,
    {
        self.register(Topic::All, Arc::new(listener))
    }

    fn register(&self, topic: Topic, listener: Listener) -> Subscription {
        let mut inner = self.inner.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.entries.push(Entry { id, topic, listener });

        Subscription {
            id,
            bus: Arc::downgrade(&self.inner),
        }
    }

    /// Delivers `key` to every matching listener and returns how many were called.
    ///
    /// Listeners run after the bus lock is released, so they may read storage,
    /// subscribe or drop subscriptions themselves.
    pub fn publish(&self, key: &StorageKey) -> usize {
        let listeners: Vec<Listener> = self
            .inner
            .lock()
            .entries
            .iter()
            .filter(|entry| entry.topic.matches(key))
            .map(|entry| Arc::clone(&entry.listener))
            .collect();

        for listener in &listeners {
            listener(key);
        }
        listeners.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().entries.len()
    }
}

/// Handle that keeps a listener registered; dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes its listener"]
pub struct Subscription {
    id: u64,
    bus: Weak<Mutex<BusInner>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.bus.upgrade() {
            inner.lock().entries.retain(|entry| entry.id != self.id);
        }
    }
}
