//! Subscriber registry.

use std::sync::Arc;

use parking_lot::Mutex;

/// Callback invoked with each committed snapshot.
pub type Subscriber<S> = Arc<dyn Fn(&Arc<S>) + Send + Sync>;

/// Handle returned by `Store::subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Registry<S> {
    next_id: u64,
    entries: Vec<(SubscriptionId, Subscriber<S>)>,
}

pub(super) struct Subscribers<S> {
    registry: Mutex<Registry<S>>,
}

impl<S> Default for Subscribers<S> {
    fn default() -> Self {
        Self {
            registry: Mutex::new(Registry {
                next_id: 0,
                entries: Vec::new(),
            }),
        }
    }
}

impl<S> Subscribers<S> {
    pub(super) fn add(&self, subscriber: Subscriber<S>) -> SubscriptionId {
        let mut registry = self.registry.lock();
        let id = SubscriptionId(registry.next_id);
        registry.next_id += 1;
        registry.entries.push((id, subscriber));
        id
    }

    pub(super) fn remove(&self, id: SubscriptionId) -> bool {
        let mut registry = self.registry.lock();
        let before = registry.entries.len();
        registry.entries.retain(|(entry_id, _)| *entry_id != id);
        registry.entries.len() != before
    }

    pub(super) fn len(&self) -> usize {
        self.registry.lock().entries.len()
    }

    /// Call every subscriber in registration order.
    ///
    /// The registry lock is released first, so callbacks may subscribe,
    /// unsubscribe or dispatch. Once `superseded` reports a newer commit
    /// (a nested dispatch already notified everyone), the remaining
    /// subscribers are skipped instead of being handed the older snapshot.
    pub(super) fn notify<F>(&self, state: &Arc<S>, superseded: F)
    where
        F: Fn() -> bool,
    {
        let current: Vec<Subscriber<S>> = self
            .registry
            .lock()
            .entries
            .iter()
            .map(|(_, subscriber)| Arc::clone(subscriber))
            .collect();
        for subscriber in current {
            if superseded() {
                break;
            }
            subscriber(state);
        }
    }
}
