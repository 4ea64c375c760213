//! Reducer-backed state container.
//!
//! [`Store`] owns the current snapshot of a [`Reducer`]'s state. The only way
//! to change it is [`Store::dispatch`] (or a [`Dispatcher`] handle), which
//! runs the reducer against the current snapshot, commits the result and
//! then notifies subscribers synchronously.
//!
//! Dispatches are serialized by a reentrant gate held across reduce, commit
//! and notify: commit and notification of one intent finish before the next
//! intent from another thread is reduced. The state lock itself is released
//! before subscribers run, so a subscriber may read the store or dispatch
//! from inside its callback. The nested intent is applied right away on the
//! same thread, and subscribers that had not yet seen the outer snapshot
//! only receive the newer one, so every subscriber ends on the current state.

mod dispatcher;
mod subscribers;

use std::sync::Arc;

use parking_lot::{ReentrantMutex, RwLock};
use tracing::{debug, trace, warn};

use crate::mvi::{RawAction, ReduceError, Reducer};

pub use dispatcher::Dispatcher;
pub use subscribers::{Subscriber, SubscriptionId};

use subscribers::Subscribers;

/// Current snapshot plus the number of transitions committed so far.
struct Committed<S> {
    state: Arc<S>,
    version: u64,
}

struct Shared<R: Reducer> {
    /// Held for reduce + commit + notify so transitions never interleave.
    gate: ReentrantMutex<()>,
    committed: RwLock<Committed<R::State>>,
    subscribers: Subscribers<R::State>,
}

impl<R: Reducer> Shared<R> {
    fn dispatch(&self, intent: R::Intent) -> Result<(), ReduceError> {
        let _gate = self.gate.lock();
        trace!(?intent, "dispatching");

        let current = Arc::clone(&self.committed.read().state);
        let next = match R::reduce(&current, intent) {
            Ok(next) => Arc::new(next),
            Err(e) => {
                warn!(error = %e, "intent rejected, state unchanged");
                return Err(e);
            }
        };

        let version = {
            let mut committed = self.committed.write();
            committed.state = Arc::clone(&next);
            committed.version += 1;
            committed.version
        };
        debug!(version, "state committed");

        self.subscribers
            .notify(&next, || self.committed.read().version != version);
        Ok(())
    }

    fn dispatch_raw(&self, action: RawAction) -> Result<(), ReduceError> {
        let intent = action.decode::<R::Intent>().inspect_err(|e| {
            warn!(error = %e, "raw action rejected, state unchanged");
        })?;
        self.dispatch(intent)
    }
}

/// State container for reducer `R`.
///
/// Cloning a `Store` yields another handle to the same state.
pub struct Store<R: Reducer> {
    shared: Arc<Shared<R>>,
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<R: Reducer> Default for Store<R>
where
    R::State: Default,
{
    fn default() -> Self {
        Self::new(R::State::default())
    }
}

impl<R: Reducer> std::fmt::Debug for Store<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let committed = self.shared.committed.read();
        f.debug_struct("Store")
            .field("state", &committed.state)
            .field("version", &committed.version)
            .field("subscribers", &self.shared.subscribers.len())
            .finish()
    }
}

impl<R: Reducer> Store<R> {
    /// Create a store holding `initial` at version 0.
    pub fn new(initial: R::State) -> Self {
        Self {
            shared: Arc::new(Shared {
                gate: ReentrantMutex::new(()),
                committed: RwLock::new(Committed {
                    state: Arc::new(initial),
                    version: 0,
                }),
                subscribers: Subscribers::default(),
            }),
        }
    }

    /// Current snapshot. Cheap: clones an `Arc`.
    pub fn state(&self) -> Arc<R::State> {
        Arc::clone(&self.shared.committed.read().state)
    }

    /// Number of transitions committed since creation.
    pub fn version(&self) -> u64 {
        self.shared.committed.read().version
    }

    /// Reduce `intent` against the current state and commit the result.
    ///
    /// On `Err` nothing is committed and no subscriber is called.
    pub fn dispatch(&self, intent: R::Intent) -> Result<(), ReduceError> {
        self.shared.dispatch(intent)
    }

    /// Decode an untyped `{"type": ...}` action and dispatch it.
    ///
    /// Unknown types fail with [`ReduceError::UnknownAction`].
    pub fn dispatch_raw(&self, action: impl Into<RawAction>) -> Result<(), ReduceError> {
        self.shared.dispatch_raw(action.into())
    }

    /// Dispatch-only handle for callers that must not read the state.
    pub fn dispatcher(&self) -> Dispatcher<R> {
        Dispatcher::new(Arc::clone(&self.shared))
    }

    /// Register `subscriber` to be called with every committed snapshot.
    pub fn subscribe<F>(&self, subscriber: F) -> SubscriptionId
    where
        F: Fn(&Arc<R::State>) + Send + Sync + 'static,
    {
        self.shared.subscribers.add(Arc::new(subscriber))
    }

    /// Remove a subscriber. Returns false if `id` was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.shared.subscribers.remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messenger::{MessengerIntent, MessengerReducer, MessengerState};
    use parking_lot::Mutex;
    use serde_json::json;

    #[test]
    fn dispatch_commits_and_bumps_version() {
        let store = Store::<MessengerReducer>::default();
        store
            .dispatch(MessengerIntent::EditedMessage {
                message: "hi".into(),
            })
            .unwrap();
        assert_eq!(store.version(), 1);
        assert_eq!(store.state().draft(), "hi");
    }

    #[test]
    fn rejected_raw_action_leaves_version() {
        let store = Store::<MessengerReducer>::default();
        let err = store.dispatch_raw(json!({"type": "bogus"})).unwrap_err();
        assert!(err.is_unknown_action());
        assert_eq!(store.version(), 0);
        assert_eq!(*store.state(), MessengerState::default());
    }

    #[test]
    fn nested_dispatch_from_subscriber_is_applied() {
        let store = Store::<MessengerReducer>::default();
        let inner = store.dispatcher();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&seen);
        store.subscribe(move |state| {
            log.lock().push(state.selected_id);
            if state.selected_id == 1 {
                inner
                    .dispatch(MessengerIntent::ChangedSelection { contact_id: 2 })
                    .unwrap();
            }
        });

        store
            .dispatch(MessengerIntent::ChangedSelection { contact_id: 1 })
            .unwrap();

        assert_eq!(store.state().selected_id, 2);
        assert_eq!(*seen.lock(), vec![1, 2]);
    }

    #[test]
    fn nested_dispatch_does_not_hand_later_subscribers_stale_state() {
        let store = Store::<MessengerReducer>::default();
        let inner = store.dispatcher();
        store.subscribe(move |state| {
            if state.selected_id == 1 {
                inner
                    .dispatch(MessengerIntent::ChangedSelection { contact_id: 2 })
                    .unwrap();
            }
        });
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&seen);
        store.subscribe(move |state| log.lock().push(state.selected_id));

        store
            .dispatch(MessengerIntent::ChangedSelection { contact_id: 1 })
            .unwrap();

        assert_eq!(*seen.lock(), vec![2]);
        assert_eq!(store.state().selected_id, 2);
    }
}
