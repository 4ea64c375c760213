//! Dispatch-only capability.

use std::sync::Arc;

use crate::mvi::{RawAction, ReduceError, Reducer};

use super::Shared;

/// Handle that can submit intents to a store and nothing else.
///
/// It cannot read the state, subscribe, or reach the reducer. Hand it to
/// code that only reports events.
pub struct Dispatcher<R: Reducer> {
    shared: Arc<Shared<R>>,
}

impl<R: Reducer> Clone for Dispatcher<R> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<R: Reducer> std::fmt::Debug for Dispatcher<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher").finish_non_exhaustive()
    }
}

impl<R: Reducer> Dispatcher<R> {
    pub(super) fn new(shared: Arc<Shared<R>>) -> Self {
        Self { shared }
    }

    /// Same contract as [`Store::dispatch`](super::Store::dispatch).
    pub fn dispatch(&self, intent: R::Intent) -> Result<(), ReduceError> {
        self.shared.dispatch(intent)
    }

    /// Same contract as [`Store::dispatch_raw`](super::Store::dispatch_raw).
    pub fn dispatch_raw(&self, action: impl Into<RawAction>) -> Result<(), ReduceError> {
        self.shared.dispatch_raw(action.into())
    }
}
