//! Reducer trait for MVI architecture.

use super::error::ReduceError;
use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (&State, Intent) -> State. No I/O, no
/// clocks, no randomness; anything like that belongs in the intent payload.
pub trait Reducer: Send + Sync + 'static {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    ///
    /// The previous state is borrowed and never modified. An `Err` means
    /// the transition is rejected as a whole.
    fn reduce(state: &Self::State, intent: Self::Intent) -> Result<Self::State, ReduceError>;
}
