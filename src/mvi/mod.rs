//! Model-View-Intent (MVI) primitives.
//!
//! This module provides the base traits for unidirectional data flow
//! between callers and a [`Store`](crate::store::Store).
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Subscribers
//!    ↑                                  │
//!    └──────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot of the whole domain
//! - **Intent**: Description of what happened (never how to update)
//! - **Reducer**: Pure function that computes the next state from an intent
//! - **RawAction**: Untyped `{"type": ...}` input decoded into an intent

mod error;
mod intent;
mod raw;
mod reducer;
mod state;
pub mod update;

pub use error::ReduceError;
pub use intent::Intent;
pub use raw::{decode_intent, RawAction};
pub use reducer::Reducer;
pub use state::UiState;
