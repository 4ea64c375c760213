//! Contact editing feature module.
//!
//! A contact list with one selected contact whose details can be edited
//! and saved back into the list.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Contact records and the current selection
//! - `intent.rs` - User events (Selected, Saved)
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::ContactIntent;
pub use reducer::ContactReducer;
pub use state::{Contact, ContactListState};
