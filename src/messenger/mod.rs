//! Messenger feature module.
//!
//! A contact selector plus one draft message per contact. Switching
//! contacts keeps every draft; sending clears only the selected one.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Selected contact and per-contact drafts
//! - `intent.rs` - User events (ChangedSelection, EditedMessage, SentMessage)
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::MessengerIntent;
pub use reducer::MessengerReducer;
pub use state::{ContactId, MessengerState};
