//! Task list feature module.
//!
//! An ordered list of tasks that can be added, edited and deleted. Ids are
//! generated by the caller (see [`IdGenerator`](crate::ids::IdGenerator)).
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Task records and the ordered list
//! - `intent.rs` - User events (Added, Changed, Deleted)
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::TaskIntent;
pub use reducer::TaskReducer;
pub use state::{Task, TaskId, TaskListState};
