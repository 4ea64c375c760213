//! Caller-owned id generation.
//!
//! Reducers never invent ids. The caller takes the next id from an
//! [`IdGenerator`] it owns and puts it into the intent payload, so two
//! stores never share a counter and replaying the same intents yields the
//! same state.

use serde::{Deserialize, Serialize};

/// Monotonic id source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdGenerator {
    next: u64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::starting_at(0)
    }
}

impl IdGenerator {
    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }

    /// Generator whose first id is one past the largest of `ids`.
    pub fn after<I: IntoIterator<Item = u64>>(ids: I) -> Self {
        let next = ids
            .into_iter()
            .max()
            .map(|max| max.saturating_add(1))
            .unwrap_or(0);
        Self { next }
    }

    /// Hand out the next id.
    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next = self.next.saturating_add(1);
        id
    }

    /// The id the next call to [`next_id`](Self::next_id) will return.
    pub fn peek(&self) -> u64 {
        self.next
    }
}
