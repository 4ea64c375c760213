//! Intents for the task list.

use serde::{Deserialize, Serialize};

use crate::mvi::Intent;

use super::state::{Task, TaskId};

/// Intents that can be dispatched to the task list reducer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TaskIntent {
    /// A task was created. The id is allocated by the caller.
    Added { id: TaskId, text: String },

    /// An existing task was edited (text or done flag).
    Changed { task: Task },

    /// A task was removed.
    Deleted { id: TaskId },
}

impl Intent for TaskIntent {
    const ACTION_TYPES: &'static [&'static str] = &["added", "changed", "deleted"];
}
