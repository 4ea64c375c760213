//! State for the task list.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::mvi::UiState;

pub type TaskId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    #[serde(default)]
    pub done: bool,
}

impl Task {
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            done: false,
        }
    }
}

/// Ordered task list. Each task sits behind its own `Arc` so edits only
/// rebuild the list spine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskListState {
    pub tasks: Arc<[Arc<Task>]>,
}

impl Default for TaskListState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl UiState for TaskListState {}

impl TaskListState {
    pub fn new(tasks: impl IntoIterator<Item = Task>) -> Self {
        Self {
            tasks: tasks.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id).map(|task| &**task)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = TaskId> + '_ {
        self.tasks.iter().map(|task| task.id)
    }
}
