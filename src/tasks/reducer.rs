//! Reducer for the task list.

use std::sync::Arc;

use tracing::trace;

use crate::mvi::update::{with_appended, with_replaced, without};
use crate::mvi::{ReduceError, Reducer};

use super::intent::TaskIntent;
use super::state::{Task, TaskListState};

/// Reducer for task list transitions.
///
/// Missing-id policy: `Changed` and `Deleted` for an id that is not in the
/// list return the state unchanged. `Added` with an id that already exists
/// is rejected with `InvalidTransition`, since two tasks with one id would
/// make every later edit ambiguous.
pub struct TaskReducer;

impl Reducer for TaskReducer {
    type State = TaskListState;
    type Intent = TaskIntent;

    fn reduce(state: &Self::State, intent: Self::Intent) -> Result<Self::State, ReduceError> {
        match intent {
            TaskIntent::Added { id, text } => {
                if state.get(id).is_some() {
                    return Err(ReduceError::invalid_transition(format!(
                        "task {id} already exists"
                    )));
                }
                Ok(TaskListState {
                    tasks: with_appended(&state.tasks, Arc::new(Task::new(id, text))),
                })
            }

            TaskIntent::Changed { task } => {
                let id = task.id;
                match with_replaced(&state.tasks, |t| t.id == id, Arc::new(task)) {
                    Some(tasks) => Ok(TaskListState { tasks }),
                    None => {
                        trace!(id, "ignoring change of missing task");
                        Ok(state.clone())
                    }
                }
            }

            TaskIntent::Deleted { id } => match without(&state.tasks, |t| t.id == id) {
                Some(tasks) => Ok(TaskListState { tasks }),
                None => {
                    trace!(id, "ignoring delete of missing task");
                    Ok(state.clone())
                }
            },
        }
    }
}
