//! Replay of JSON-lines action scripts through a store.
//!
//! Each non-blank line that does not start with `#` is one raw action,
//! e.g. `{"type": "edited_message", "message": "hi"}`. Actions are
//! dispatched in file order; committed states are written as JSON lines.
//! The first rejected action stops the replay.

mod error;

use std::io::{BufRead, Write};
use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::config::{Config, ReducerKind};
use crate::contacts::ContactReducer;
use crate::ids::IdGenerator;
use crate::messenger::MessengerReducer;
use crate::mvi::{RawAction, Reducer};
use crate::store::Store;
use crate::tasks::TaskReducer;

pub use error::ReplayError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayOptions {
    /// Write every committed state, not only the final one.
    pub print_intermediate: bool,
}

impl Default for ReplayOptions {
    fn default() -> Self {
        Self {
            print_intermediate: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Number of actions committed.
    pub applied: usize,
}

/// Replay `script` through `store`.
///
/// `prepare` may fill in caller-generated payload fields (ids) before each
/// action is decoded. States reach `out` through a store subscription, so
/// what is printed is exactly what subscribers observe.
pub fn replay<R, B, W, P>(
    store: &Store<R>,
    script: B,
    out: &mut W,
    options: ReplayOptions,
    mut prepare: P,
) -> Result<ReplaySummary, ReplayError>
where
    R: Reducer,
    R::State: Serialize,
    B: BufRead,
    W: Write,
    P: FnMut(&mut Value),
{
    let committed: Arc<Mutex<Vec<Arc<R::State>>>> = Arc::default();
    let sink = Arc::clone(&committed);
    let subscription = store.subscribe(move |state| sink.lock().push(Arc::clone(state)));

    let result = replay_lines(store, script, out, options, &mut prepare, &committed);
    store.unsubscribe(subscription);
    let applied = result?;

    if !options.print_intermediate || applied == 0 {
        write_state(out, &store.state())?;
    }

    info!(applied, "replay finished");
    Ok(ReplaySummary { applied })
}

fn replay_lines<R, B, W, P>(
    store: &Store<R>,
    script: B,
    out: &mut W,
    options: ReplayOptions,
    prepare: &mut P,
    committed: &Mutex<Vec<Arc<R::State>>>,
) -> Result<usize, ReplayError>
where
    R: Reducer,
    R::State: Serialize,
    B: BufRead,
    W: Write,
    P: FnMut(&mut Value),
{
    let mut applied = 0;
    for (index, line) in script.lines().enumerate() {
        let line_no = index + 1;
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut action = RawAction::parse(trimmed).map_err(|source| ReplayError::Json {
            line: line_no,
            source,
        })?;
        prepare(action.value_mut());

        debug!(line = line_no, action_type = ?action.action_type(), "replaying action");
        store
            .dispatch_raw(action)
            .map_err(|source| ReplayError::Rejected {
                line: line_no,
                source,
            })?;
        applied += 1;

        let states = std::mem::take(&mut *committed.lock());
        if options.print_intermediate {
            for state in states {
                write_state(out, &state)?;
            }
        }
    }
    Ok(applied)
}

fn write_state<W: Write, S: Serialize>(out: &mut W, state: &S) -> Result<(), ReplayError> {
    serde_json::to_writer(&mut *out, state).map_err(ReplayError::Output)?;
    writeln!(out)?;
    Ok(())
}

/// Fill a missing `id` of `added` task actions from `ids`.
///
/// An explicit id is never rewritten: a valid one moves the generator past
/// it, anything else is left for decoding to reject.
fn assign_task_id(ids: &mut IdGenerator, value: &mut Value) {
    let Some(object) = value.as_object_mut() else {
        return;
    };
    if object.get("type").and_then(Value::as_str) != Some("added") {
        return;
    }
    match object.get("id") {
        None => {
            object.insert("id".to_string(), Value::from(ids.next_id()));
        }
        Some(id) => {
            if let Some(id) = id.as_u64().filter(|id| *id >= ids.peek()) {
                *ids = IdGenerator::starting_at(id.saturating_add(1));
            }
        }
    }
}

/// Replay `script` through the example reducer `kind`, seeded from `config`.
pub fn replay_with<B: BufRead, W: Write>(
    kind: ReducerKind,
    config: &Config,
    script: B,
    out: &mut W,
    options: ReplayOptions,
) -> Result<ReplaySummary, ReplayError> {
    info!(reducer = %kind, "starting replay");
    match kind {
        ReducerKind::Messenger => {
            let store = Store::<MessengerReducer>::new(config.messenger_state());
            replay(&store, script, out, options, |_| {})
        }
        ReducerKind::Tasks => {
            let store = Store::<TaskReducer>::new(config.task_state());
            let mut ids = config.task_ids();
            replay(&store, script, out, options, |value| {
                assign_task_id(&mut ids, value)
            })
        }
        ReducerKind::Contacts => {
            let store = Store::<ContactReducer>::new(config.contact_state());
            replay(&store, script, out, options, |_| {})
        }
    }
}
