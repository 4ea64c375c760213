//! Reducer for the messenger.

use std::sync::Arc;

use crate::mvi::update::with_entry;
use crate::mvi::{ReduceError, Reducer};

use super::intent::MessengerIntent;
use super::state::MessengerState;

/// Reducer for messenger state transitions.
///
/// Every intent is valid in every state, so this reducer never returns
/// `InvalidTransition`. Drafts of contacts other than the selected one are
/// never touched.
pub struct MessengerReducer;

impl Reducer for MessengerReducer {
    type State = MessengerState;
    type Intent = MessengerIntent;

    fn reduce(state: &Self::State, intent: Self::Intent) -> Result<Self::State, ReduceError> {
        let next = match intent {
            MessengerIntent::ChangedSelection { contact_id } => MessengerState {
                selected_id: contact_id,
                messages: Arc::clone(&state.messages),
            },

            MessengerIntent::EditedMessage { message } => MessengerState {
                selected_id: state.selected_id,
                messages: with_entry(&state.messages, state.selected_id, Arc::from(message)),
            },

            MessengerIntent::SentMessage => MessengerState {
                selected_id: state.selected_id,
                messages: with_entry(&state.messages, state.selected_id, Arc::from("")),
            },
        };
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: &MessengerState, intent: MessengerIntent) -> MessengerState {
        MessengerReducer::reduce(state, intent).unwrap()
    }

    #[test]
    fn edited_message_sets_selected_draft() {
        let state = reduce(
            &MessengerState::default(),
            MessengerIntent::EditedMessage {
                message: "hi".into(),
            },
        );
        assert_eq!(state, MessengerState::new(0, [(0, "hi")]));
    }

    #[test]
    fn changed_selection_shares_messages() {
        let before = MessengerState::new(0, [(0, "hi")]);
        let after = reduce(&before, MessengerIntent::ChangedSelection { contact_id: 1 });
        assert_eq!(after.selected_id, 1);
        assert!(Arc::ptr_eq(&before.messages, &after.messages));
    }

    #[test]
    fn sent_message_clears_only_selected() {
        let before = MessengerState::new(1, [(0, "hi"), (1, "draft")]);
        let after = reduce(&before, MessengerIntent::SentMessage);
        assert_eq!(after.message(0), Some("hi"));
        assert_eq!(after.message(1), Some(""));
    }

    #[test]
    fn sent_message_creates_missing_entry() {
        let before = MessengerState::new(1, [(0, "hi")]);
        let after = reduce(&before, MessengerIntent::SentMessage);
        assert_eq!(after, MessengerState::new(1, [(0, "hi"), (1, "")]));
    }

    #[test]
    fn edit_keeps_other_drafts_shared() {
        let before = MessengerState::new(1, [(0, "hi"), (1, "")]);
        let after = reduce(
            &before,
            MessengerIntent::EditedMessage {
                message: "yo".into(),
            },
        );
        assert!(Arc::ptr_eq(&before.messages[&0], &after.messages[&0]));
        assert_eq!(before.message(1), Some(""));
    }
}
