//! Reducer for contact editing.

use std::sync::Arc;

use crate::mvi::update::with_replaced;
use crate::mvi::{ReduceError, Reducer};

use super::intent::ContactIntent;
use super::state::ContactListState;

/// Reducer for contact list transitions.
///
/// Missing-id policy: selecting or saving a contact that is not in the list
/// is rejected with `InvalidTransition`. The list itself has no intent that
/// removes contacts, so a missing id always points at a caller bug.
pub struct ContactReducer;

impl Reducer for ContactReducer {
    type State = ContactListState;
    type Intent = ContactIntent;

    fn reduce(state: &Self::State, intent: Self::Intent) -> Result<Self::State, ReduceError> {
        match intent {
            ContactIntent::Selected { id } => {
                if state.get(id).is_none() {
                    return Err(ReduceError::invalid_transition(format!(
                        "cannot select unknown contact {id}"
                    )));
                }
                Ok(ContactListState {
                    contacts: Arc::clone(&state.contacts),
                    selected_id: Some(id),
                })
            }

            ContactIntent::Saved { contact } => {
                let id = contact.id;
                let contacts = with_replaced(&state.contacts, |c| c.id == id, Arc::new(contact))
                    .ok_or_else(|| {
                        ReduceError::invalid_transition(format!(
                            "cannot save unknown contact {id}"
                        ))
                    })?;
                Ok(ContactListState {
                    contacts,
                    selected_id: state.selected_id,
                })
            }
        }
    }
}
