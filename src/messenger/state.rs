//! State for the messenger.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::mvi::UiState;

pub type ContactId = u64;

/// Messenger snapshot: which contact is open and the draft per contact.
///
/// A contact without an entry in `messages` has never been edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessengerState {
    pub selected_id: ContactId,
    pub messages: Arc<BTreeMap<ContactId, Arc<str>>>,
}

impl Default for MessengerState {
    fn default() -> Self {
        Self::new(0, [(0, "")])
    }
}

impl UiState for MessengerState {}

impl MessengerState {
    pub fn new<'a>(
        selected_id: ContactId,
        messages: impl IntoIterator<Item = (ContactId, &'a str)>,
    ) -> Self {
        Self {
            selected_id,
            messages: Arc::new(
                messages
                    .into_iter()
                    .map(|(id, text)| (id, Arc::from(text)))
                    .collect(),
            ),
        }
    }

    /// Draft stored for `contact_id`, if any.
    pub fn message(&self, contact_id: ContactId) -> Option<&str> {
        self.messages.get(&contact_id).map(|text| &**text)
    }

    /// Draft of the selected contact, empty if never edited.
    pub fn draft(&self) -> &str {
        self.message(self.selected_id).unwrap_or_default()
    }
}
