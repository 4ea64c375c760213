//! Intents for the messenger.

use serde::{Deserialize, Serialize};

use crate::mvi::Intent;

use super::state::ContactId;

/// Intents that can be dispatched to the messenger reducer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessengerIntent {
    /// User picked another contact.
    ChangedSelection {
        #[serde(alias = "contactId")]
        contact_id: ContactId,
    },

    /// User typed into the draft of the selected contact.
    EditedMessage { message: String },

    /// User sent the draft of the selected contact.
    SentMessage,
}

impl Intent for MessengerIntent {
    const ACTION_TYPES: &'static [&'static str] =
        &["changed_selection", "edited_message", "sent_message"];
}
