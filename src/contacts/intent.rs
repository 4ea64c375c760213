//! Intents for contact editing.

use serde::{Deserialize, Serialize};

use crate::messenger::ContactId;
use crate::mvi::Intent;

use super::state::Contact;

/// Intents that can be dispatched to the contact reducer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContactIntent {
    /// User opened a contact for editing.
    Selected { id: ContactId },

    /// User saved edits made to a contact.
    Saved { contact: Contact },
}

impl Intent for ContactIntent {
    const ACTION_TYPES: &'static [&'static str] = &["selected", "saved"];
}
