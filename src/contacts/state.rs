//! State for contact editing.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::messenger::ContactId;
use crate::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub email: String,
}

impl Contact {
    pub fn new(id: ContactId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContactListState {
    pub contacts: Arc<[Arc<Contact>]>,
    pub selected_id: Option<ContactId>,
}

impl UiState for ContactListState {}

impl ContactListState {
    /// List with the first contact selected, or nothing if empty.
    pub fn new(contacts: impl IntoIterator<Item = Contact>) -> Self {
        let contacts: Arc<[Arc<Contact>]> = contacts.into_iter().map(Arc::new).collect();
        let selected_id = contacts.first().map(|c| c.id);
        Self {
            contacts,
            selected_id,
        }
    }

    pub fn get(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id).map(|c| &**c)
    }

    pub fn selected(&self) -> Option<&Contact> {
        self.selected_id.and_then(|id| self.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_selects_first_contact() {
        let state = ContactListState::new([
            Contact::new(0, "Taylor", "taylor@mail.com"),
            Contact::new(1, "Alice", "alice@mail.com"),
        ]);
        assert_eq!(state.selected().map(|c| c.name.as_str()), Some("Taylor"));
    }

    #[test]
    fn empty_list_has_no_selection() {
        assert!(ContactListState::new([]).selected_id.is_none());
        assert!(ContactListState::default().selected().is_none());
    }
}
