use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::contacts::{Contact, ContactListState};
use crate::ids::IdGenerator;
use crate::messenger::{ContactId, MessengerState};
use crate::tasks::{Task, TaskListState};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub messenger: MessengerSeed,
    #[serde(default)]
    pub tasks: TasksSeed,
    #[serde(default)]
    pub contacts: ContactsSeed,
}

/// Which example reducer a replay drives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ReducerKind {
    #[default]
    Messenger,
    Tasks,
    Contacts,
}

impl std::fmt::Display for ReducerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Messenger => "messenger",
            Self::Tasks => "tasks",
            Self::Contacts => "contacts",
        };
        f.write_str(name)
    }
}

/// Default settings for the replay tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Reducer used when `--reducer` is not given (default: messenger).
    #[serde(default)]
    pub reducer: ReducerKind,
    /// Print every committed state, not just the final one (default: true).
    #[serde(default = "default_print_intermediate")]
    pub print_intermediate: bool,
}

fn default_print_intermediate() -> bool {
    true
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            reducer: ReducerKind::default(),
            print_intermediate: default_print_intermediate(),
        }
    }
}

/// Initial messenger state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessengerSeed {
    /// Contact selected at startup (default: 0).
    #[serde(default)]
    pub selected_id: ContactId,
    /// Contacts that start with an empty draft (default: [0]).
    #[serde(default = "default_messenger_contacts")]
    pub contacts: Vec<ContactId>,
}

fn default_messenger_contacts() -> Vec<ContactId> {
    vec![0]
}

impl Default for MessengerSeed {
    fn default() -> Self {
        Self {
            selected_id: 0,
            contacts: default_messenger_contacts(),
        }
    }
}

/// Initial task list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TasksSeed {
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// Initial contact list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactsSeed {
    /// Selected contact; the first contact when omitted.
    #[serde(default)]
    pub selected_id: Option<ContactId>,
    #[serde(default)]
    pub contacts: Vec<Contact>,
}

impl Config {
    /// Messenger state built from the `[messenger]` section.
    pub fn messenger_state(&self) -> MessengerState {
        MessengerState::new(
            self.messenger.selected_id,
            self.messenger.contacts.iter().map(|&id| (id, "")),
        )
    }

    /// Task list built from the `[tasks]` section.
    pub fn task_state(&self) -> TaskListState {
        TaskListState::new(self.tasks.tasks.iter().cloned())
    }

    /// Id generator that continues after the seeded tasks.
    pub fn task_ids(&self) -> IdGenerator {
        IdGenerator::after(self.tasks.tasks.iter().map(|task| task.id))
    }

    /// Contact list built from the `[contacts]` section.
    pub fn contact_state(&self) -> ContactListState {
        let state = ContactListState::new(self.contacts.contacts.iter().cloned());
        match self.contacts.selected_id {
            Some(id) => ContactListState {
                selected_id: Some(id),
                ..state
            },
            None => state,
        }
    }
}
