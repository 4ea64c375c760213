use thiserror::Error;

/// Errors raised while turning an action into a state transition.
///
/// A dispatch that fails with any of these leaves the store untouched.
#[derive(Debug, Error)]
pub enum ReduceError {
    #[error("Unknown action type '{action_type}' (expected one of: {expected})")]
    UnknownAction {
        action_type: String,
        expected: String,
    },

    #[error("Action is missing a string \"type\" field")]
    MissingActionType,

    #[error("Malformed '{action_type}' action: {source}")]
    MalformedAction {
        action_type: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid transition: {message}")]
    InvalidTransition { message: String },
}

impl ReduceError {
    pub fn invalid_transition(message: impl Into<String>) -> Self {
        Self::InvalidTransition {
            message: message.into(),
        }
    }

    /// True for errors caused by an action type the reducer does not know.
    pub fn is_unknown_action(&self) -> bool {
        matches!(self, Self::UnknownAction { .. })
    }
}
