//! Decoding of untyped `{"type": "...", ...}` actions.
//!
//! Typed intents are closed enums, so the compiler already rejects unknown
//! variants. Actions coming from outside the program (scripts, JSON
//! payloads) go through here, and an unrecognised tag fails loudly instead
//! of being dropped.

use serde_json::Value;

use super::error::ReduceError;
use super::intent::Intent;

/// An action as received from the outside world: a JSON object with a
/// `"type"` discriminator and a type-specific payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RawAction(Value);

impl RawAction {
    /// Parse a raw action from JSON text.
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text).map(Self)
    }

    /// Mutable access to the payload, for callers that fill in
    /// externally generated fields before decoding.
    pub fn value_mut(&mut self) -> &mut Value {
        &mut self.0
    }

    /// The `"type"` tag, if present and a string.
    pub fn action_type(&self) -> Option<&str> {
        self.0.get("type").and_then(Value::as_str)
    }

    /// Decode into the typed intent `I`.
    pub fn decode<I: Intent>(self) -> Result<I, ReduceError> {
        decode_intent(self.0)
    }
}

impl From<Value> for RawAction {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Decode a JSON action into the typed intent `I`.
///
/// The tag is checked against [`Intent::ACTION_TYPES`] first, so an unknown
/// tag is reported as [`ReduceError::UnknownAction`] rather than as a
/// generic deserialization failure.
pub fn decode_intent<I: Intent>(value: Value) -> Result<I, ReduceError> {
    let action_type = match value.get("type").and_then(Value::as_str) {
        Some(tag) => tag.to_string(),
        None => return Err(ReduceError::MissingActionType),
    };

    if !I::ACTION_TYPES.contains(&action_type.as_str()) {
        return Err(ReduceError::UnknownAction {
            action_type,
            expected: I::ACTION_TYPES.join(", "),
        });
    }

    serde_json::from_value(value).map_err(|source| ReduceError::MalformedAction {
        action_type,
        source,
    })
}
