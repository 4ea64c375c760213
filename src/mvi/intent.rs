//! Base trait for intents (actions) in MVI architecture.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Marker trait for intent objects.
///
/// Intents represent a single user-sized event:
/// - User actions (selection changed, message edited)
/// - System events carrying externally generated data (ids, timestamps)
///
/// Intents are plain data. They carry no closures or handles, which is
/// why they must round-trip through serde.
pub trait Intent: std::fmt::Debug + Serialize + DeserializeOwned + Send + 'static {
    /// Every `"type"` tag this intent enum accepts, in declaration order.
    const ACTION_TYPES: &'static [&'static str];
}
