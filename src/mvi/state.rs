//! Base trait for state snapshots in MVI architecture.

/// Marker trait for state objects.
///
/// States should be:
/// - Immutable (transitions build a new value, sharing unchanged parts via `Arc`)
/// - Self-contained (all data needed by subscribers)
/// - Comparable (PartialEq for detecting changes)
pub trait UiState: Clone + PartialEq + std::fmt::Debug + Send + Sync + 'static {}
