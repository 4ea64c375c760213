//! Pure reducer-based state container with example reducers.
//!
//! - [`mvi`]: `Intent` / `Reducer` / `UiState` traits, raw action decoding
//! - [`store`]: the container, dispatch handle and subscriptions
//! - [`messenger`], [`tasks`], [`contacts`]: example reducers
//! - [`replay`]: JSON-lines script replay used by the `statebox` binary

pub mod config;
pub mod contacts;
pub mod ids;
pub mod logging;
pub mod messenger;
pub mod mvi;
pub mod replay;
pub mod store;
pub mod tasks;
