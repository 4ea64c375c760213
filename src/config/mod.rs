mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{
    Config, ContactsSeed, Defaults, MessengerSeed, ReducerKind, TasksSeed,
};
