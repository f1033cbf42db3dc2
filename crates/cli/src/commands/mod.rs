//! CLI command implementations.

pub mod cart;
pub mod catalog;
pub mod order;
pub mod session;

use thiserror::Error;

use lumaprint_store::{ConfigError, DirStore, KvError, StateStore, StoreConfig, StoreError};

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// The data directory could not be opened.
    #[error("Storage error: {0}")]
    Storage(#[from] KvError),

    /// A state mutation failed to persist.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// A referenced entity does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An argument failed to parse.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Open the durable store at the configured data directory and hydrate the
/// state slices.
pub fn open_state() -> Result<StateStore<DirStore>, CommandError> {
    let config = StoreConfig::from_env()?;
    let store = DirStore::open(config.data_dir)?;
    Ok(StateStore::open(store))
}
