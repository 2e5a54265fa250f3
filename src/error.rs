use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Failures raised while loading configuration or building providers from it.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required configuration: {key}")]
    Missing { key: String },

    #[error("{key}={value:?} is not a valid {expected}")]
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
    },

    #[error("KEVIN_WAKER must be either 'hotkey' or 'porcupine' (got {value:?})")]
    UnknownWaker { value: String },

    #[error("{key} must be provided when {condition}")]
    MissingCompanion {
        key: &'static str,
        condition: &'static str,
    },

    #[error("failed to read definitions file {}", path.display())]
    DefinitionsFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    #[error("failed to read system prompt from {}", path.display())]
    SystemPrompt {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
