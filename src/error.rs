//! Error types.
//!
//! Only loading (configuration, card catalog) and the service channel can
//! fail. The estimator paths themselves never return errors: unknown cards,
//! elixir shortfalls and inactive matches are reported through outcome
//! values instead.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid card '{id}': {reason}")]
    InvalidCard { id: String, reason: String },

    #[error("card '{0}' is defined more than once")]
    DuplicateCard(String),

    #[error("tracker service is no longer running")]
    ServiceClosed,

    #[error("sensor failure: {0}")]
    Sensor(String),
}

pub type Result<T> = std::result::Result<T, ScoutError>;

/// Read a file into a string, tagging IO failures with the path.
pub(crate) fn read_to_string(path: &std::path::Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| ScoutError::Io {
        path: path.to_path_buf(),
        source,
    })
}
