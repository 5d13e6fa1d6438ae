//! Configuration errors

use std::{
    io,
    path,
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {err:?}", config.display())]
    ReadError {
        config: path::PathBuf,
        err: io::Error,
    },

    #[error("failed to deserialize config file '{}': {err:?}", config.display())]
    FailedDeserialization {
        config: path::PathBuf,
        err: toml::de::Error,
    },

    #[error("{field} must be greater than zero")]
    ZeroDuration { field: &'static str },

    #[error("invalid {field} '{value}': {err}")]
    InvalidUrl {
        field: &'static str,
        value: String,
        err: url::ParseError,
    },
}
