//! Error types
//!
//! Per-frame controller operations cannot fail. Everything here is raised
//! while loading configuration or assembling a controller, before the first
//! frame runs.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not valid JSON for the expected type.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value that must be strictly positive was not.
    #[error("{field} must be greater than zero (got {value})")]
    NonPositive { field: &'static str, value: f32 },

    /// The damping blend factor is outside (0, 1].
    #[error("damping must be in (0, 1] (got {0})")]
    DampingOutOfRange(f32),
}

/// Errors raised while assembling a [`PlayerController`](crate::player::PlayerController).
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("player controller requires a physics body")]
    MissingBody,

    #[error("player controller requires a camera transform")]
    MissingCamera,

    #[error("player controller requires an input source")]
    MissingInput,

    #[error("player controller requires a host environment")]
    MissingHost,

    #[error("invalid movement config: {0}")]
    Config(#[from] ConfigError),
}
