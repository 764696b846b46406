//! Construction-time errors
//!
//! The running game has no failure modes of its own; everything that can go
//! wrong is caught while building the settings and the state machine.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be greater than zero")]
    ZeroPeriod { name: &'static str },
    #[error("start threshold {0} must lie within [0, 1)")]
    Threshold(f32),
    #[error("maximum raw input value must be greater than zero")]
    ZeroRawRange,
    #[error("an obstacle field needs at least one column")]
    NoColumns,
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}
