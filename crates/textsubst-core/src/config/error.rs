//! Configuration error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or loading a [`SubstConfig`](super::SubstConfig)
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(
        "invalid marker `{marker}`: expected one ASCII punctuation character other than `{{` or `}}`"
    )]
    InvalidMarker { marker: String },
}
