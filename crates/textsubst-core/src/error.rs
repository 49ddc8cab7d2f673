use thiserror::Error;

use crate::config::ConfigError;
use crate::template::error::{ParseError, SetupError};

#[derive(Error, Debug)]
pub enum TextsubstError {
    #[error("SETUP_ERROR: {0}")]
    Setup(#[from] SetupError),

    #[error("PARSE_ERROR: {0}")]
    Parse(#[from] ParseError),

    #[error("CONFIG_ERROR: {0}")]
    Config(#[from] ConfigError),

    // Raised by the output sink during expansion
    #[error("IO_ERROR: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TextsubstError>;
