use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use super::consts::{CLOSE_BRACE, DEFAULT_MARKER, OPEN_BRACE};
use super::error::ConfigError;
use crate::logger::Logger;

/// The distinguished byte that introduces a reference (`@` by default)
///
/// Always a single ASCII punctuation character that is neither `{` nor `}`,
/// so it can never split a UTF-8 sequence or collide with the long form.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Marker(u8);

impl Marker {
    /// Validate `ch` as a marker
    pub fn new(ch: char) -> Result<Self, ConfigError> {
        if !ch.is_ascii_punctuation() || [OPEN_BRACE, CLOSE_BRACE].contains(&(ch as u8)) {
            return Err(ConfigError::InvalidMarker {
                marker: ch.to_string(),
            });
        }
        Ok(Self(ch as u8))
    }

    pub fn as_byte(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(self.0)
    }
}

impl Default for Marker {
    fn default() -> Self {
        Self(DEFAULT_MARKER)
    }
}

impl TryFrom<String> for Marker {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Marker::new(ch),
            _ => Err(ConfigError::InvalidMarker { marker: value }),
        }
    }
}

impl fmt::Debug for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Marker({:?})", self.as_char())
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Substituter configuration
///
/// Loadable from TOML; the logger can only be attached in code.
///
/// ```toml
/// lenient = true
/// marker = "$"
/// ```
#[derive(Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SubstConfig {
    /// Accept templates with syntax errors. Diagnostics are then logged at
    /// `warn` instead of `error` level and the offending references are
    /// left out of the compiled template.
    pub lenient: bool,

    /// Byte introducing a reference
    pub marker: Marker,

    /// Sink for parse diagnostics. `None` selects the built-in stderr logger.
    /// Logging happens only during parsing.
    #[serde(skip)]
    pub logger: Option<Arc<dyn Logger>>,
}

impl SubstConfig {
    pub fn with_lenient(mut self, lenient: bool) -> Self {
        self.lenient = lenient;
        self
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

impl fmt::Debug for SubstConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubstConfig")
            .field("lenient", &self.lenient)
            .field("marker", &self.marker)
            .field("logger", &self.logger.as_ref().map(|_| "<custom>"))
            .finish()
    }
}
