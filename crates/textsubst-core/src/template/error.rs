//! Template error types

use std::fmt;
use thiserror::Error;

/// Errors raised while defining variables
///
/// These are configuration mistakes. They are reported regardless of
/// leniency and the substituter should not be used for parsing afterwards.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("Multiple definitions for same variable name `{name}`")]
    DuplicateVariable { name: String },
}

/// What went wrong at one reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Marker is the last byte of the text
    UnterminatedMarker,

    /// `@{` without a closing `}`
    UnterminatedBrace,

    /// Reference to a name that was never defined
    UndefinedVariable {
        /// The referenced name
        name: String,
        /// The full reference as written, e.g. `@{name}`
        excerpt: String,
    },
}

/// A problem found while parsing, located at the marker that started it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Byte offset of the marker in the template text
    pub offset: usize,
    pub(crate) marker: char,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::UnterminatedMarker => {
                write!(f, "Unterminated `{}` at end of text", self.marker)
            }
            DiagnosticKind::UnterminatedBrace => {
                write!(f, "Unterminated `{}{{`", self.marker)
            }
            DiagnosticKind::UndefinedVariable { name, excerpt } => {
                write!(
                    f,
                    "Undefined variable `{}` in substitution `{}`",
                    name, excerpt
                )
            }
        }
    }
}

/// Template rejected in strict mode
///
/// Holds every diagnostic from the failed parse, in text order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    diagnostics: Vec<Diagnostic>,
}

impl ParseError {
    pub(crate) fn new(diagnostics: Vec<Diagnostic>) -> Self {
        debug_assert!(!diagnostics.is_empty());
        Self { diagnostics }
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.diagnostics.as_slice() {
            [] => write!(f, "Failed to parse template"),
            [only] => write!(f, "Failed to parse template: {}", only),
            [first, rest @ ..] => write!(
                f,
                "Failed to parse template: {} (and {} more)",
                first,
                rest.len()
            ),
        }
    }
}

impl std::error::Error for ParseError {}
