// Core modules
pub mod config;
pub mod error;
pub mod logger;
pub mod template;

// Re-export commonly used types
pub use config::{ConfigError, Marker, SubstConfig};
pub use error::{Result, TextsubstError};
pub use logger::{Level, LogFacadeLogger, Logger, MemoryLogger, StderrLogger, DEFAULT_LOGGER};
pub use template::{
    Align, Binding, Diagnostic, DiagnosticKind, Format, Output, ParseError, Select, SetupError,
    Slot0, Slot1, Slot2, Slot3, Slot4, Slot5, Span, Substituter, Template, Whole,
};
