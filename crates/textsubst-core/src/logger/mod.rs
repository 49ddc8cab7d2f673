//! Diagnostic sinks
//!
//! A [`Logger`] receives the problems found while parsing a template. The
//! severity is chosen by the substituter: `error` in strict mode, `warn` in
//! lenient mode. Expansion never logs.

use std::fmt;
use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};

/// Severity of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Trace,
    Debug,
    Detail,
    Info,
    Warn,
    Error,
    Fatal,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Detail => "detail",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Fatal => "fatal",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Level> for log::Level {
    fn from(level: Level) -> Self {
        match level {
            Level::Trace => log::Level::Trace,
            Level::Debug | Level::Detail => log::Level::Debug,
            Level::Info => log::Level::Info,
            Level::Warn => log::Level::Warn,
            Level::Error | Level::Fatal => log::Level::Error,
        }
    }
}

/// Receiver of parse diagnostics
pub trait Logger: Send + Sync {
    fn log(&self, level: Level, message: &str);
}

impl<L: Logger + ?Sized> Logger for &L {
    fn log(&self, level: Level, message: &str) {
        (**self).log(level, message)
    }
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
    fn log(&self, level: Level, message: &str) {
        (**self).log(level, message)
    }
}

/// Writes `<level>: <message>` lines to standard error
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrLogger;

impl Logger for StderrLogger {
    fn log(&self, level: Level, message: &str) {
        let stderr = std::io::stderr();
        let mut handle = stderr.lock();
        // Nowhere left to report a failing stderr.
        let _ = writeln!(handle, "{}: {}", level, message);
    }
}

/// Logger used by every substituter configured without one
pub static DEFAULT_LOGGER: StderrLogger = StderrLogger;

/// Forwards diagnostics to the `log` facade under the `textsubst` target
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFacadeLogger;

impl Logger for LogFacadeLogger {
    fn log(&self, level: Level, message: &str) {
        log::log!(target: "textsubst", level.into(), "{}", message);
    }
}

/// Keeps every diagnostic in memory
///
/// Useful for hosts that present diagnostics themselves, and for tests.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    entries: Mutex<Vec<(Level, String)>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded diagnostics, oldest first
    pub fn entries(&self) -> Vec<(Level, String)> {
        self.lock().clone()
    }

    /// Recorded messages without their levels
    pub fn messages(&self) -> Vec<String> {
        self.lock().iter().map(|(_, message)| message.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(Level, String)>> {
        // A panic while pushing cannot leave the vector half-updated.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Logger for MemoryLogger {
    fn log(&self, level: Level, message: &str) {
        self.lock().push((level, message.to_string()));
    }
}
