//! Substitution engine implementation

mod binding;
mod compiled;
mod output;
mod parse;
mod tokenize;

use std::collections::hash_map::Entry;
use std::fmt;
use std::sync::Arc;

use crate::config::{Marker, SubstConfig};
use crate::logger::{Level, Logger, DEFAULT_LOGGER};
use crate::template::error::{ParseError, SetupError};

pub use binding::{Binding, Select, Slot0, Slot1, Slot2, Slot3, Slot4, Slot5, Whole};
pub use compiled::{Span, Template};
pub use output::{Align, Format, Output};

use parse::{scan, Variables};

/// Variable table plus parse settings
///
/// `C` is the context every template of this substituter is expanded
/// against, typically a tuple such as `(Clock, Peer)`.
///
/// Variables are defined up front through `&mut self`; parsing and
/// expansion only need `&self`, so once setup is done the substituter can
/// be shared between threads.
pub struct Substituter<C> {
    lenient: bool,
    marker: Marker,
    logger: Option<Arc<dyn Logger>>,
    variables: Variables<C>,
}

impl<C> Substituter<C> {
    pub fn new(config: SubstConfig) -> Self {
        Self {
            lenient: config.lenient,
            marker: config.marker,
            logger: config.logger,
            variables: Variables::new(),
        }
    }

    /// Bind `name` to `binding`
    ///
    /// Defining a name twice is a configuration error, reported the same
    /// way in lenient and strict mode.
    pub fn define(
        &mut self,
        name: impl Into<String>,
        binding: Binding<C>,
    ) -> Result<(), SetupError> {
        match self.variables.entry(name.into().into_boxed_str()) {
            Entry::Occupied(entry) => Err(SetupError::DuplicateVariable {
                name: entry.key().to_string(),
            }),
            Entry::Vacant(entry) => {
                log::debug!("defined substitution variable `{}`", entry.key());
                entry.insert(binding.eval);
                Ok(())
            }
        }
    }

    pub fn is_defined(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Defined names, sorted
    pub fn variable_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.variables.keys().map(|k| &**k).collect();
        names.sort_unstable();
        names
    }

    pub fn is_lenient(&self) -> bool {
        self.lenient
    }

    pub fn marker(&self) -> Marker {
        self.marker
    }

    fn logger(&self) -> &dyn Logger {
        match &self.logger {
            Some(logger) => logger.as_ref(),
            None => &DEFAULT_LOGGER,
        }
    }

    /// Parse `text`, reporting problems to the configured logger
    pub fn parse<'a>(&'a self, text: &'a str) -> Result<Template<'a, C>, ParseError> {
        self.parse_with_logger(text, self.logger())
    }

    /// Parse `text`, reporting problems to `logger` instead
    ///
    /// In strict mode any problem fails the parse. In lenient mode problems
    /// are logged as warnings, the offending references are dropped, and
    /// the template is still returned.
    pub fn parse_with_logger<'a>(
        &'a self,
        text: &'a str,
        logger: &dyn Logger,
    ) -> Result<Template<'a, C>, ParseError> {
        let level = if self.lenient {
            Level::Warn
        } else {
            Level::Error
        };
        let scanned = scan(text, self.marker, &self.variables, level, logger);
        log::trace!(
            "parsed template of {} bytes: {} substitutions, {} problems",
            text.len(),
            scanned.substitutions.len(),
            scanned.diagnostics.len()
        );

        if !scanned.diagnostics.is_empty() && !self.lenient {
            return Err(ParseError::new(scanned.diagnostics));
        }
        Ok(Template::new(
            text,
            self.marker,
            scanned.substitutions,
            scanned.diagnostics,
        ))
    }

    /// Parse and expand once
    ///
    /// Callers expanding the same text repeatedly should keep the result of
    /// [`parse`](Self::parse) instead.
    pub fn expand(&self, text: &str, out: &mut Output<'_>, ctx: &C) -> crate::Result<()> {
        let template = self.parse(text)?;
        template.expand(out, ctx)?;
        Ok(())
    }
}

impl<C> Default for Substituter<C> {
    fn default() -> Self {
        Self::new(SubstConfig::default())
    }
}

impl<C> fmt::Debug for Substituter<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Substituter")
            .field("lenient", &self.lenient)
            .field("marker", &self.marker)
            .field("variables", &self.variable_names())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
