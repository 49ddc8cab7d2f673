//! Compiled templates and the expansion interpreter

use std::fmt;
use std::io::{self, Write};

use super::binding::Evaluator;
use super::output::Output;
use crate::config::Marker;
use crate::template::error::Diagnostic;

/// A resolved variable: its name in the table and its evaluator
pub(crate) struct VarRef<'a, C> {
    pub name: &'a str,
    pub eval: &'a Evaluator<C>,
}

impl<C> Clone for VarRef<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for VarRef<'_, C> {}

/// What replaces a substitution's span at expansion
pub(crate) enum Replacement<'a, C> {
    /// `@@`: one literal marker
    Marker,
    Variable(VarRef<'a, C>),
    /// An undefined reference tolerated by a lenient parse; expands to nothing
    Omit,
}

impl<C> Clone for Replacement<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Replacement<'_, C> {}

/// One marker occurrence, `[begin, end)` in the template text
pub(crate) struct Substitution<'a, C> {
    pub begin: usize,
    pub end: usize,
    pub replacement: Replacement<'a, C>,
}

impl<C> Clone for Substitution<'_, C> {
    fn clone(&self) -> Self {
        Self {
            begin: self.begin,
            end: self.end,
            replacement: self.replacement,
        }
    }
}

/// Public view of a substitution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    pub begin: usize,
    pub end: usize,
    /// Name of the resolved variable, `None` for an escaped marker
    pub variable: Option<&'a str>,
}

/// A parsed template
///
/// Immutable once built. Borrows the text it was parsed from and the
/// variable table of the substituter that parsed it, so it can be expanded
/// any number of times, from any number of threads, without re-parsing.
pub struct Template<'a, C> {
    text: &'a str,
    marker: Marker,
    substitutions: Vec<Substitution<'a, C>>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a, C> Template<'a, C> {
    pub(crate) fn new(
        text: &'a str,
        marker: Marker,
        substitutions: Vec<Substitution<'a, C>>,
        diagnostics: Vec<Diagnostic>,
    ) -> Self {
        Self {
            text,
            marker,
            substitutions,
            diagnostics,
        }
    }

    /// Expand into `out`
    ///
    /// Literal text is copied verbatim, each reference is replaced by its
    /// variable's output and each `@@` by a single marker. Undefined
    /// references tolerated by a lenient parse produce no output at all. A stray
    /// marker or unclosed `@{` is copied as literal text. The sink's format
    /// is captured before every evaluator call and put back afterwards,
    /// whether the evaluator succeeded or not. The first write error aborts
    /// the expansion and is returned.
    pub fn expand(&self, out: &mut Output<'_>, ctx: &C) -> io::Result<()> {
        let mut cursor = 0;
        for subst in &self.substitutions {
            out.write_str(&self.text[cursor..subst.begin])?;
            match subst.replacement {
                Replacement::Variable(var) => {
                    let saved = out.format();
                    let result = (var.eval)(out, ctx);
                    out.set_format(saved);
                    result?;
                }
                Replacement::Marker => out.write_bytes(&[self.marker.as_byte()])?,
                Replacement::Omit => {}
            }
            cursor = subst.end;
        }
        out.write_str(&self.text[cursor..])
    }

    /// Expand into any writer, starting from the default format
    pub fn expand_to_writer<W: Write>(&self, writer: &mut W, ctx: &C) -> io::Result<()> {
        let mut out = Output::new(writer);
        self.expand(&mut out, ctx)
    }

    /// Expand into a new string
    ///
    /// Uses the default format, which does not depend on locale or any
    /// other process state, so equal contexts always give equal strings.
    pub fn expand_to_string(&self, ctx: &C) -> io::Result<String> {
        let mut buf = Vec::with_capacity(self.text.len());
        self.expand_to_writer(&mut buf, ctx)?;
        String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Whether any reference in this template resolves to `name`
    ///
    /// Lets callers skip computing context values nobody will print.
    pub fn refers_to(&self, name: &str) -> bool {
        self.substitutions.iter().any(|s| match s.replacement {
            Replacement::Variable(var) => var.name == name,
            _ => false,
        })
    }

    /// The text this template was parsed from
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Substitutions in text order
    ///
    /// Undefined references dropped by a lenient parse are not listed.
    pub fn substitutions(&self) -> impl Iterator<Item = Span<'a>> + '_ {
        self.substitutions
            .iter()
            .filter_map(|s| {
                let variable = match s.replacement {
                    Replacement::Variable(var) => Some(var.name),
                    Replacement::Marker => None,
                    Replacement::Omit => return None,
                };
                Some(Span {
                    begin: s.begin,
                    end: s.end,
                    variable,
                })
            })
    }

    /// Problems tolerated by a lenient parse; always empty in strict mode
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

impl<C> Clone for Template<'_, C> {
    fn clone(&self) -> Self {
        Self {
            text: self.text,
            marker: self.marker,
            substitutions: self.substitutions.clone(),
            diagnostics: self.diagnostics.clone(),
        }
    }
}

impl<C> fmt::Debug for Template<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Template")
            .field("text", &self.text)
            .field("substitutions", &self.substitutions().collect::<Vec<_>>())
            .field("diagnostics", &self.diagnostics)
            .finish()
    }
}
