//! Resolution of tokens against the variable table

use std::collections::HashMap;

use super::binding::Evaluator;
use super::compiled::{Replacement, Substitution, VarRef};
use super::tokenize::{TokenKind, TokenStream};
use crate::config::Marker;
use crate::logger::{Level, Logger};
use crate::template::error::{Diagnostic, DiagnosticKind};

pub(crate) type Variables<C> = HashMap<Box<str>, Evaluator<C>>;

/// Everything a single scan produced
pub(crate) struct Scan<'a, C> {
    pub substitutions: Vec<Substitution<'a, C>>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Scan `text` once, resolving every reference
///
/// Each problem is logged at `level` as soon as it is found and also
/// returned. The span of an undefined reference is recorded as omitted, so
/// a lenient template drops it from the output.
pub(crate) fn scan<'a, C>(
    text: &'a str,
    marker: Marker,
    variables: &'a Variables<C>,
    level: Level,
    logger: &dyn Logger,
) -> Scan<'a, C> {
    let mut substitutions = Vec::new();
    let mut diagnostics = Vec::new();

    for token in TokenStream::new(text, marker) {
        let kind = match token.kind {
            TokenKind::Escape => {
                substitutions.push(Substitution {
                    begin: token.start,
                    end: token.end,
                    replacement: Replacement::Marker,
                });
                continue;
            }
            TokenKind::Reference { name } => match variables.get_key_value(name) {
                Some((name, eval)) => {
                    substitutions.push(Substitution {
                        begin: token.start,
                        end: token.end,
                        replacement: Replacement::Variable(VarRef { name, eval }),
                    });
                    continue;
                }
                None => DiagnosticKind::UndefinedVariable {
                    name: name.to_string(),
                    excerpt: token.excerpt(text).to_string(),
                },
            },
            TokenKind::UnterminatedMarker => DiagnosticKind::UnterminatedMarker,
            TokenKind::UnterminatedBrace => DiagnosticKind::UnterminatedBrace,
        };

        // Only an undefined reference loses its span; a stray `@` or `@{`
        // stays in the literal text.
        if matches!(kind, DiagnosticKind::UndefinedVariable { .. }) {
            substitutions.push(Substitution {
                begin: token.start,
                end: token.end,
                replacement: Replacement::Omit,
            });
        }

        let diagnostic = Diagnostic {
            kind,
            offset: token.start,
            marker: marker.as_char(),
        };
        logger.log(level, &diagnostic.to_string());
        diagnostics.push(diagnostic);
    }

    Scan {
        substitutions,
        diagnostics,
    }
}
