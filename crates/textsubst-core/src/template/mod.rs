//! Template module - parse-once, expand-many text substitution
//!
//! A [`Substituter`] owns a table of named variables. Parsing a text against
//! it yields a [`Template`] that records where each reference sits and which
//! variable it resolved to, so expanding it again with fresh context values
//! costs no re-parsing.
//!
//! ## Syntax
//!
//! - `@{name}`: reference to `name` (any text except `}`)
//! - `@x`: short form for a one-character name
//! - `@@`: a literal `@`
//!
//! A trailing `@`, an unclosed `@{`, and references to undefined names are
//! parse errors. The marker byte is configurable (see [`SubstConfig`](crate::SubstConfig)).
//!
//! ## Example
//!
//! ```
//! use textsubst_core::{Binding, Substituter};
//!
//! #[derive(Default)]
//! struct CtxA { y: i32 }
//! #[derive(Default)]
//! struct CtxB { x: i32 }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut subst: Substituter<(CtxA, CtxB)> = Substituter::default();
//! subst.define("x", Binding::field(|b: &CtxB| &b.x))?;
//! subst.define("y", Binding::custom(|out, ctx: &(CtxA, CtxB)| out.put(&ctx.0.y)))?;
//!
//! let template = subst.parse("<@x:@y>")?;
//! let mut ctx = (CtxA::default(), CtxB::default());
//! let mut lines = Vec::new();
//! for _ in 0..3 {
//!     lines.push(template.expand_to_string(&ctx)?);
//!     ctx.0.y += 1;
//!     ctx.1.x += 2;
//! }
//! assert_eq!(lines, ["<0:0>", "<2:1>", "<4:2>"]);
//! # Ok(())
//! # }
//! ```

pub mod engine;
pub mod error;

pub use engine::{
    Align, Binding, Format, Output, Select, Slot0, Slot1, Slot2, Slot3, Slot4, Slot5, Span,
    Substituter, Template, Whole,
};
pub use error::{Diagnostic, DiagnosticKind, ParseError, SetupError};
