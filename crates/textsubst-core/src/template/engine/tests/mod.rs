//! Tests for the substitution engine
//!
//! Organized into focused submodules.

use super::*;

// Test helper functions
mod helpers;

// Parsing tests
mod parse;

mod render_escaping;
