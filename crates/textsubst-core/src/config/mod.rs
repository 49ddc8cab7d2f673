//! Substituter configuration: leniency, marker byte and diagnostic sink

pub mod consts;
mod error;
mod model;

pub use error::ConfigError;
pub use model::{Marker, SubstConfig};
