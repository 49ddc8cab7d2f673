//! Syntax constants shared by the tokenizer and configuration

/// Marker byte introducing a reference when none is configured
pub const DEFAULT_MARKER: u8 = b'@';

/// Opens the long reference form `@{name}`
pub const OPEN_BRACE: u8 = b'{';

/// Closes the long reference form `@{name}`
pub const CLOSE_BRACE: u8 = b'}';
