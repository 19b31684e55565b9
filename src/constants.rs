//! Application constants for the sample reader
//!
//! Default values used to build a [`crate::config::ReaderConfig`]. Nothing in
//! the library reads these directly; they only seed configuration.

// =============================================================================
// Input Format
// =============================================================================

/// Default field separator
pub const DEFAULT_SEPARATOR: char = ',';

/// Bytes that terminate a line (`\r` covers CRLF input)
pub const LINE_TERMINATORS: &[u8] = b"\r\n";

// =============================================================================
// Buffer Capacities
// =============================================================================

/// Default line buffer capacity in bytes, terminator included
pub const DEFAULT_LINE_CAPACITY: usize = 256;

/// Default name capacity in bytes, one byte reserved for the terminator slot
pub const DEFAULT_NAME_CAPACITY: usize = 50;

/// Smallest capacity accepted for either buffer
pub const MIN_CAPACITY: usize = 2;

// =============================================================================
// Field Names
// =============================================================================

pub mod fields {
    pub const NAME: &str = "name";
    pub const AGE: &str = "age";
    pub const HEIGHT: &str = "height";
}

// =============================================================================
// Diagnostics
// =============================================================================

/// Rejection messages kept per run; later rejections are only counted
pub const MAX_RECORDED_ERRORS: usize = 100;

// =============================================================================
// Logging
// =============================================================================

/// Log target used for the default `EnvFilter` directive
pub const LOG_TARGET: &str = "sample_stats";
