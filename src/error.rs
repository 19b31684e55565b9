//! Error handling for sample reading operations.
//!
//! Errors are split by how far they are allowed to travel:
//! - [`FieldError`] describes why a single field could not be decoded
//! - [`RowError`] rejects one data line; the reading loop logs it and moves on
//! - [`SampleError`] ends the run (open, header, read and configuration failures)

use std::path::PathBuf;
use thiserror::Error;

/// Failure to decode one field slice into a typed value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("empty field")]
    EmptyField,

    #[error("invalid digit {byte:?} at position {position}")]
    InvalidDigit { byte: char, position: usize },

    #[error("value does not fit in {bits} bits")]
    Overflow { bits: u32 },

    #[error("field is not valid UTF-8")]
    InvalidUtf8,

    #[error("{len} bytes exceeds the limit of {max}")]
    TooLong { len: usize, max: usize },
}

/// Row-level failure: the line is discarded and processing continues
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("missing {field}")]
    MissingField { field: &'static str },

    #[error("invalid {field} '{value}': {source}")]
    InvalidField {
        field: &'static str,
        value: String,
        #[source]
        source: FieldError,
    },

    #[error("no terminator within {capacity} bytes")]
    MalformedLine { capacity: usize },
}

impl RowError {
    /// Create a missing field error
    pub fn missing(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Create an invalid field error, keeping a lossy copy of the raw bytes
    pub fn invalid(field: &'static str, raw: &[u8], source: FieldError) -> Self {
        Self::InvalidField {
            field,
            value: String::from_utf8_lossy(raw).into_owned(),
            source,
        }
    }
}

/// Fatal errors that stop a processing run
#[derive(Error, Debug)]
pub enum SampleError {
    #[error("cannot open sample file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed reading line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("empty sample file: no header line")]
    EmptyInput,

    #[error("failed writing sample file: {0}")]
    Write(#[source] std::io::Error),

    #[error("failed closing sample file: {0}")]
    Close(#[source] std::io::Error),

    #[error("sample file was opened for {mode}")]
    WrongMode { mode: &'static str },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl SampleError {
    /// Create an open error for the given path
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    /// Create a read error for the given 1-based line number
    pub fn read(line: usize, source: std::io::Error) -> Self {
        Self::Read { line, source }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SampleError>;
