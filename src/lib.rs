//! Sample Stats Library
//!
//! A streaming reader for delimited `name,age,height` sample files that
//! computes running statistics over every row it can parse.
//!
//! This library provides tools for:
//! - Bounded, reusable line buffering over any byte stream
//! - Zero-copy field splitting with explicit malformed-line detection
//! - Typed field decoding with configurable truncation and overflow policies
//! - A reading loop that skips bad rows and stops on I/O failures
//! - Order-independent min/max/mean statistics

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod parser;
pub mod processor;
pub mod source;
pub mod statistics;

// Re-export commonly used types
pub use config::{IntegerOverflow, NameOverflow, ReaderConfig};
pub use error::{FieldError, Result, RowError, SampleError};
pub use models::Person;
pub use processor::{ProcessingReport, process_file, process_samples};
pub use source::{LineSource, OpenMode, ReaderSource, SampleFile};
pub use statistics::{Statistics, Summary};
