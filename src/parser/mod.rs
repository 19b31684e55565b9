//! Streaming CSV parser for name/age/height samples
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`field_splitter`] - Zero-copy splitting of one line into field slices
//! - [`field_parsers`] - Decoding field slices into names and integers
//! - [`record_parser`] - Assembling three fields into a [`Person`](crate::Person)
//! - [`reader`] - Per-call orchestration and error classification
//! - [`stats`] - Accept/reject counters
//!
//! ## Usage
//!
//! ```rust
//! use std::io::Cursor;
//! use sample_stats::{ReaderConfig, ReaderSource};
//! use sample_stats::parser::{ReadOutcome, SampleReader};
//!
//! let input = "name,age,height\nAlice,30,170\n";
//! let source = ReaderSource::new(Cursor::new(input));
//! let mut reader = SampleReader::new(source, ReaderConfig::default())?;
//!
//! reader.read_header()?;
//! match reader.read_sample()? {
//!     ReadOutcome::Sample(person) => assert_eq!(person.age, 30),
//!     other => panic!("unexpected {:?}", other),
//! }
//! # Ok::<(), sample_stats::SampleError>(())
//! ```

pub mod field_parsers;
pub mod field_splitter;
pub mod reader;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
mod tests;

pub use field_parsers::{DecodedName, decode_name, parse_signed, parse_unsigned};
pub use field_splitter::{FieldSlice, FieldSplitter};
pub use reader::{ReadOutcome, RejectedSample, SampleReader};
pub use record_parser::parse_person_record;
pub use stats::ParseStats;
