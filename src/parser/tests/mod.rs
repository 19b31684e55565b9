//! Test utilities for parser testing
//!
//! Shared helpers for building readers over in-memory input and sources that
//! fail part way through.

use std::collections::VecDeque;
use std::io::{self, Cursor};

use crate::config::ReaderConfig;
use crate::parser::SampleReader;
use crate::source::{LineBuffer, LineSource, LineStatus, ReaderSource};

mod reader_tests;
mod splitter_tests;

/// Reader over an in-memory string
pub fn reader_for(input: &str, config: ReaderConfig) -> SampleReader<ReaderSource<Cursor<Vec<u8>>>> {
    SampleReader::new(
        ReaderSource::new(Cursor::new(input.as_bytes().to_vec())),
        config,
    )
    .unwrap()
}

/// Source that yields the given lines, then fails with an I/O error
#[derive(Debug)]
pub struct FailingSource {
    lines: VecDeque<&'static str>,
}

impl FailingSource {
    pub fn new(lines: &[&'static str]) -> Self {
        Self {
            lines: lines.iter().copied().collect(),
        }
    }
}

impl LineSource for FailingSource {
    fn read_line(&mut self, buffer: &mut LineBuffer) -> io::Result<LineStatus> {
        buffer.clear();
        match self.lines.pop_front() {
            Some(line) => {
                buffer.push(line.as_bytes());
                Ok(LineStatus::Read)
            }
            None => Err(io::Error::new(io::ErrorKind::Other, "device unavailable")),
        }
    }
}
