//! Sample reader orchestration
//!
//! One call to [`SampleReader::read_sample`] reads one line and runs it
//! through the splitter, decoders and record assembler. The return type
//! carries the failure policy: row-level problems come back inside
//! `Ok(ReadOutcome::Rejected(..))`, while `Err` is always fatal.

use std::path::Path;
use tracing::{debug, error, warn};

use super::field_splitter::FieldSplitter;
use super::record_parser::parse_person_record;
use crate::config::ReaderConfig;
use crate::error::{Result, RowError, SampleError};
use crate::models::Person;
use crate::source::{LineBuffer, LineSource, LineStatus, OpenMode, SampleFile};

/// A data line that was discarded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedSample {
    /// 1-based line number within the input, header included
    pub line_number: usize,
    pub error: RowError,
}

/// Result of one [`SampleReader::read_sample`] call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Sample(Person),
    Rejected(RejectedSample),
    EndOfInput,
}

/// Reads the header and then one sample per call from a [`LineSource`]
#[derive(Debug)]
pub struct SampleReader<S> {
    source: S,
    buffer: LineBuffer,
    config: ReaderConfig,
    line_number: usize,
}

impl SampleReader<SampleFile> {
    /// Validate the configuration and open a sample file for reading
    pub fn open(path: impl AsRef<Path>, config: ReaderConfig) -> Result<Self> {
        config.validate()?;
        let file = SampleFile::open(path, OpenMode::Read)?;
        Self::new(file, config)
    }

    /// Release the underlying file
    pub fn close(self) -> Result<()> {
        self.source.close()
    }
}

impl<S: LineSource> SampleReader<S> {
    /// Build a reader over `source`; fails with
    /// [`SampleError::Configuration`] when `config` does not validate
    pub fn new(source: S, config: ReaderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            source,
            buffer: LineBuffer::with_capacity(config.line_capacity),
            config,
            line_number: 0,
        })
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Number of lines read so far
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn into_source(self) -> S {
        self.source
    }

    /// Read the header line; it is returned as text and never split
    pub fn read_header(&mut self) -> Result<String> {
        match self.next_line()? {
            LineStatus::Read => {
                let header = self.buffer.line().display();
                debug!("Header read: {}", header);
                Ok(header)
            }
            LineStatus::EndOfStream => Err(SampleError::EmptyInput),
        }
    }

    /// Read and parse the next data line
    pub fn read_sample(&mut self) -> Result<ReadOutcome> {
        if self.next_line()? == LineStatus::EndOfStream {
            debug!("Reached end of input after {} lines", self.line_number);
            return Ok(ReadOutcome::EndOfInput);
        }

        let line = self.buffer.line();
        debug!("Line {} read: {}", self.line_number, line.display());

        let mut splitter = FieldSplitter::new(line, self.config.separator_byte());
        match parse_person_record(&mut splitter, &self.config) {
            Ok(person) => {
                if person.name_truncated {
                    warn!(
                        "Line {}: name truncated to {} bytes: {}",
                        self.line_number,
                        self.config.max_name_len(),
                        person.name
                    );
                }
                Ok(ReadOutcome::Sample(person))
            }
            Err(error) => Ok(ReadOutcome::Rejected(RejectedSample {
                line_number: self.line_number,
                error,
            })),
        }
    }

    fn next_line(&mut self) -> Result<LineStatus> {
        match self.source.read_line(&mut self.buffer) {
            Ok(LineStatus::Read) => {
                self.line_number += 1;
                Ok(LineStatus::Read)
            }
            Ok(LineStatus::EndOfStream) => Ok(LineStatus::EndOfStream),
            Err(e) => {
                let line = self.line_number + 1;
                error!("Failed reading line {}: {}", line, e);
                Err(SampleError::read(line, e))
            }
        }
    }
}
