//! Zero-copy field splitting for a single line
//!
//! The splitter walks a borrowed [`Line`] with a monotonically advancing
//! cursor and hands out [`FieldSlice`] views into it. No field is copied
//! until a decoder commits it to a typed value.

use crate::constants::LINE_TERMINATORS;
use crate::error::RowError;
use crate::source::Line;

/// Non-owning view of one field within a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSlice<'a> {
    offset: usize,
    bytes: &'a [u8],
}

impl<'a> FieldSlice<'a> {
    pub fn new(offset: usize, bytes: &'a [u8]) -> Self {
        Self { offset, bytes }
    }

    /// Byte offset of the field within its line
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Cursor over the fields of one line
#[derive(Debug, Clone)]
pub struct FieldSplitter<'a> {
    line: Line<'a>,
    separator: u8,
    first: usize,
    finished: bool,
}

impl<'a> FieldSplitter<'a> {
    pub fn new(line: Line<'a>, separator: u8) -> Self {
        Self {
            line,
            separator,
            first: 0,
            finished: false,
        }
    }

    /// Current cursor position
    pub fn position(&self) -> usize {
        self.first
    }

    /// Fail with [`RowError::MalformedLine`] if the line was cut at the
    /// buffer capacity, whether or not the cut has been reached yet
    pub fn ensure_complete(&self) -> Result<(), RowError> {
        if self.line.is_truncated() {
            return Err(RowError::MalformedLine {
                capacity: self.line.capacity(),
            });
        }
        Ok(())
    }

    /// Next field, `Ok(None)` once the line is exhausted.
    ///
    /// A line that was cut at the buffer capacity has no terminator to stop
    /// at, so reaching its end is a [`RowError::MalformedLine`] rather than
    /// the end of the last field.
    pub fn next_field(&mut self) -> Result<Option<FieldSlice<'a>>, RowError> {
        let bytes = self.line.as_bytes();
        if self.finished || self.first >= bytes.len() {
            self.finished = true;
            return Ok(None);
        }

        let rest = &bytes[self.first..];
        match rest
            .iter()
            .position(|&b| b == self.separator || LINE_TERMINATORS.contains(&b))
        {
            Some(len) => {
                let field = FieldSlice::new(self.first, &rest[..len]);
                if rest[len] != self.separator {
                    self.finished = true;
                }
                self.first += len + 1;
                Ok(Some(field))
            }
            None if self.line.is_truncated() => {
                self.finished = true;
                Err(RowError::MalformedLine {
                    capacity: self.line.capacity(),
                })
            }
            None => {
                let field = FieldSlice::new(self.first, rest);
                self.first = bytes.len();
                self.finished = true;
                Ok(Some(field))
            }
        }
    }
}

impl<'a> Iterator for FieldSplitter<'a> {
    type Item = Result<FieldSlice<'a>, RowError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_field().transpose()
    }
}
