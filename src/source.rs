//! Line source: bounded line reads from a byte stream.
//!
//! A [`LineSource`] fills a reusable [`LineBuffer`] with one physical line per
//! call. The buffer never grows past its capacity; when a line does not fit,
//! the stored prefix is kept, the rest of the line is consumed and the buffer
//! is flagged as truncated so the field splitter can reject it.

use crate::error::{Result, SampleError};
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Outcome of one [`LineSource::read_line`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStatus {
    /// A line (possibly empty or truncated) is in the buffer
    Read,
    /// The stream is exhausted; the buffer is empty
    EndOfStream,
}

/// Anything that can hand out one line at a time
pub trait LineSource {
    fn read_line(&mut self, buffer: &mut LineBuffer) -> io::Result<LineStatus>;
}

/// Fixed-capacity line storage reused across reads
#[derive(Debug, Clone)]
pub struct LineBuffer {
    bytes: Vec<u8>,
    capacity: usize,
    truncated: bool,
}

impl LineBuffer {
    /// Create a buffer holding at most `capacity` bytes, terminator included
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
            capacity,
            truncated: false,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// View of the current line
    pub fn line(&self) -> Line<'_> {
        Line {
            bytes: &self.bytes,
            truncated: self.truncated,
            capacity: self.capacity,
        }
    }

    pub fn clear(&mut self) {
        self.bytes.clear();
        self.truncated = false;
    }

    /// Append bytes up to the capacity, flagging anything dropped
    pub fn push(&mut self, chunk: &[u8]) {
        let room = self.capacity - self.bytes.len();
        if chunk.len() > room {
            self.bytes.extend_from_slice(&chunk[..room]);
            self.truncated = true;
        } else {
            self.bytes.extend_from_slice(chunk);
        }
    }
}

/// Borrowed view of one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    bytes: &'a [u8],
    truncated: bool,
    capacity: usize,
}

impl<'a> Line<'a> {
    /// A complete line, as read from a stream that fit the buffer
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            truncated: false,
            capacity: bytes.len(),
        }
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

    /// True when the physical line was longer than the buffer capacity
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Line text without its terminator, lossily decoded for logging
    pub fn display(&self) -> String {
        let end = self
            .bytes
            .iter()
            .rposition(|b| !matches!(b, b'\n' | b'\r'))
            .map_or(0, |i| i + 1);
        String::from_utf8_lossy(&self.bytes[..end]).into_owned()
    }
}

/// [`LineSource`] over any buffered reader
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn read_line(&mut self, buffer: &mut LineBuffer) -> io::Result<LineStatus> {
        read_bounded_line(&mut self.reader, buffer)
    }
}

/// Read up to and including the next `\n`, keeping at most the buffer capacity
fn read_bounded_line<R: BufRead>(reader: &mut R, buffer: &mut LineBuffer) -> io::Result<LineStatus> {
    buffer.clear();
    let mut consumed_any = false;

    loop {
        let available = match reader.fill_buf() {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };

        if available.is_empty() {
            return Ok(if consumed_any {
                LineStatus::Read
            } else {
                LineStatus::EndOfStream
            });
        }

        let (used, found_newline) = match available.iter().position(|&b| b == b'\n') {
            Some(i) => (i + 1, true),
            None => (available.len(), false),
        };
        buffer.push(&available[..used]);
        reader.consume(used);
        consumed_any = true;

        if found_newline {
            return Ok(LineStatus::Read);
        }
    }
}

/// Access mode for [`SampleFile::open`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    Read,
    Write,
}

impl OpenMode {
    fn as_str(&self) -> &'static str {
        match self {
            OpenMode::Read => "reading",
            OpenMode::Write => "writing",
        }
    }
}

#[derive(Debug)]
enum Handle {
    Reader(BufReader<File>),
    Writer(BufWriter<File>),
}

/// Sample file handle
///
/// The underlying file is released when the handle is dropped; [`close`]
/// releases it explicitly and reports flush failures.
///
/// [`close`]: SampleFile::close
#[derive(Debug)]
pub struct SampleFile {
    path: PathBuf,
    handle: Handle,
}

impl SampleFile {
    /// Open a sample file for reading, or create/truncate it for writing
    pub fn open(path: impl AsRef<Path>, mode: OpenMode) -> Result<Self> {
        let path = path.as_ref();
        let file = match mode {
            OpenMode::Read => File::open(path),
            OpenMode::Write => OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(path),
        }
        .map_err(|e| SampleError::open(path, e))?;

        debug!("Opened {} for {}", path.display(), mode.as_str());

        let handle = match mode {
            OpenMode::Read => Handle::Reader(BufReader::new(file)),
            OpenMode::Write => Handle::Writer(BufWriter::new(file)),
        };

        Ok(Self {
            path: path.to_path_buf(),
            handle,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mode(&self) -> OpenMode {
        match self.handle {
            Handle::Reader(_) => OpenMode::Read,
            Handle::Writer(_) => OpenMode::Write,
        }
    }

    /// Write one line followed by `\n`
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        match &mut self.handle {
            Handle::Writer(writer) => writeln!(writer, "{}", line).map_err(SampleError::Write),
            Handle::Reader(_) => Err(SampleError::WrongMode {
                mode: OpenMode::Read.as_str(),
            }),
        }
    }

    /// Flush pending output and release the file
    pub fn close(self) -> Result<()> {
        match self.handle {
            Handle::Reader(_) => {}
            Handle::Writer(writer) => {
                let file = writer
                    .into_inner()
                    .map_err(|e| SampleError::Close(e.into_error()))?;
                file.sync_all().map_err(SampleError::Close)?;
            }
        }

        debug!("Closed {}", self.path.display());
        Ok(())
    }
}

impl LineSource for SampleFile {
    fn read_line(&mut self, buffer: &mut LineBuffer) -> io::Result<LineStatus> {
        match &mut self.handle {
            Handle::Reader(reader) => read_bounded_line(reader, buffer),
            Handle::Writer(_) => Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "sample file was opened for writing",
            )),
        }
    }
}
