//! Configuration management and validation.
//!
//! Buffer capacities and decoding policies are runtime values passed into the
//! reader rather than compile-time constants, so boundary sizes can be
//! exercised directly.

use crate::constants::{
    DEFAULT_LINE_CAPACITY, DEFAULT_NAME_CAPACITY, DEFAULT_SEPARATOR, LINE_TERMINATORS,
    MIN_CAPACITY,
};
use crate::error::{Result, SampleError};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// What to do with a name longer than the name capacity allows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NameOverflow {
    /// Keep the leading bytes and flag the record as truncated
    #[default]
    Truncate,
    /// Reject the row
    Reject,
}

/// What to do with an integer literal outside the target range
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum IntegerOverflow {
    /// Reject the row with an overflow error
    #[default]
    Fail,
    /// Clamp to the nearest representable value
    Saturate,
}

/// Reader configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Field separator, a single ASCII character
    pub separator: char,

    /// Line buffer capacity in bytes, terminator included
    pub line_capacity: usize,

    /// Name capacity in bytes; names keep at most `name_capacity - 1` bytes
    pub name_capacity: usize,

    /// Over-length name policy
    pub name_overflow: NameOverflow,

    /// Integer overflow policy for age and height
    pub integer_overflow: IntegerOverflow,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            line_capacity: DEFAULT_LINE_CAPACITY,
            name_capacity: DEFAULT_NAME_CAPACITY,
            name_overflow: NameOverflow::default(),
            integer_overflow: IntegerOverflow::default(),
        }
    }
}

impl ReaderConfig {
    /// Load configuration from a JSON file; missing keys take their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SampleError::configuration(format!("cannot read {}: {}", path.display(), e))
        })?;

        let config: Self = serde_json::from_str(&content).map_err(|e| {
            SampleError::configuration(format!("invalid config {}: {}", path.display(), e))
        })?;

        debug!("Loaded configuration from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Set the field separator
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Set the line buffer capacity
    pub fn with_line_capacity(mut self, capacity: usize) -> Self {
        self.line_capacity = capacity;
        self
    }

    /// Set the name capacity
    pub fn with_name_capacity(mut self, capacity: usize) -> Self {
        self.name_capacity = capacity;
        self
    }

    /// Set the over-length name policy
    pub fn with_name_overflow(mut self, policy: NameOverflow) -> Self {
        self.name_overflow = policy;
        self
    }

    /// Set the integer overflow policy
    pub fn with_integer_overflow(mut self, policy: IntegerOverflow) -> Self {
        self.integer_overflow = policy;
        self
    }

    /// Separator as a byte; only meaningful after [`validate`](Self::validate)
    pub fn separator_byte(&self) -> u8 {
        self.separator as u8
    }

    /// Largest number of name bytes a record can hold
    pub fn max_name_len(&self) -> usize {
        self.name_capacity.saturating_sub(1)
    }

    /// Check the configuration before any file is opened
    pub fn validate(&self) -> Result<()> {
        if !self.separator.is_ascii() {
            return Err(SampleError::configuration(format!(
                "separator {:?} is not an ASCII character",
                self.separator
            )));
        }

        if LINE_TERMINATORS.contains(&self.separator_byte()) {
            return Err(SampleError::configuration(
                "separator cannot be a line terminator",
            ));
        }

        if self.line_capacity < MIN_CAPACITY {
            return Err(SampleError::configuration(format!(
                "line capacity must be at least {}, got {}",
                MIN_CAPACITY, self.line_capacity
            )));
        }

        if self.name_capacity < MIN_CAPACITY {
            return Err(SampleError::configuration(format!(
                "name capacity must be at least {}, got {}",
                MIN_CAPACITY, self.name_capacity
            )));
        }

        Ok(())
    }
}
