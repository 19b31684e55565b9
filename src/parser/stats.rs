//! Parsing statistics
//!
//! Counters for how many data lines were read, accepted and rejected, with
//! a diagnostic string for each of the first [`MAX_RECORDED_ERRORS`]
//! rejections.

use super::reader::RejectedSample;
use crate::constants::MAX_RECORDED_ERRORS;

/// Simple parsing statistics
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Total number of data lines encountered (header excluded)
    pub total_records: usize,

    /// Number of samples successfully parsed
    pub records_parsed: usize,

    /// Number of lines discarded due to row-level errors
    pub records_skipped: usize,

    /// Number of accepted samples whose name was truncated
    pub names_truncated: usize,

    /// Messages for the first rejected lines, at most [`MAX_RECORDED_ERRORS`]
    pub errors: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_parsed(&mut self, name_truncated: bool) {
        self.total_records += 1;
        self.records_parsed += 1;
        if name_truncated {
            self.names_truncated += 1;
        }
    }

    pub fn record_skipped(&mut self, rejected: &RejectedSample) {
        self.total_records += 1;
        self.records_skipped += 1;
        if self.errors.len() < MAX_RECORDED_ERRORS {
            self.errors
                .push(format!("line {}: {}", rejected.line_number, rejected.error));
        }
    }

    /// Rejections counted but not kept in `errors`
    pub fn errors_omitted(&self) -> usize {
        self.records_skipped.saturating_sub(self.errors.len())
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_records == 0 {
            0.0
        } else {
            (self.records_parsed as f64 / self.total_records as f64) * 100.0
        }
    }
}
