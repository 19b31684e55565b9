//! Driving loop over a sample source.
//!
//! Reads samples until end of input or a fatal read error. Rejected rows are
//! counted, logged and skipped; accepted samples go to the caller's callback
//! and into the running statistics. A fatal error mid-stream ends the loop but
//! keeps everything accumulated before it.

use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

use crate::config::ReaderConfig;
use crate::error::{Result, SampleError};
use crate::models::Person;
use crate::parser::{ParseStats, ReadOutcome, SampleReader};
use crate::source::LineSource;
use crate::statistics::{Statistics, Summary};

/// Everything one processing run produced
#[derive(Debug, Default)]
pub struct ProcessingReport {
    /// Header line as read, without terminator
    pub header: String,

    /// Running statistics over accepted samples
    pub statistics: Statistics,

    /// Accept/reject counters and diagnostics
    pub parse_stats: ParseStats,

    /// Fatal error that stopped the loop before end of input
    pub aborted: Option<SampleError>,

    /// Failure releasing the input; does not affect the results
    pub close_error: Option<SampleError>,

    /// Wall-clock time spent in the run
    pub processing_time: Duration,
}

impl ProcessingReport {
    /// Final statistics, `None` when no sample was accepted
    pub fn summary(&self) -> Option<Summary> {
        self.statistics.summarize()
    }

    /// True when the input was read through to its end
    pub fn completed(&self) -> bool {
        self.aborted.is_none()
    }
}

/// Read every remaining sample from `reader`, calling `on_sample` for each accepted one
pub fn process_samples<S, F>(reader: &mut SampleReader<S>, mut on_sample: F) -> ProcessingReport
where
    S: LineSource,
    F: FnMut(&Person),
{
    let start_time = Instant::now();
    let mut report = ProcessingReport::default();

    info!("Started processing");

    loop {
        match reader.read_sample() {
            Ok(ReadOutcome::Sample(person)) => {
                debug!("Sample read: {}", person);
                on_sample(&person);
                report.statistics.update(&person);
                report.parse_stats.record_parsed(person.name_truncated);
            }
            Ok(ReadOutcome::Rejected(rejected)) => {
                warn!(
                    "Skipping line {}: {}",
                    rejected.line_number, rejected.error
                );
                report.parse_stats.record_skipped(&rejected);
            }
            Ok(ReadOutcome::EndOfInput) => {
                info!("No more samples to read");
                break;
            }
            Err(e) => {
                error!("Aborting: {}", e);
                report.aborted = Some(e);
                break;
            }
        }
    }

    report.processing_time = start_time.elapsed();
    info!(
        "Finished processing: {} samples accepted, {} rejected",
        report.parse_stats.records_parsed, report.parse_stats.records_skipped
    );

    report
}

/// Open, read and close a sample file.
///
/// Configuration, open and header failures are returned as errors before any
/// sample is processed. Failures after that point end up in the report.
pub fn process_file<F>(path: &Path, config: ReaderConfig, on_sample: F) -> Result<ProcessingReport>
where
    F: FnMut(&Person),
{
    info!("Reading samples from {}", path.display());

    let start_time = Instant::now();
    let mut reader = SampleReader::open(path, config)?;

    // Dropping the reader on the error path releases the file
    let header = reader.read_header()?;
    info!("CSV header read: {}", header);

    let mut report = process_samples(&mut reader, on_sample);
    report.header = header;

    if let Err(e) = reader.close() {
        error!("Failed to close {}: {}", path.display(), e);
        report.close_error = Some(e);
    }

    report.processing_time = start_time.elapsed();
    Ok(report)
}
