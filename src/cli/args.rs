//! Command-line argument definitions for the sample reader
//!
//! This module defines the CLI interface using the clap derive API.

use crate::config::{IntegerOverflow, NameOverflow, ReaderConfig};
use crate::constants::LOG_TARGET;
use crate::error::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the sample statistics tool
///
/// Reads a `name,age,height` file, skips rows that cannot be parsed and
/// reports min/max/mean of age and height over the rest.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "sample-stats",
    version,
    about = "Compute age and height statistics from a name,age,height CSV file",
    long_about = "Streams a delimited sample file line by line. The first line is a header and is \
                  skipped. Rows that cannot be parsed are reported and skipped; I/O failures stop \
                  the run. Statistics are printed for every accepted row."
)]
pub struct Args {
    /// Input sample file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path to configuration file
    ///
    /// JSON file with any of: separator, line_capacity, name_capacity,
    /// name_overflow, integer_overflow. Command-line flags take precedence.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (JSON format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Field separator
    #[arg(short = 's', long = "separator", value_name = "CHAR")]
    pub separator: Option<char>,

    /// Line buffer capacity in bytes, terminator included
    #[arg(long = "line-capacity", value_name = "BYTES")]
    pub line_capacity: Option<usize>,

    /// Name capacity in bytes; names keep one byte less than this
    #[arg(long = "name-capacity", value_name = "BYTES")]
    pub name_capacity: Option<usize>,

    /// What to do with names longer than the name capacity
    #[arg(long = "long-names", value_enum, value_name = "POLICY")]
    pub long_names: Option<NameOverflow>,

    /// What to do with ages or heights that overflow
    #[arg(long = "overflow", value_enum, value_name = "POLICY")]
    pub overflow: Option<IntegerOverflow>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for the final report
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,
}

/// Output format options for the final report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

impl Args {
    /// Log level from verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Default `EnvFilter` directive for this crate
    pub fn log_directive(&self) -> String {
        format!("{}={}", LOG_TARGET, self.get_log_level())
    }

    /// Build the reader configuration: defaults, then config file, then flags
    pub fn reader_config(&self) -> Result<ReaderConfig> {
        let mut config = match &self.config_file {
            Some(path) => ReaderConfig::from_file(path)?,
            None => ReaderConfig::default(),
        };

        if let Some(separator) = self.separator {
            config = config.with_separator(separator);
        }
        if let Some(capacity) = self.line_capacity {
            config = config.with_line_capacity(capacity);
        }
        if let Some(capacity) = self.name_capacity {
            config = config.with_name_capacity(capacity);
        }
        if let Some(policy) = self.long_names {
            config = config.with_name_overflow(policy);
        }
        if let Some(policy) = self.overflow {
            config = config.with_integer_overflow(policy);
        }

        config.validate()?;
        Ok(config)
    }
}
