//! Command implementation for the sample reader CLI
//!
//! Wires arguments to configuration, runs the reading loop over the input
//! file and renders the final report.

use crate::cli::args::{Args, OutputFormat};
use crate::processor::{ProcessingReport, process_file};
use anyhow::{Context, Result};
use colored::*;
use indicatif::HumanDuration;
use tracing::{debug, info};

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_directive()));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", args.get_log_level());
}

/// Run the reader over the input file and print the report
pub fn run(args: Args) -> Result<ProcessingReport> {
    let config = args
        .reader_config()
        .context("Failed to load reader configuration")?;

    let report = process_file(&args.input, config, |person| {
        info!("Sample read: {}", person);
    })
    .with_context(|| format!("Cannot process samples from {}", args.input.display()))?;

    generate_final_report(args.output_format, &report)?;
    Ok(report)
}

/// Generate final processing report
pub fn generate_final_report(format: OutputFormat, report: &ProcessingReport) -> Result<()> {
    match format {
        OutputFormat::Human => {
            print!("{}", human_report(report));
            Ok(())
        }
        OutputFormat::Json => {
            println!("{}", json_report(report)?);
            Ok(())
        }
        OutputFormat::Csv => {
            print!("{}", csv_report(report));
            Ok(())
        }
    }
}

/// Human-readable report
pub fn human_report(report: &ProcessingReport) -> String {
    let stats = &report.parse_stats;
    let mut out = String::new();

    out.push_str(&format!("\n{}\n", "Sample Processing Summary".bright_green().bold()));
    out.push_str(&format!(
        "  {} {}\n",
        "Lines read:".bright_cyan(),
        stats.total_records
    ));
    out.push_str(&format!(
        "  {} {} ({:.1}%)\n",
        "Samples accepted:".bright_cyan(),
        stats.records_parsed.to_string().bright_white().bold(),
        stats.success_rate()
    ));
    out.push_str(&format!(
        "  {} {}\n",
        "Samples rejected:".bright_cyan(),
        stats.records_skipped
    ));
    if stats.names_truncated > 0 {
        out.push_str(&format!(
            "  {} {}\n",
            "Names truncated:".bright_yellow(),
            stats.names_truncated
        ));
    }
    out.push_str(&format!(
        "  {} {}\n",
        "Processing time:".bright_cyan(),
        HumanDuration(report.processing_time)
    ));

    match report.summary() {
        Some(summary) => {
            out.push_str(&format!("\n{}\n", "Statistics".bright_green().bold()));
            out.push_str(&format!(
                "  age: min: {}, max: {}, mean: {:.2}\n",
                summary.age.min, summary.age.max, summary.age.mean
            ));
            out.push_str(&format!(
                "  height: min: {}, max: {}, mean: {:.2}\n",
                summary.height.min, summary.height.max, summary.height.mean
            ));
        }
        None => out.push_str(&format!("\n{}\n", "No samples accepted".bright_yellow())),
    }

    if !stats.errors.is_empty() {
        out.push_str(&format!("\n{}\n", "Rejected lines:".bright_yellow()));
        for message in &stats.errors {
            out.push_str(&format!("  • {}\n", message));
        }
        if stats.errors_omitted() > 0 {
            out.push_str(&format!("  ... and {} more\n", stats.errors_omitted()));
        }
    }

    if let Some(error) = &report.aborted {
        out.push_str(&format!("\n{} {}\n", "Aborted:".bright_red().bold(), error));
    }
    if let Some(error) = &report.close_error {
        out.push_str(&format!("{} {}\n", "Warning:".bright_yellow(), error));
    }

    out
}

/// JSON report for machine consumption
pub fn json_report(report: &ProcessingReport) -> Result<String> {
    let value = serde_json::json!({
        "header": report.header,
        "completed": report.completed(),
        "parse_stats": report.parse_stats,
        "errors_omitted": report.parse_stats.errors_omitted(),
        "summary": report.summary(),
        "aborted": report.aborted.as_ref().map(|e| e.to_string()),
        "close_error": report.close_error.as_ref().map(|e| e.to_string()),
        "processing_time_seconds": report.processing_time.as_secs_f64(),
    });

    serde_json::to_string_pretty(&value).context("Failed to serialize report")
}

/// CSV report for data analysis
pub fn csv_report(report: &ProcessingReport) -> String {
    let stats = &report.parse_stats;
    let mut out = String::from("metric,value\n");

    out.push_str(&format!("lines_read,{}\n", stats.total_records));
    out.push_str(&format!("samples_accepted,{}\n", stats.records_parsed));
    out.push_str(&format!("samples_rejected,{}\n", stats.records_skipped));
    out.push_str(&format!("names_truncated,{}\n", stats.names_truncated));

    if let Some(summary) = report.summary() {
        out.push_str(&format!("age_min,{}\n", summary.age.min));
        out.push_str(&format!("age_max,{}\n", summary.age.max));
        out.push_str(&format!("age_mean,{}\n", summary.age.mean));
        out.push_str(&format!("height_min,{}\n", summary.height.min));
        out.push_str(&format!("height_max,{}\n", summary.height.max));
        out.push_str(&format!("height_mean,{}\n", summary.height.mean));
    }

    out.push_str(&format!(
        "processing_time_seconds,{}\n",
        report.processing_time.as_secs_f64()
    ));
    out
}
