use clap::Parser;
use sample_stats::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    commands::setup_logging(&args);

    match commands::run(args) {
        Ok(report) if report.completed() => {
            // Rejected rows and close failures have already been reported
            process::exit(0);
        }
        Ok(_) => {
            // Read failure mid-stream; the partial report was printed
            process::exit(1);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
