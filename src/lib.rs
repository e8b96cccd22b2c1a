//! dupescan - Duplicate File Finder
//!
//! Scans a directory tree, groups files by content equality using BLAKE3
//! fingerprints, and reports sets of duplicate files along with the disk
//! space that could be reclaimed by keeping one copy of each.

pub mod cli;
pub mod duplicates;
pub mod error;
pub mod logging;
pub mod output;
pub mod scanner;

use crate::cli::Cli;
use crate::duplicates::{DuplicateFinder, FinderConfig};
use crate::error::ExitCode;
use crate::output::{ConsoleReport, DuplicateLog, ReportSink};
use crate::scanner::WalkerConfig;

/// Run the application logic for already-parsed CLI arguments.
///
/// Builds the finder from the CLI configuration, runs the scan, and fans
/// the resulting report out to the configured sinks (console always, the
/// duplicate log when requested).
///
/// # Errors
///
/// Returns an error if the target path cannot be scanned at all (missing
/// or not a directory) or if a sink fails to write. Per-file read failures
/// are not errors here; they are carried inside the report.
pub fn run_app(cli: Cli) -> anyhow::Result<ExitCode> {
    let walker_config = WalkerConfig::new(cli.recurse, Some(cli.filter.clone()));
    let config = FinderConfig::default()
        .with_io_threads(cli.io_threads)
        .with_walker_config(walker_config);
    let finder = DuplicateFinder::new(config);

    let report = finder.find_duplicates(&cli.path)?;

    let mut sinks: Vec<Box<dyn ReportSink>> =
        vec![Box::new(ConsoleReport::stdout(!cli.no_color))];
    if let Some(ref path) = cli.duplicate_log {
        sinks.push(Box::new(DuplicateLog::new(path.clone(), cli.log_layout)));
    }
    for sink in &mut sinks {
        sink.write_report(&report)?;
    }

    Ok(ExitCode::from_report(&report))
}
