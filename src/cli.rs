//! Command-line interface definitions for dupescan.
//!
//! This module defines all CLI arguments using the clap derive API. The
//! tool is single-purpose, so there are no subcommands: every option feeds
//! the one scan pipeline.
//!
//! # Example
//!
//! ```bash
//! # Scan the current directory
//! dupescan
//!
//! # Scan recursively, only considering text files
//! dupescan ~/Documents --recurse --filter "*.txt"
//!
//! # Also dump duplicate paths for downstream tooling
//! dupescan ~/Documents -r --duplicate-log dupes.txt
//! ```

use clap::Parser;
use std::path::PathBuf;

use crate::output::LogLayout;

/// Find duplicate files by content and report potential space savings.
///
/// dupescan groups files by exact byte length first, then confirms
/// duplicates with full-content BLAKE3 fingerprints, so files that cannot
/// possibly match are never read.
#[derive(Debug, Parser)]
#[command(name = "dupescan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory which will be searched for duplicate files
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// Filter pattern for target files (e.g. *.txt)
    #[arg(short, long, value_name = "PATTERN", default_value = "*", value_parser = parse_filter)]
    pub filter: glob::Pattern,

    /// Search recursively through all subdirectories
    #[arg(short, long)]
    pub recurse: bool,

    /// Increase verbosity (-v progress/timing, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress everything except errors and the final report
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write only the duplicate file paths to this file
    ///
    /// The resulting artifact can be fed to cleanup scripts.
    #[arg(long, value_name = "PATH")]
    pub duplicate_log: Option<PathBuf>,

    /// Layout of the duplicate log
    #[arg(long, value_enum, default_value = "flat", requires = "duplicate_log")]
    pub log_layout: LogLayout,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,

    /// Number of I/O threads for fingerprinting (default: 4)
    ///
    /// Lower values reduce disk thrashing on HDDs.
    #[arg(long, value_name = "N", default_value = "4")]
    pub io_threads: usize,
}

/// Parse and validate a filename filter pattern.
///
/// # Errors
///
/// Returns an error if the pattern is not a valid glob.
pub fn parse_filter(s: &str) -> Result<glob::Pattern, String> {
    glob::Pattern::new(s).map_err(|e| format!("invalid filter pattern '{s}': {e}"))
}
