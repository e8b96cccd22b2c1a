//! Duplicate-path log artifact for downstream tooling.
//!
//! Writes only the member paths of each duplicate group, one path per
//! line, so the artifact can be consumed by cleanup scripts. The layout
//! is operator-chosen: flat, or with one blank line separating groups.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::duplicates::ScanReport;

use super::ReportSink;

/// Layout of the duplicate log artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLayout {
    /// All duplicate paths, one per line
    Flat,
    /// One group's members per contiguous block, blank line between groups
    Grouped,
}

/// Sink that persists duplicate file paths to a log file.
#[derive(Debug)]
pub struct DuplicateLog {
    path: PathBuf,
    layout: LogLayout,
}

impl DuplicateLog {
    /// Create a log sink writing to `path`.
    #[must_use]
    pub fn new(path: PathBuf, layout: LogLayout) -> Self {
        Self { path, layout }
    }
}

impl ReportSink for DuplicateLog {
    fn write_report(&mut self, report: &ScanReport) -> io::Result<()> {
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);

        for (idx, group) in report.groups.iter().enumerate() {
            if self.layout == LogLayout::Grouped && idx > 0 {
                writeln!(writer)?;
            }
            for file in &group.files {
                writeln!(writer, "{}", file.path.display())?;
            }
        }

        writer.flush()?;
        log::info!(
            "Wrote {} duplicate path(s) to {}",
            report.groups.iter().map(|g| g.len()).sum::<usize>(),
            self.path.display()
        );
        Ok(())
    }
}
