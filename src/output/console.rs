//! Human-readable console rendering of a scan report.
//!
//! Renders each duplicate group in order with its index, size metrics,
//! and member paths, followed by a cumulative summary and the elapsed
//! scan time. Consecutive groups alternate tint so their boundaries stay
//! readable in long reports.

use std::io::{self, Write};

use bytesize::ByteSize;
use yansi::Paint;

use crate::duplicates::ScanReport;

use super::ReportSink;

/// Console renderer for scan reports.
pub struct ConsoleReport<W: Write> {
    writer: W,
    color: bool,
}

impl ConsoleReport<io::Stdout> {
    /// Create a renderer writing to stdout.
    #[must_use]
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> ConsoleReport<W> {
    /// Create a renderer writing to an arbitrary writer.
    #[must_use]
    pub fn new(writer: W, color: bool) -> Self {
        Self { writer, color }
    }
}

impl<W: Write> ReportSink for ConsoleReport<W> {
    fn write_report(&mut self, report: &ScanReport) -> io::Result<()> {
        if report.groups.is_empty() {
            writeln!(self.writer, "No duplicate files found.")?;
        } else {
            writeln!(
                self.writer,
                "Found {} groups of files that are duplicates:",
                report.groups.len()
            )?;
            writeln!(self.writer)?;
        }

        for (idx, group) in report.groups.iter().enumerate() {
            let header = format!(
                "Group {} | File Size: {} | Total Space: {} | Potential Savings: {}",
                idx + 1,
                ByteSize::b(group.size),
                ByteSize::b(group.total_size()),
                ByteSize::b(group.potential_savings()),
            );
            if self.color {
                writeln!(self.writer, "{}", header.bold())?;
            } else {
                writeln!(self.writer, "{header}")?;
            }

            let dim_group = idx % 2 == 1;
            for file in &group.files {
                if self.color && dim_group {
                    writeln!(self.writer, "{}", file.path.display().dim())?;
                } else {
                    writeln!(self.writer, "{}", file.path.display())?;
                }
            }
            writeln!(self.writer)?;
        }

        let summary = &report.summary;
        writeln!(
            self.writer,
            "Total space occupied by duplicates: {} | Potential savings: {}",
            ByteSize::b(summary.occupied_space),
            ByteSize::b(summary.reclaimable_space),
        )?;
        if !summary.scan_errors.is_empty() {
            writeln!(
                self.writer,
                "{} file(s) could not be read and were excluded.",
                summary.scan_errors.len()
            )?;
        }
        writeln!(
            self.writer,
            "Execution time: {:.2} seconds.",
            summary.scan_duration.as_secs_f64()
        )?;

        self.writer.flush()
    }
}
