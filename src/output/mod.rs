//! Report sinks for duplicate scan results.
//!
//! A sink consumes a finished [`ScanReport`](crate::duplicates::ScanReport)
//! and renders it somewhere: the console for humans, a flat path log for
//! downstream tooling. Sinks are passed into the application boundary
//! explicitly rather than held as ambient state, so alternate renderers
//! are a matter of implementing [`ReportSink`].

pub mod console;
pub mod log_file;

// Re-export main types
pub use console::ConsoleReport;
pub use log_file::{DuplicateLog, LogLayout};

use crate::duplicates::ScanReport;

/// Destination for a finished scan report.
pub trait ReportSink {
    /// Render the report to this sink.
    ///
    /// Must not mutate report content.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the underlying destination fails.
    fn write_report(&mut self, report: &ScanReport) -> std::io::Result<()>;
}
