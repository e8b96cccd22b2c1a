//! Process exit codes.

use crate::duplicates::ScanReport;

/// Exit codes for the dupescan application.
///
/// - 0: Success (completed normally, duplicates found)
/// - 1: General error (unexpected failure, scan never ran)
/// - 2: No duplicates found (completed normally)
/// - 3: Partial success (completed with some non-fatal per-file errors)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success: Scan completed and duplicates were found.
    Success = 0,
    /// General error: An unexpected error occurred.
    GeneralError = 1,
    /// No duplicates: Scan completed but no duplicates were found.
    NoDuplicates = 2,
    /// Partial success: Scan completed but some files could not be read.
    PartialSuccess = 3,
}

impl ExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Map a finished scan report to its exit code.
    ///
    /// Per-file read failures take precedence: the report still reflects
    /// the readable subset, but the exit code records that the scan was
    /// incomplete.
    #[must_use]
    pub fn from_report(report: &ScanReport) -> Self {
        if !report.summary.scan_errors.is_empty() {
            Self::PartialSuccess
        } else if report.groups.is_empty() {
            Self::NoDuplicates
        } else {
            Self::Success
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duplicates::{DuplicateGroup, ScanReport, ScanSummary};
    use crate::scanner::{FileRecord, FingerprintError, ScanError};
    use std::path::PathBuf;

    fn report(groups: Vec<DuplicateGroup>, errors: Vec<ScanError>) -> ScanReport {
        ScanReport {
            groups,
            summary: ScanSummary {
                scan_errors: errors,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::NoDuplicates.as_i32(), 2);
        assert_eq!(ExitCode::PartialSuccess.as_i32(), 3);
    }

    #[test]
    fn test_from_report_no_duplicates() {
        assert_eq!(
            ExitCode::from_report(&report(Vec::new(), Vec::new())),
            ExitCode::NoDuplicates
        );
    }

    #[test]
    fn test_from_report_duplicates_found() {
        let group = DuplicateGroup::new(
            [0u8; 32],
            10,
            vec![
                FileRecord::new(PathBuf::from("/a"), 10),
                FileRecord::new(PathBuf::from("/b"), 10),
            ],
        );
        assert_eq!(
            ExitCode::from_report(&report(vec![group], Vec::new())),
            ExitCode::Success
        );
    }

    #[test]
    fn test_from_report_errors_win() {
        let err = ScanError::from(FingerprintError::NotFound(PathBuf::from("/gone")));
        assert_eq!(
            ExitCode::from_report(&report(Vec::new(), vec![err])),
            ExitCode::PartialSuccess
        );
    }
}
