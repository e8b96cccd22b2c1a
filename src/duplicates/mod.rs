//! Duplicate detection pipeline.
//!
//! Two-phase grouping: files are partitioned by exact byte length first
//! (cheap metadata comparison), then each surviving size group is
//! partitioned by full-content fingerprint (the expensive operation).
//! Singleton partitions are discarded at both phases, so a file whose
//! length is unique in the scan is never read at all.

pub mod finder;
pub mod groups;

// Re-export main types
pub use finder::{
    group_by_fingerprint, DuplicateFinder, FinderConfig, FinderError, ScanReport, ScanSummary,
};
pub use groups::{group_by_size, DuplicateGroup, GroupingStats, SizeGroup};
