//! Fingerprint grouping and scan orchestration.
//!
//! # Overview
//!
//! This module runs the duplicate detection pipeline:
//! 1. **Enumerate**: collect candidate files from the target directory
//! 2. **Phase 1 - Size grouping**: partition by byte length (see
//!    [`crate::duplicates::groups`])
//! 3. **Phase 2 - Fingerprinting**: hash the full content of same-size
//!    files in parallel and partition by fingerprint equality
//!
//! Fingerprinting is embarrassingly parallel: each file is read by
//! exactly one task with no shared mutable state, so size groups and the
//! files within them are mapped over a bounded rayon pool. Results are
//! collected in input order (never completion order) to keep the report
//! reproducible for a fixed filesystem snapshot.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use rayon::prelude::*;

use crate::scanner::{
    Blake3Fingerprinter, FileRecord, Fingerprint, Fingerprinter, ScanError, Walker, WalkerConfig,
};

use super::groups::{group_by_size, DuplicateGroup, SizeGroup};

/// Configuration for the duplicate finder.
#[derive(Debug, Clone)]
pub struct FinderConfig {
    /// Number of I/O threads for parallel fingerprinting.
    /// Default is 4 to prevent disk thrashing.
    pub io_threads: usize,
    /// Walker configuration for file enumeration.
    pub walker_config: WalkerConfig,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            io_threads: 4,
            walker_config: WalkerConfig::default(),
        }
    }
}

impl FinderConfig {
    /// Create a new configuration with custom I/O thread count.
    #[must_use]
    pub fn with_io_threads(mut self, threads: usize) -> Self {
        self.io_threads = threads.max(1);
        self
    }

    /// Set the walker configuration.
    #[must_use]
    pub fn with_walker_config(mut self, config: WalkerConfig) -> Self {
        self.walker_config = config;
        self
    }
}

/// Summary statistics from a duplicate scan.
#[derive(Debug, Default)]
pub struct ScanSummary {
    /// Total number of files enumerated
    pub total_files: usize,
    /// Total size of all enumerated files in bytes
    pub total_size: u64,
    /// Number of files eliminated by size grouping (unique lengths)
    pub eliminated_by_size: usize,
    /// Number of zero-length files excluded up front
    pub empty_files: usize,
    /// Number of confirmed duplicate groups
    pub duplicate_groups: usize,
    /// Number of redundant copies across all groups (excluding originals)
    pub duplicate_files: usize,
    /// Total space occupied by all members of all duplicate groups
    pub occupied_space: u64,
    /// Space reclaimable by keeping one copy per group
    pub reclaimable_space: u64,
    /// Wall-clock duration of the scan
    pub scan_duration: Duration,
    /// Non-fatal errors encountered during the scan
    pub scan_errors: Vec<ScanError>,
}

/// Complete output of one scan: ordered duplicate groups plus metrics.
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Duplicate groups in discovery order
    pub groups: Vec<DuplicateGroup>,
    /// Aggregate statistics
    pub summary: ScanSummary,
}

/// Errors that prevent a scan from starting.
///
/// Per-file failures never surface here; they are recovered locally and
/// accumulated in [`ScanSummary::scan_errors`].
#[derive(thiserror::Error, Debug)]
pub enum FinderError {
    /// The provided path does not exist.
    #[error("Target path not found: {0}")]
    PathNotFound(PathBuf),

    /// The provided path is not a directory.
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// Group one size class by content fingerprint (Phase 2).
///
/// Every member is fingerprinted in parallel; members whose
/// fingerprinting fails are excluded after the failure is surfaced.
/// Surviving members are partitioned by fingerprint equality in
/// first-occurrence order, and only partitions with 2+ members are
/// returned.
#[must_use]
pub fn group_by_fingerprint(
    group: SizeGroup,
    fingerprinter: &dyn Fingerprinter,
) -> (Vec<DuplicateGroup>, Vec<ScanError>) {
    let size = group.size;

    // Order-preserving parallel map: result i belongs to input file i.
    let results: Vec<(FileRecord, Result<Fingerprint, _>)> = group
        .files
        .into_par_iter()
        .map(|file| {
            let digest = fingerprinter.fingerprint(&file.path);
            (file, digest)
        })
        .collect();

    let mut index: HashMap<Fingerprint, usize> = HashMap::new();
    let mut buckets: Vec<(Fingerprint, Vec<FileRecord>)> = Vec::new();
    let mut errors = Vec::new();

    for (file, result) in results {
        match result {
            Ok(digest) => match index.entry(digest) {
                Entry::Occupied(slot) => buckets[*slot.get()].1.push(file),
                Entry::Vacant(slot) => {
                    slot.insert(buckets.len());
                    buckets.push((digest, vec![file]));
                }
            },
            Err(e) => {
                log::warn!("Skipping unreadable file {}: {}", file.path.display(), e);
                errors.push(ScanError::from(e));
            }
        }
    }

    let groups = buckets
        .into_iter()
        .filter(|(_, files)| files.len() > 1)
        .map(|(digest, files)| {
            log::debug!(
                "Duplicate group of {} files, {} bytes each",
                files.len(),
                size
            );
            DuplicateGroup::new(digest, size, files)
        })
        .collect();

    (groups, errors)
}

/// Duplicate finder that orchestrates the detection pipeline.
///
/// # Example
///
/// ```no_run
/// use dupescan::duplicates::{DuplicateFinder, FinderConfig};
/// use std::path::Path;
///
/// let finder = DuplicateFinder::new(FinderConfig::default());
/// let report = finder.find_duplicates(Path::new(".")).unwrap();
///
/// println!("Found {} duplicate groups", report.groups.len());
/// ```
pub struct DuplicateFinder {
    config: FinderConfig,
    fingerprinter: Arc<dyn Fingerprinter>,
}

impl DuplicateFinder {
    /// Create a new duplicate finder with the given configuration.
    #[must_use]
    pub fn new(config: FinderConfig) -> Self {
        Self {
            config,
            fingerprinter: Arc::new(Blake3Fingerprinter::new()),
        }
    }

    /// Create a new duplicate finder with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(FinderConfig::default())
    }

    /// Replace the fingerprinter implementation.
    ///
    /// Used by tests to instrument fingerprint computation.
    #[must_use]
    pub fn with_fingerprinter(mut self, fingerprinter: Arc<dyn Fingerprinter>) -> Self {
        self.fingerprinter = fingerprinter;
        self
    }

    /// Find all duplicate files under the given root directory.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError`] if the path does not exist or is not a
    /// directory. Per-file read failures do not abort the scan; they are
    /// reported through [`ScanSummary::scan_errors`].
    pub fn find_duplicates(&self, path: &Path) -> Result<ScanReport, FinderError> {
        let start = Instant::now();

        if !path.exists() {
            return Err(FinderError::PathNotFound(path.to_path_buf()));
        }
        if !path.is_dir() {
            return Err(FinderError::NotADirectory(path.to_path_buf()));
        }

        log::info!("Compiling list of files in {} ...", path.display());

        let walker = Walker::new(path, self.config.walker_config.clone());
        let mut files = Vec::new();
        let mut walk_errors = Vec::new();
        for result in walker.walk() {
            match result {
                Ok(file) => files.push(file),
                Err(e) => {
                    log::warn!("{e}");
                    walk_errors.push(e);
                }
            }
        }

        log::info!("Total files: {}. Searching for duplicates ...", files.len());

        let mut report = self.run_pipeline(files);
        // Traversal failures come first: they happened first.
        walk_errors.append(&mut report.summary.scan_errors);
        report.summary.scan_errors = walk_errors;
        report.summary.scan_duration = start.elapsed();

        log::info!(
            "Scan complete: {} duplicate groups, {} redundant files, {} reclaimable, {:.2}s",
            report.summary.duplicate_groups,
            report.summary.duplicate_files,
            bytesize::ByteSize::b(report.summary.reclaimable_space),
            report.summary.scan_duration.as_secs_f64()
        );

        Ok(report)
    }

    /// Find duplicates in a pre-collected list of files.
    ///
    /// Use this when the candidate set comes from another source than a
    /// directory walk. The returned report's duration covers only the
    /// grouping work.
    #[must_use]
    pub fn find_duplicates_from_files(&self, files: Vec<FileRecord>) -> ScanReport {
        let start = Instant::now();
        let mut report = self.run_pipeline(files);
        report.summary.scan_duration = start.elapsed();
        report
    }

    /// Size-group then fingerprint-group the candidate set.
    fn run_pipeline(&self, files: Vec<FileRecord>) -> ScanReport {
        let (size_groups, size_stats) = group_by_size(files);

        let mut summary = ScanSummary {
            total_files: size_stats.total_files,
            total_size: size_stats.total_size,
            eliminated_by_size: size_stats.eliminated_unique,
            empty_files: size_stats.empty_files,
            ..Default::default()
        };

        if size_groups.is_empty() {
            log::info!("No potential duplicates after size grouping");
            return ScanReport {
                groups: Vec::new(),
                summary,
            };
        }

        log::info!(
            "Fingerprinting {} files across {} size groups",
            size_stats.potential_duplicates,
            size_groups.len()
        );

        // Bounded pool keeps disk parallelism at io_threads; both the
        // per-group and per-file parallel maps run inside it. Collect is
        // order-preserving, so the report order matches discovery order.
        let fingerprinter = Arc::clone(&self.fingerprinter);
        let fingerprint_all = move || {
            size_groups
                .into_par_iter()
                .map(|group| group_by_fingerprint(group, fingerprinter.as_ref()))
                .collect::<Vec<_>>()
        };
        let per_group = match rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.io_threads)
            .build()
        {
            Ok(pool) => pool.install(fingerprint_all),
            Err(e) => {
                log::warn!("Failed to create I/O thread pool, using global pool: {e}");
                fingerprint_all()
            }
        };

        let mut groups = Vec::new();
        for (mut confirmed, mut errors) in per_group {
            groups.append(&mut confirmed);
            summary.scan_errors.append(&mut errors);
        }

        summary.duplicate_groups = groups.len();
        summary.duplicate_files = groups.iter().map(DuplicateGroup::duplicate_count).sum();
        summary.occupied_space = groups.iter().map(DuplicateGroup::total_size).sum();
        summary.reclaimable_space = groups.iter().map(DuplicateGroup::potential_savings).sum();

        ScanReport { groups, summary }
    }
}
