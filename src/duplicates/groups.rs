//! Size-based grouping and duplicate group types.
//!
//! # Overview
//!
//! Size grouping is the first phase of duplicate detection. It partitions
//! files by their exact byte length, eliminating every file whose length
//! is unique since files of different sizes cannot be duplicates. This is
//! the entire rationale for the two-phase design: comparing lengths is
//! O(1) metadata work, while fingerprinting reads whole files.
//!
//! Group order is discovery order (first file seen with a given length
//! opens that length's group), never hash-map iteration order, so the
//! final report is reproducible for a fixed filesystem snapshot.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::scanner::{fingerprint_to_hex, FileRecord, Fingerprint};

/// A group of files with the same byte length.
#[derive(Debug, Clone)]
pub struct SizeGroup {
    /// File size in bytes (shared by all files in this group)
    pub size: u64,
    /// Files with this exact size, in discovery order
    pub files: Vec<FileRecord>,
}

impl SizeGroup {
    /// Create a size group with initial files.
    #[must_use]
    pub fn with_files(size: u64, files: Vec<FileRecord>) -> Self {
        Self { size, files }
    }

    /// Add a file to this group.
    pub fn add(&mut self, file: FileRecord) {
        debug_assert_eq!(
            file.size, self.size,
            "File size {} doesn't match group size {}",
            file.size, self.size
        );
        self.files.push(file);
    }

    /// Number of files in this group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if this group is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Check if this group can still contain duplicates (2+ files).
    #[must_use]
    pub fn has_candidates(&self) -> bool {
        self.files.len() > 1
    }
}

/// Confirmed group of content-identical files.
///
/// Every member shares the same fingerprint and, transitively, the same
/// byte length. Created by the fingerprint grouper, consumed once by the
/// report sinks, then discarded; nothing persists across runs.
#[derive(Debug, Clone)]
pub struct DuplicateGroup {
    /// BLAKE3 fingerprint shared by all members
    pub fingerprint: Fingerprint,
    /// File size in bytes (shared by all members)
    pub size: u64,
    /// Member files, in discovery order
    pub files: Vec<FileRecord>,
}

impl DuplicateGroup {
    /// Create a new duplicate group.
    #[must_use]
    pub fn new(fingerprint: Fingerprint, size: u64, files: Vec<FileRecord>) -> Self {
        Self {
            fingerprint,
            size,
            files,
        }
    }

    /// Number of files in this group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if this group is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Total space occupied by all members.
    #[must_use]
    pub fn total_size(&self) -> u64 {
        self.size * self.files.len() as u64
    }

    /// Space reclaimable by keeping exactly one copy.
    #[must_use]
    pub fn potential_savings(&self) -> u64 {
        self.total_size().saturating_sub(self.size)
    }

    /// Number of redundant copies (total minus one original).
    #[must_use]
    pub fn duplicate_count(&self) -> usize {
        self.files.len().saturating_sub(1)
    }

    /// Fingerprint as a hexadecimal string.
    #[must_use]
    pub fn fingerprint_hex(&self) -> String {
        fingerprint_to_hex(&self.fingerprint)
    }

    /// Get just the paths of files in this group.
    #[must_use]
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.iter().map(|f| f.path.clone()).collect()
    }
}

/// Statistics from the size grouping phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupingStats {
    /// Total number of files processed
    pub total_files: usize,
    /// Total size of all files in bytes
    pub total_size: u64,
    /// Number of distinct non-zero file sizes
    pub unique_sizes: usize,
    /// Number of files that could still be duplicates (in groups of 2+)
    pub potential_duplicates: usize,
    /// Number of files eliminated as unique (singleton length classes)
    pub eliminated_unique: usize,
    /// Number of zero-length files (excluded from grouping)
    pub empty_files: usize,
    /// Number of size groups with 2+ files
    pub candidate_groups: usize,
}

impl GroupingStats {
    /// Percentage of files eliminated by size grouping.
    #[must_use]
    pub fn elimination_rate(&self) -> f64 {
        if self.total_files == 0 {
            0.0
        } else {
            (self.eliminated_unique as f64 / self.total_files as f64) * 100.0
        }
    }
}

/// Group files by size (Phase 1 of duplicate detection).
///
/// Zero-length files are dropped up front: every empty file would
/// trivially "match" every other empty file, which is excluded as noise.
/// Remaining files are partitioned by exact byte length, and only
/// partitions with 2+ members survive: singleton length classes cannot
/// contain duplicates and discarding them here avoids wasted hashing.
///
/// Groups come back in discovery order.
///
/// # Example
///
/// ```
/// use dupescan::scanner::FileRecord;
/// use dupescan::duplicates::group_by_size;
/// use std::path::PathBuf;
///
/// let files = vec![
///     FileRecord::new(PathBuf::from("/a.txt"), 100),
///     FileRecord::new(PathBuf::from("/b.txt"), 100),
///     FileRecord::new(PathBuf::from("/c.txt"), 200),
/// ];
///
/// let (groups, stats) = group_by_size(files);
///
/// // Only the 100-byte group is returned (has 2 files)
/// assert_eq!(groups.len(), 1);
/// assert_eq!(groups[0].size, 100);
/// assert_eq!(stats.eliminated_unique, 1);
/// ```
#[must_use]
pub fn group_by_size(
    files: impl IntoIterator<Item = FileRecord>,
) -> (Vec<SizeGroup>, GroupingStats) {
    let mut index: HashMap<u64, usize> = HashMap::new();
    let mut groups: Vec<SizeGroup> = Vec::new();
    let mut stats = GroupingStats::default();

    for file in files {
        stats.total_files += 1;
        stats.total_size += file.size;

        if file.size == 0 {
            stats.empty_files += 1;
            log::debug!("Skipping empty file: {}", file.path.display());
            continue;
        }

        match index.entry(file.size) {
            Entry::Occupied(slot) => groups[*slot.get()].add(file),
            Entry::Vacant(slot) => {
                slot.insert(groups.len());
                let size = file.size;
                groups.push(SizeGroup::with_files(size, vec![file]));
            }
        }
    }

    stats.unique_sizes = groups.len();

    groups.retain(|group| {
        if group.len() == 1 {
            stats.eliminated_unique += 1;
            log::trace!(
                "Eliminated unique size {}: {}",
                group.size,
                group.files[0].path.display()
            );
            false
        } else {
            stats.potential_duplicates += group.len();
            stats.candidate_groups += 1;
            true
        }
    });

    log::info!(
        "Size grouping: {} files -> {} potential duplicates in {} groups ({:.1}% eliminated)",
        stats.total_files,
        stats.potential_duplicates,
        stats.candidate_groups,
        stats.elimination_rate()
    );

    (groups, stats)
}
