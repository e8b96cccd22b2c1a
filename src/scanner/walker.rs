//! Directory walker for candidate file discovery.
//!
//! # Overview
//!
//! This module provides the [`Walker`] struct for traversing a directory
//! and collecting file metadata for duplicate detection. Entries are
//! visited in lexicographic order so discovery order (and therefore the
//! final report order) is reproducible for a fixed filesystem snapshot.
//!
//! Traversal errors are yielded as [`ScanError`] values rather than
//! stopping iteration: one unreadable entry must not abort the scan.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{FileRecord, ScanError, WalkerConfig};

/// Directory walker for deterministic file discovery.
#[derive(Debug)]
pub struct Walker {
    /// Root path to walk
    root: PathBuf,
    /// Walker configuration
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given path.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use dupescan::scanner::{Walker, WalkerConfig};
    /// use std::path::Path;
    ///
    /// let walker = Walker::new(Path::new("."), WalkerConfig::default());
    /// let files: Vec<_> = walker.walk().filter_map(Result::ok).collect();
    /// println!("Found {} files", files.len());
    /// ```
    #[must_use]
    pub fn new(path: &Path, config: WalkerConfig) -> Self {
        Self {
            root: path.to_path_buf(),
            config,
        }
    }

    /// Check if a path passes the filename filter.
    fn matches_filter(&self, path: &Path) -> bool {
        let Some(ref pattern) = self.config.filter else {
            return true;
        };
        path.file_name()
            .is_some_and(|name| pattern.matches(&name.to_string_lossy()))
    }

    /// Walk the directory tree, yielding file records.
    ///
    /// Returns an iterator over [`FileRecord`] results. Errors are yielded
    /// as [`ScanError`] values rather than stopping iteration. Symlinks
    /// are not followed; only regular files are yielded.
    pub fn walk(&self) -> impl Iterator<Item = Result<FileRecord, ScanError>> + '_ {
        let max_depth = if self.config.recurse { usize::MAX } else { 1 };

        WalkDir::new(&self.root)
            .max_depth(max_depth)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_map(move |entry_result| match entry_result {
                Ok(entry) => {
                    if !entry.file_type().is_file() {
                        return None;
                    }
                    if !self.matches_filter(entry.path()) {
                        log::trace!("Filtered out: {}", entry.path().display());
                        return None;
                    }
                    match entry.metadata() {
                        Ok(metadata) => {
                            Some(Ok(FileRecord::new(entry.into_path(), metadata.len())))
                        }
                        Err(e) => Some(Err(self.convert_error(e))),
                    }
                }
                Err(e) => Some(Err(self.convert_error(e))),
            })
    }

    /// Convert a walkdir error into a [`ScanError`].
    fn convert_error(&self, err: walkdir::Error) -> ScanError {
        let path = err
            .path()
            .map_or_else(|| self.root.clone(), Path::to_path_buf);
        let permission_denied = err
            .io_error()
            .is_some_and(|io| io.kind() == std::io::ErrorKind::PermissionDenied);
        if permission_denied {
            ScanError::PermissionDenied(path)
        } else {
            let source = err
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"));
            ScanError::Io { path, source }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;
    use tempfile::tempdir;

    fn write_file(path: &Path, content: &[u8]) {
        File::create(path).unwrap().write_all(content).unwrap();
    }

    #[test]
    fn test_walk_flat_directory() {
        let dir = tempdir().unwrap();
        write_file(&dir.path().join("a.txt"), b"aaa");
        write_file(&dir.path().join("b.txt"), b"bb");

        let walker = Walker::new(dir.path(), WalkerConfig::default());
        let files: Vec<FileRecord> = walker.walk().filter_map(Result::ok).collect();

        assert_eq!(files.len(), 2);
        assert_eq!(files[0].path.file_name().unwrap(), "a.txt");
        assert_eq!(files[0].size, 3);
        assert_eq!(files[1].size, 2);
    }

    #[test]
    fn test_walk_without_recursion_skips_subdirectories() {
        let dir = tempdir().unwrap();
        write_file(&dir.path().join("top.txt"), b"top");
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();
        write_file(&sub.join("nested.txt"), b"nested");

        let walker = Walker::new(dir.path(), WalkerConfig::default());
        let files: Vec<FileRecord> = walker.walk().filter_map(Result::ok).collect();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path.file_name().unwrap(), "top.txt");
    }

    #[test]
    fn test_walk_with_recursion() {
        let dir = tempdir().unwrap();
        write_file(&dir.path().join("top.txt"), b"top");
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();
        write_file(&sub.join("nested.txt"), b"nested");

        let walker = Walker::new(dir.path(), WalkerConfig::new(true, None));
        let files: Vec<FileRecord> = walker.walk().filter_map(Result::ok).collect();

        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_walk_applies_filename_filter() {
        let dir = tempdir().unwrap();
        write_file(&dir.path().join("keep.txt"), b"keep");
        write_file(&dir.path().join("skip.bin"), b"skip");

        let pattern = glob::Pattern::new("*.txt").unwrap();
        let walker = Walker::new(dir.path(), WalkerConfig::new(false, Some(pattern)));
        let files: Vec<FileRecord> = walker.walk().filter_map(Result::ok).collect();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path.file_name().unwrap(), "keep.txt");
    }

    #[test]
    fn test_walk_order_is_deterministic() {
        let dir = tempdir().unwrap();
        for name in ["c.txt", "a.txt", "b.txt"] {
            write_file(&dir.path().join(name), b"x");
        }

        let collect = || -> Vec<PathBuf> {
            Walker::new(dir.path(), WalkerConfig::default())
                .walk()
                .filter_map(Result::ok)
                .map(|f| f.path)
                .collect()
        };

        let first = collect();
        let second = collect();
        assert_eq!(first, second);
        let names: Vec<_> = first
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.txt", "b.txt", "c.txt"]);
    }

    #[test]
    fn test_walk_yields_empty_files() {
        // Zero-length files are excluded later by the size grouper, not here
        let dir = tempdir().unwrap();
        write_file(&dir.path().join("empty.txt"), b"");

        let walker = Walker::new(dir.path(), WalkerConfig::default());
        let files: Vec<FileRecord> = walker.walk().filter_map(Result::ok).collect();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].size, 0);
    }
}
