//! BLAKE3 content fingerprinting with streaming reads.
//!
//! # Overview
//!
//! A [`Fingerprint`] is an opaque digest of a file's full byte content.
//! Two files with equal fingerprints are considered content-identical
//! (collision risk accepted, consistent with a cryptographic digest).
//! The entire content is always streamed through the hasher; sampling a
//! prefix would be a correctness bug, not an optimization.
//!
//! Grouping logic depends on the [`Fingerprinter`] trait rather than on a
//! concrete hasher, so tests can substitute instrumented implementations.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::FingerprintError;

/// A 32-byte BLAKE3 digest of a file's full content.
pub type Fingerprint = [u8; 32];

/// Buffer size for streaming file reads (64 KiB).
const READ_BUF_SIZE: usize = 64 * 1024;

/// Convert a fingerprint to a lowercase hexadecimal string.
#[must_use]
pub fn fingerprint_to_hex(fingerprint: &Fingerprint) -> String {
    fingerprint.iter().map(|b| format!("{b:02x}")).collect()
}

/// Computes content fingerprints for candidate files.
pub trait Fingerprinter: Send + Sync {
    /// Compute the fingerprint of the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns a [`FingerprintError`] if the file cannot be opened or read
    /// to completion. Callers treat this as "exclude the file from
    /// duplicate consideration", never as a scan-fatal condition.
    fn fingerprint(&self, path: &Path) -> Result<Fingerprint, FingerprintError>;
}

/// Streaming BLAKE3 fingerprinter.
#[derive(Debug, Default)]
pub struct Blake3Fingerprinter;

impl Blake3Fingerprinter {
    /// Create a new fingerprinter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Fingerprinter for Blake3Fingerprinter {
    fn fingerprint(&self, path: &Path) -> Result<Fingerprint, FingerprintError> {
        let mut file =
            File::open(path).map_err(|e| FingerprintError::from_io(path.to_path_buf(), e))?;
        let mut hasher = blake3::Hasher::new();
        let mut buf = vec![0u8; READ_BUF_SIZE];

        loop {
            let n = file
                .read(&mut buf)
                .map_err(|e| FingerprintError::from_io(path.to_path_buf(), e))?;
            if n == 0 {
                break;
            }
            hasher.update(&buf[..n]);
        }

        Ok(*hasher.finalize().as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_file(dir: &Path, name: &str, content: &[u8]) -> std::path::PathBuf {
        let path = dir.join(name);
        File::create(&path).unwrap().write_all(content).unwrap();
        path
    }

    #[test]
    fn test_equal_content_equal_fingerprint() {
        let dir = tempdir().unwrap();
        let a = write_file(dir.path(), "a.txt", b"same content");
        let b = write_file(dir.path(), "b.txt", b"same content");

        let hasher = Blake3Fingerprinter::new();
        assert_eq!(
            hasher.fingerprint(&a).unwrap(),
            hasher.fingerprint(&b).unwrap()
        );
    }

    #[test]
    fn test_distinct_content_distinct_fingerprint() {
        let dir = tempdir().unwrap();
        // Equal length, different bytes
        let a = write_file(dir.path(), "a.txt", b"content x");
        let b = write_file(dir.path(), "b.txt", b"content y");

        let hasher = Blake3Fingerprinter::new();
        assert_ne!(
            hasher.fingerprint(&a).unwrap(),
            hasher.fingerprint(&b).unwrap()
        );
    }

    #[test]
    fn test_fingerprint_matches_reference_digest() {
        let dir = tempdir().unwrap();
        let a = write_file(dir.path(), "a.txt", b"hello world");

        let hasher = Blake3Fingerprinter::new();
        let digest = hasher.fingerprint(&a).unwrap();
        assert_eq!(digest, *blake3::hash(b"hello world").as_bytes());
    }

    #[test]
    fn test_large_file_streams_fully() {
        // Content larger than the read buffer must hash identically to a
        // one-shot hash of the same bytes.
        let dir = tempdir().unwrap();
        let content: Vec<u8> = (0..3 * READ_BUF_SIZE + 17).map(|i| (i % 251) as u8).collect();
        let a = write_file(dir.path(), "big.bin", &content);

        let hasher = Blake3Fingerprinter::new();
        let digest = hasher.fingerprint(&a).unwrap();
        assert_eq!(digest, *blake3::hash(&content).as_bytes());
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let hasher = Blake3Fingerprinter::new();
        let err = hasher.fingerprint(&dir.path().join("gone.txt")).unwrap_err();
        assert!(matches!(err, FingerprintError::NotFound(_)));
    }

    #[test]
    fn test_fingerprint_to_hex() {
        let mut fingerprint = [0u8; 32];
        fingerprint[0] = 0xAB;
        fingerprint[31] = 0xEF;

        let hex = fingerprint_to_hex(&fingerprint);
        assert_eq!(hex.len(), 64);
        assert!(hex.starts_with("ab"));
        assert!(hex.ends_with("ef"));
    }
}
