//! Raw print payloads

use crate::error::{IntakeError, IntakeResult};
use std::path::{Path, PathBuf};

/// An immutable, pre-rendered print payload
///
/// The bytes are already in the target printer's control language (a `.prn`
/// capture, ZPL, ESC/POS, ...); nothing here inspects or rewrites them.
#[derive(Debug, Clone)]
pub struct RawPrintJob {
    bytes: Vec<u8>,
    source: Option<PathBuf>,
}

impl RawPrintJob {
    /// Load a payload from a file, remembering where it came from
    pub fn from_file(path: impl AsRef<Path>) -> IntakeResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| IntakeError::PayloadRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            bytes,
            source: Some(path.to_path_buf()),
        })
    }

    /// Wrap an in-memory payload
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            source: None,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The file this payload was loaded from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn from_file_reads_bytes_and_remembers_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("label.prn");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(b"\x1b@RAW LABEL\x1dV\x00").unwrap();
        drop(f);

        let job = RawPrintJob::from_file(&path).unwrap();
        assert_eq!(job.bytes(), b"\x1b@RAW LABEL\x1dV\x00");
        assert_eq!(job.source(), Some(path.as_path()));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = RawPrintJob::from_file("/no/such/file.prn").unwrap_err();
        match err {
            IntakeError::PayloadRead { path, .. } => {
                assert!(path.ends_with("file.prn"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_payload_is_allowed() {
        let job = RawPrintJob::from_bytes(Vec::new());
        assert!(job.is_empty());
        assert_eq!(job.len(), 0);
        assert_eq!(job.source(), None);
    }
}
