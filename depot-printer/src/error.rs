//! Error types for the raw print pipeline

use thiserror::Error;

/// Print pipeline error types
///
/// Each spooler operation that can refuse a job has its own variant, so
/// callers can tell an unreachable printer apart from a rejected document.
#[derive(Debug, Error)]
pub enum PrintError {
    /// Opening the named printer failed (unknown name, permissions,
    /// spooler unavailable)
    #[error("Failed to open printer: {0}")]
    OpenFailed(String),

    /// The spooler refused to start a document
    #[error("StartDocPrinter failed: {0}")]
    StartDocFailed(String),

    /// The spooler refused to start a page
    #[error("StartPagePrinter failed: {0}")]
    StartPageFailed(String),

    /// Writing the payload to the spooler failed
    #[error("WritePrinter failed: {0}")]
    WriteFailed(String),

    /// The spooler accepted fewer bytes than the payload contains
    #[error("Incomplete write: {written} of {expected} bytes accepted")]
    ShortWrite { written: usize, expected: usize },

    /// Enumerating installed printers failed
    #[error("Printer enumeration failed: {0}")]
    EnumFailed(String),

    /// IO error during printing
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for print pipeline operations
pub type PrintResult<T> = Result<T, PrintError>;
