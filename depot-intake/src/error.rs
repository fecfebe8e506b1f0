//! Error types for the intake use-case layer

use depot_printer::PrintError;
use std::path::PathBuf;
use thiserror::Error;

/// Intake error types
///
/// The missing-input variants are preconditions checked before any spooler
/// call; the user fixes the input and retries. Everything else comes back
/// from the pipeline or the filesystem.
#[derive(Debug, Error)]
pub enum IntakeError {
    /// No print payload has been selected yet
    #[error("No print payload selected")]
    NoPayloadSelected,

    /// The printer name was empty
    #[error("No printer selected")]
    NoPrinterSelected,

    /// The named printer is not in the installed-printer list
    #[error("Printer not installed: {0}")]
    PrinterNotInstalled(String),

    /// Reading the payload file failed
    #[error("Failed to read payload {path}: {source}")]
    PayloadRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// QR code generation or encoding failed
    #[error("QR encoding failed: {0}")]
    Qr(String),

    /// IO error outside the print pipeline
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure inside the raw print pipeline
    #[error(transparent)]
    Spooler(#[from] PrintError),
}

/// Result type for intake operations
pub type IntakeResult<T> = Result<T, IntakeError>;
