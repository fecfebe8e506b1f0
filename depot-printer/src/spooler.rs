//! Spooler abstraction
//!
//! The print spooler is modelled as a trait so the job pipeline can be
//! driven against a fake backend in tests and against the Windows spooler
//! in production.

use crate::error::PrintResult;

/// Document metadata passed to the spooler when a job starts
///
/// `datatype` tells the spooler how to treat the payload; `"RAW"` means the
/// bytes are already in the printer's control language and must pass through
/// the driver untouched.
#[derive(Debug, Clone)]
pub struct DocInfo {
    pub name: String,
    pub datatype: String,
}

impl Default for DocInfo {
    fn default() -> Self {
        Self {
            name: "RAW Document".to_string(),
            datatype: "RAW".to_string(),
        }
    }
}

impl DocInfo {
    /// Create a raw-datatype document with a custom spooler-visible name
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }
}

/// Backend interface to the OS print spooler
///
/// One implementation exists per platform (`WinSpooler` on Windows); tests
/// supply recording fakes. The operations map one-to-one onto the
/// conventional spooler primitives and must be called in the order
/// [`RawJobSession`](crate::RawJobSession) enforces.
pub trait Spooler {
    /// Opaque live reference to an open printer
    type RawHandle;

    /// Acquire an exclusive reference to the named printer
    fn open(&self, printer: &str) -> PrintResult<Self::RawHandle>;

    /// Begin a document on an open printer
    fn start_document(&self, handle: &mut Self::RawHandle, doc: &DocInfo) -> PrintResult<()>;

    /// Begin a page within a started document
    fn start_page(&self, handle: &mut Self::RawHandle) -> PrintResult<()>;

    /// Write raw bytes into the current page, returning the count the
    /// spooler accepted
    fn write(&self, handle: &mut Self::RawHandle, data: &[u8]) -> PrintResult<usize>;

    /// End the current page
    fn end_page(&self, handle: &mut Self::RawHandle) -> PrintResult<()>;

    /// End the current document
    fn end_document(&self, handle: &mut Self::RawHandle) -> PrintResult<()>;

    /// Release the printer reference
    ///
    /// Called exactly once per successful [`open`](Spooler::open), on every
    /// exit path. Must not fail; backends swallow release errors.
    fn close(&self, handle: &mut Self::RawHandle);

    /// List the printers installed on this machine
    fn installed_printers(&self) -> PrintResult<Vec<String>>;
}
