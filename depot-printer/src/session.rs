//! Printer handle guard and raw job session
//!
//! `PrinterHandle` ties the open/close pair to a value's lifetime;
//! `RawJobSession` drives the spooler state machine for one payload:
//!
//! `start_document → start_page → write → end_page → end_document`
//!
//! Once a start call succeeded, the matching end call runs no matter how the
//! rest of the job goes, so the spooler is never left holding a half-open
//! document.

use crate::error::{PrintError, PrintResult};
use crate::spooler::{DocInfo, Spooler};
use tracing::{debug, info, warn};

/// Exclusive reference to one open printer
///
/// Constructed only by a successful [`Spooler::open`]; the printer is
/// released exactly once when the guard drops, on every exit path.
pub struct PrinterHandle<'a, S: Spooler> {
    spooler: &'a S,
    raw: S::RawHandle,
}

impl<'a, S: Spooler> PrinterHandle<'a, S> {
    /// Open the named printer
    pub fn open(spooler: &'a S, printer: &str) -> PrintResult<Self> {
        let raw = spooler.open(printer)?;
        debug!(printer, "printer opened");
        Ok(Self { spooler, raw })
    }
}

impl<S: Spooler> Drop for PrinterHandle<'_, S> {
    fn drop(&mut self) {
        self.spooler.close(&mut self.raw);
    }
}

/// One raw print job on one open printer
///
/// Consumes the handle: a handle carries at most one job, and the printer is
/// closed when [`send`](RawJobSession::send) returns, whatever the outcome.
pub struct RawJobSession<'a, S: Spooler> {
    handle: PrinterHandle<'a, S>,
    doc: DocInfo,
}

impl<'a, S: Spooler> RawJobSession<'a, S> {
    pub fn new(handle: PrinterHandle<'a, S>, doc: DocInfo) -> Self {
        Self { handle, doc }
    }

    /// Spool the payload as a single-page raw document
    ///
    /// Returns the number of bytes the spooler accepted. A short write is an
    /// error ([`PrintError::ShortWrite`]); the page and document are still
    /// closed out first. An empty payload is a valid zero-byte job.
    pub fn send(mut self, payload: &[u8]) -> PrintResult<usize> {
        let spooler = self.handle.spooler;
        let raw = &mut self.handle.raw;

        // A start_document failure ends the job before any page exists;
        // the handle guard still closes the printer.
        spooler.start_document(raw, &self.doc)?;

        if let Err(e) = spooler.start_page(raw) {
            // The document was started, so it must be ended even though no
            // page ever opened, or the spooler keeps the job half-open.
            if let Err(e2) = spooler.end_document(raw) {
                warn!(error = %e2, "end_document failed during start_page cleanup");
            }
            return Err(e);
        }

        let write_result = spooler.write(raw, payload);

        // Past this point both starts succeeded: both ends run
        // unconditionally, write outcome notwithstanding.
        if let Err(e) = spooler.end_page(raw) {
            warn!(error = %e, "end_page failed");
        }
        if let Err(e) = spooler.end_document(raw) {
            warn!(error = %e, "end_document failed");
        }

        let written = write_result?;
        if written != payload.len() {
            return Err(PrintError::ShortWrite {
                written,
                expected: payload.len(),
            });
        }

        info!(doc = %self.doc.name, bytes = written, "raw job spooled");
        Ok(written)
    }
}
