//! Print submission use case
//!
//! Holds the operator's current selections (one payload at a time) and turns
//! a "print this on that printer" request into exactly one raw job session,
//! with every missing-input case rejected before the spooler is touched.

use crate::error::{IntakeError, IntakeResult};
use crate::job::RawPrintJob;
use depot_printer::{DocInfo, PrinterHandle, RawJobSession, Spooler};
use std::path::Path;
use tracing::{info, instrument, warn};

/// Outcome of a successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Printed {
    pub printer: String,
    pub bytes_sent: usize,
}

/// Drives one raw print job per submission
pub struct PrintOrchestrator<S: Spooler> {
    spooler: S,
    payload: Option<RawPrintJob>,
}

impl<S: Spooler> PrintOrchestrator<S> {
    pub fn new(spooler: S) -> Self {
        Self {
            spooler,
            payload: None,
        }
    }

    /// Load and select a payload file for the next submissions
    pub fn load_payload(&mut self, path: impl AsRef<Path>) -> IntakeResult<&RawPrintJob> {
        let job = RawPrintJob::from_file(path)?;
        info!(
            source = ?job.source(),
            bytes = job.len(),
            "payload selected"
        );
        Ok(self.payload.insert(job))
    }

    /// Select an in-memory payload
    pub fn set_payload(&mut self, job: RawPrintJob) {
        self.payload = Some(job);
    }

    pub fn clear_payload(&mut self) {
        self.payload = None;
    }

    pub fn payload(&self) -> Option<&RawPrintJob> {
        self.payload.as_ref()
    }

    /// List printers the operator can pick from
    pub fn installed_printers(&self) -> IntakeResult<Vec<String>> {
        Ok(self.spooler.installed_printers()?)
    }

    /// Submit the selected payload to the named printer
    ///
    /// Preconditions are checked before any spooler call: a payload must be
    /// selected, the printer name must be non-empty and installed. The job
    /// itself is one printer handle and one raw session, released whatever
    /// the outcome.
    #[instrument(skip(self))]
    pub fn submit(&self, printer: &str) -> IntakeResult<Printed> {
        let job = self.payload.as_ref().ok_or(IntakeError::NoPayloadSelected)?;

        if printer.trim().is_empty() {
            return Err(IntakeError::NoPrinterSelected);
        }
        let installed = self.spooler.installed_printers()?;
        if !installed.iter().any(|p| p == printer) {
            warn!("printer not in installed list");
            return Err(IntakeError::PrinterNotInstalled(printer.to_string()));
        }

        let doc = match job.source().and_then(Path::file_name) {
            Some(name) => DocInfo::named(&name.to_string_lossy()),
            None => DocInfo::default(),
        };

        let handle = PrinterHandle::open(&self.spooler, printer)?;
        let bytes_sent = RawJobSession::new(handle, doc).send(job.bytes())?;

        info!(bytes_sent, "submission complete");
        Ok(Printed {
            printer: printer.to_string(),
            bytes_sent,
        })
    }
}
