//! # depot-printer
//!
//! Raw print-job pipeline over the OS print spooler - low-level printing
//! capabilities only.
//!
//! ## Scope
//!
//! This crate handles HOW a pre-rendered payload reaches a printer:
//! - The spooler call sequence (open → start doc → start page → write →
//!   end page → end doc → close) with cleanup guaranteed on every exit path
//! - Installed-printer enumeration
//! - The Windows spooler backend (`WinSpooler`)
//!
//! Business logic (WHAT to print) stays in application code:
//! - Acceptance codes, QR payloads, payload selection → depot-intake
//!
//! ## Example
//!
//! ```ignore
//! use depot_printer::{DocInfo, PrinterHandle, RawJobSession, WinSpooler};
//!
//! let spooler = WinSpooler::new();
//! let handle = PrinterHandle::open(&spooler, "ZDesigner GK420t")?;
//! let written = RawJobSession::new(handle, DocInfo::default()).send(&payload)?;
//! ```

mod error;
mod session;
mod spooler;

#[cfg(windows)]
mod winspool;

// Re-exports
pub use error::{PrintError, PrintResult};
pub use session::{PrinterHandle, RawJobSession};
pub use spooler::{DocInfo, Spooler};

#[cfg(windows)]
pub use winspool::WinSpooler;
