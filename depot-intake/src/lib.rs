//! # depot-intake
//!
//! Warehouse goods-acceptance use-case layer.
//!
//! ## Scope
//!
//! This crate handles WHAT gets printed and tracked at the intake desk:
//! - Acceptance codes (`"ABDE"` + 20 hex characters) tagging each receipt
//! - QR payload formatting and PNG rendering for the acceptance label
//! - Loading pre-rendered `.prn` payloads from disk
//! - Driving one raw print job per submission via depot-printer
//!
//! HOW bytes reach a printer lives in depot-printer.
//!
//! ## Example
//!
//! ```ignore
//! use depot_intake::{AcceptanceCodeGenerator, PrintOrchestrator, qr};
//! use depot_printer::WinSpooler;
//!
//! let code = AcceptanceCodeGenerator::generate();
//! let png = qr::render_png(&qr::payload_now(qr::ACCEPTANCE_TAG, &code))?;
//!
//! let mut orchestrator = PrintOrchestrator::new(WinSpooler::new());
//! orchestrator.load_payload("label.prn")?;
//! orchestrator.submit("ZDesigner GK420t")?;
//! ```

mod code;
mod error;
mod job;
mod orchestrator;
pub mod qr;

// Re-exports
pub use code::{AcceptanceCode, AcceptanceCodeGenerator, CODE_PREFIX};
pub use error::{IntakeError, IntakeResult};
pub use job::RawPrintJob;
pub use orchestrator::{PrintOrchestrator, Printed};
