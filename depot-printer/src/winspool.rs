//! Windows spooler backend
//!
//! Implements [`Spooler`] over the winspool primitives, one trait method per
//! native call. Payloads go through the driver untouched because every
//! document is started with the `"RAW"` datatype.

use crate::error::{PrintError, PrintResult};
use crate::spooler::{DocInfo, Spooler};
use core::ffi::c_void;
use tracing::warn;
use windows::Win32::Graphics::Printing::{
    ClosePrinter, DOC_INFO_1W, EndDocPrinter, EndPagePrinter, EnumPrintersW, GetDefaultPrinterW,
    OpenPrinterW, PRINTER_ENUM_CONNECTIONS, PRINTER_ENUM_LOCAL, PRINTER_HANDLE, PRINTER_INFO_5W,
    StartDocPrinterW, StartPagePrinter, WritePrinter,
};
use windows::core::{PCWSTR, PWSTR};

fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

/// The system print spooler
#[derive(Debug, Default, Clone, Copy)]
pub struct WinSpooler;

impl WinSpooler {
    pub fn new() -> Self {
        Self
    }

    /// Check if a port belongs to a virtual printer (PDF/XPS/OneNote style)
    fn is_virtual_port(port: &str) -> bool {
        let p = port.to_lowercase();
        p == "file:"
            || p == "portprompt:"
            || p == "xpsport:"
            || p.starts_with("onenote")
            || p == "nul:"
            || p.starts_with("wfsport:")
    }

    /// Get the default printer name, if one is configured
    pub fn default_printer() -> PrintResult<Option<String>> {
        unsafe {
            let mut needed: u32 = 0;
            let _ = GetDefaultPrinterW(None, &mut needed);

            if needed == 0 {
                return Ok(None);
            }

            let mut buf: Vec<u16> = vec![0; needed as usize];
            let ok = GetDefaultPrinterW(Some(PWSTR(buf.as_mut_ptr())), &mut needed);

            if !ok.as_bool() {
                return Ok(None);
            }

            let name = PWSTR(buf.as_mut_ptr())
                .to_string()
                .map_err(|e| PrintError::EnumFailed(format!("UTF-16 decode failed: {}", e)))?;

            Ok(Some(name))
        }
    }
}

impl Spooler for WinSpooler {
    type RawHandle = PRINTER_HANDLE;

    fn open(&self, printer: &str) -> PrintResult<PRINTER_HANDLE> {
        unsafe {
            let mut handle = PRINTER_HANDLE::default();
            let name_w = to_wide(printer);

            OpenPrinterW(PCWSTR::from_raw(name_w.as_ptr()), &mut handle, None)
                .map_err(|e| PrintError::OpenFailed(format!("{}: {}", printer, e)))?;

            Ok(handle)
        }
    }

    fn start_document(&self, handle: &mut PRINTER_HANDLE, doc: &DocInfo) -> PrintResult<()> {
        unsafe {
            let doc_name_w = to_wide(&doc.name);
            let datatype_w = to_wide(&doc.datatype);
            let doc_info = DOC_INFO_1W {
                pDocName: PWSTR(doc_name_w.as_ptr() as *mut _),
                pOutputFile: PWSTR::null(),
                pDatatype: PWSTR(datatype_w.as_ptr() as *mut _),
            };

            if StartDocPrinterW(*handle, 1, &doc_info as *const DOC_INFO_1W) == 0 {
                return Err(PrintError::StartDocFailed(doc.name.clone()));
            }
            Ok(())
        }
    }

    fn start_page(&self, handle: &mut PRINTER_HANDLE) -> PrintResult<()> {
        unsafe {
            if !StartPagePrinter(*handle).as_bool() {
                return Err(PrintError::StartPageFailed(
                    "spooler refused page".to_string(),
                ));
            }
            Ok(())
        }
    }

    fn write(&self, handle: &mut PRINTER_HANDLE, data: &[u8]) -> PrintResult<usize> {
        unsafe {
            let mut written: u32 = 0;
            let ok = WritePrinter(
                *handle,
                data.as_ptr() as *const c_void,
                data.len() as u32,
                &mut written,
            );

            if !ok.as_bool() {
                return Err(PrintError::WriteFailed(
                    "spooler rejected payload".to_string(),
                ));
            }
            Ok(written as usize)
        }
    }

    fn end_page(&self, handle: &mut PRINTER_HANDLE) -> PrintResult<()> {
        unsafe {
            if !EndPagePrinter(*handle).as_bool() {
                return Err(PrintError::Io(std::io::Error::last_os_error()));
            }
            Ok(())
        }
    }

    fn end_document(&self, handle: &mut PRINTER_HANDLE) -> PrintResult<()> {
        unsafe {
            if !EndDocPrinter(*handle).as_bool() {
                return Err(PrintError::Io(std::io::Error::last_os_error()));
            }
            Ok(())
        }
    }

    fn close(&self, handle: &mut PRINTER_HANDLE) {
        unsafe {
            if let Err(e) = ClosePrinter(*handle) {
                warn!(error = %e, "ClosePrinter failed");
            }
        }
    }

    fn installed_printers(&self) -> PrintResult<Vec<String>> {
        unsafe {
            let flags = PRINTER_ENUM_LOCAL | PRINTER_ENUM_CONNECTIONS;
            let mut needed: u32 = 0;
            let mut returned: u32 = 0;

            let _ = EnumPrintersW(flags, None, 5, None, &mut needed, &mut returned);

            if needed == 0 {
                return Ok(Vec::new());
            }

            let mut buf: Vec<u8> = vec![0; needed as usize];
            EnumPrintersW(
                flags,
                None,
                5,
                Some(buf.as_mut_slice()),
                &mut needed,
                &mut returned,
            )
            .map_err(|e| PrintError::EnumFailed(format!("EnumPrintersW: {}", e)))?;

            let ptr = buf.as_ptr() as *const PRINTER_INFO_5W;
            let slice = std::slice::from_raw_parts(ptr, returned as usize);

            let mut result: Vec<String> = Vec::new();
            for info in slice.iter() {
                if info.pPrinterName.is_null() {
                    continue;
                }
                let name = PWSTR(info.pPrinterName.0).to_string().unwrap_or_default();

                let port = if info.pPortName.is_null() {
                    String::new()
                } else {
                    PWSTR(info.pPortName.0).to_string().unwrap_or_default()
                };

                if !Self::is_virtual_port(&port) {
                    result.push(name);
                }
            }

            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn virtual_ports_are_filtered() {
        assert!(WinSpooler::is_virtual_port("FILE:"));
        assert!(WinSpooler::is_virtual_port("XPSPort:"));
        assert!(WinSpooler::is_virtual_port("OneNote2016Port:"));
        assert!(!WinSpooler::is_virtual_port("USB001"));
        assert!(!WinSpooler::is_virtual_port("IP_192.168.1.50"));
    }
}
