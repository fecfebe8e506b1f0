//! QR payload formatting and label rendering
//!
//! The payload is the semantic content scanned back at lookup time:
//! `<tag>|<code>|<yyyyMMddHHmm>`. Rendering uses error-correction level M
//! with 10-pixel modules, which scans reliably on warehouse label stock.

use crate::code::AcceptanceCode;
use crate::error::{IntakeError, IntakeResult};
use chrono::{Local, NaiveDateTime};
use image::Luma;
use qrcode::{EcLevel, QrCode};
use std::path::Path;

/// Tag marking a payload as a warehouse acceptance event
pub const ACCEPTANCE_TAG: &str = "DEPO_KABUL";

/// Format the QR payload for a code at a given moment
pub fn payload(tag: &str, code: &AcceptanceCode, moment: NaiveDateTime) -> String {
    format!("{}|{}|{}", tag, code, moment.format("%Y%m%d%H%M"))
}

/// Format the QR payload stamped with the current local time
pub fn payload_now(tag: &str, code: &AcceptanceCode) -> String {
    payload(tag, code, Local::now().naive_local())
}

/// Render a payload as a PNG image
pub fn render_png(payload: &str) -> IntakeResult<Vec<u8>> {
    let code = QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::M)
        .map_err(|e| IntakeError::Qr(e.to_string()))?;

    let img = code.render::<Luma<u8>>().module_dimensions(10, 10).build();

    let mut bytes: Vec<u8> = Vec::new();
    let mut cursor = std::io::Cursor::new(&mut bytes);
    image::DynamicImage::ImageLuma8(img)
        .write_to(&mut cursor, image::ImageFormat::Png)
        .map_err(|e| IntakeError::Qr(e.to_string()))?;

    Ok(bytes)
}

/// Render a payload and write the PNG to disk
pub fn save_png(payload: &str, path: impl AsRef<Path>) -> IntakeResult<()> {
    let bytes = render_png(payload)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
