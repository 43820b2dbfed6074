use base64::{engine::general_purpose, Engine as _};
use image::{DynamicImage, ImageFormat, Luma};
use log::debug;
use qrcode::render::unicode;
use qrcode::{EcLevel, QrCode};
use std::io::Cursor;

use crate::config::QR_CODE_SIZE;
use crate::error::{AuthError, Result};
use crate::uri::provisioning_uri;

fn qr_failed<E>(e: E) -> AuthError
where
    E: std::error::Error + Send + Sync + 'static,
{
    AuthError::QrGenerationFailed(Box::new(e))
}

// Low error correction keeps the code small for a short URI.
fn encode(uri: &str) -> Result<QrCode> {
    QrCode::with_error_correction_level(uri.as_bytes(), EcLevel::L).map_err(qr_failed)
}

/// Renders `uri` as a QR code PNG whose edges are at least `size` pixels.
pub fn render_png(uri: &str, size: u32) -> Result<Vec<u8>> {
    let code = encode(uri)?;
    let img = code.render::<Luma<u8>>().min_dimensions(size, size).build();
    debug!("rendered {}x{} QR code", img.width(), img.height());

    // write_to requires Write + Seek
    let mut cursor = Cursor::new(Vec::new());
    DynamicImage::ImageLuma8(img)
        .write_to(&mut cursor, ImageFormat::Png)
        .map_err(qr_failed)?;
    Ok(cursor.into_inner())
}

/// Renders `uri` with half-height unicode blocks for display in a terminal.
pub fn render_terminal(uri: &str) -> Result<String> {
    let code = encode(uri)?;
    Ok(code.render::<unicode::Dense1x2>().build())
}

/// Provisioning QR code for `label` and `secret` as a base64 encoded PNG.
pub fn qr_code_base64(label: &str, secret: &str) -> Result<String> {
    let png = render_png(&provisioning_uri(label, secret), QR_CODE_SIZE)?;
    Ok(general_purpose::STANDARD.encode(png))
}
