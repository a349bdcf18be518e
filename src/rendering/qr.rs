//! Scannable code generation.

use image::{GrayImage, Luma};
use qrcode::QrCode;

use crate::{Error, Result};

/// Side length in pixels of one QR module
pub const MODULE_SIZE: u32 = 20;

/// Turns a payload into a code graphic
pub trait CodeEncoder {
    fn encode(&self, payload: &str) -> Result<GrayImage>;
}

/// QR encoder with the crate defaults: error correction level M and a
/// four-module quiet zone.
#[derive(Debug, Clone, Copy)]
pub struct QrEncoder {
    module_size: u32,
}

impl QrEncoder {
    pub fn new(module_size: u32) -> Self {
        Self { module_size }
    }

    pub fn module_size(&self) -> u32 {
        self.module_size
    }
}

impl Default for QrEncoder {
    fn default() -> Self {
        Self::new(MODULE_SIZE)
    }
}

impl CodeEncoder for QrEncoder {
    fn encode(&self, payload: &str) -> Result<GrayImage> {
        let code = QrCode::new(payload.as_bytes())
            .map_err(|e| Error::Render(format!("Failed to encode '{}' as QR code: {}", payload, e)))?;

        Ok(code
            .render::<Luma<u8>>()
            .module_dimensions(self.module_size, self.module_size)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_payload_is_version_one_with_quiet_zone() {
        let img = QrEncoder::default().encode("101").unwrap();
        // 21 modules + 2 * 4 quiet zone
        assert_eq!(img.width(), 29 * MODULE_SIZE);
        assert_eq!(img.width(), img.height());
        // quiet zone is light, finder pattern corner is dark
        assert_eq!(img.get_pixel(0, 0)[0], 255);
        assert_eq!(img.get_pixel(4 * MODULE_SIZE, 4 * MODULE_SIZE)[0], 0);
    }

    #[test]
    fn module_size_scales_output() {
        let img = QrEncoder::new(1).encode("101").unwrap();
        assert_eq!(img.width(), 29);
    }

    #[test]
    fn oversized_payload_is_render_error() {
        let payload = "x".repeat(8000);
        let err = QrEncoder::new(1).encode(&payload).unwrap_err();
        assert!(matches!(err, Error::Render(_)));
    }
}
