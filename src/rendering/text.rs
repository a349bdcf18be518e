//! Text measurement and drawing.

use std::path::Path;

use image::{Rgb, RgbImage};
use rusttype::{point, Font, PositionedGlyph, Scale};

use crate::{Error, Result};

/// Measures and draws a single line of text
pub trait TextRenderer {
    /// Width and height of `text`'s bounding box in pixels
    fn measure(&self, text: &str) -> (u32, u32);

    /// Draw `text` with its bounding box's top-left corner at (`x`, `y`).
    /// Pixels outside the canvas are skipped.
    fn draw(&self, canvas: &mut RgbImage, text: &str, x: i64, y: i64, color: Rgb<u8>);
}

/// TrueType label renderer at a fixed pixel size
pub struct FontLabel {
    font: Font<'static>,
    scale: Scale,
}

impl FontLabel {
    pub fn from_bytes(bytes: Vec<u8>, size: f32) -> Result<Self> {
        let font = Font::try_from_vec(bytes)
            .ok_or_else(|| Error::Render("Font data is not a usable TrueType font".into()))?;
        Ok(Self {
            font,
            scale: Scale::uniform(size),
        })
    }

    pub fn from_file(path: impl AsRef<Path>, size: f32) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| Error::Render(format!("Failed to load font {}: {}", path.display(), e)))?;
        Self::from_bytes(bytes, size)
            .map_err(|_| Error::Render(format!("{} is not a usable TrueType font", path.display())))
    }

    fn layout(&self, text: &str, x: f32, y: f32) -> Vec<PositionedGlyph<'static>> {
        let ascent = self.font.v_metrics(self.scale).ascent;
        self.font
            .layout(text, self.scale, point(x, y + ascent))
            .collect()
    }
}

impl TextRenderer for FontLabel {
    fn measure(&self, text: &str) -> (u32, u32) {
        let v = self.font.v_metrics(self.scale);
        let height = (v.ascent - v.descent).ceil() as u32;
        let width = self
            .layout(text, 0.0, 0.0)
            .last()
            .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
            .unwrap_or(0.0);
        (width.ceil() as u32, height)
    }

    fn draw(&self, canvas: &mut RgbImage, text: &str, x: i64, y: i64, color: Rgb<u8>) {
        let (cw, ch) = canvas.dimensions();
        for glyph in self.layout(text, x as f32, y as f32) {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, coverage| {
                let px = gx as i32 + bb.min.x;
                let py = gy as i32 + bb.min.y;
                if px < 0 || py < 0 || px as u32 >= cw || py as u32 >= ch {
                    return;
                }
                let dst = canvas.get_pixel_mut(px as u32, py as u32);
                for c in 0..3 {
                    let blended =
                        color[c] as f32 * coverage + dst[c] as f32 * (1.0 - coverage);
                    dst[c] = blended.round() as u8;
                }
            });
        }
    }
}
