//! Page rendering: one checkpoint in, one printable page out.
//!
//! Rendering runs in three steps. `layout` computes where the code graphic and
//! the label go, the result is expressed as a list of `paint` commands, and
//! `raster` executes them onto a white canvas. The code graphic and the text
//! are produced through the `CodeEncoder` and `TextRenderer` traits so either
//! can be swapped out (tests use a stub text renderer that needs no font file).

pub mod layout;
pub mod paint;
pub mod qr;
pub mod raster;
pub mod text;

use image::{DynamicImage, Rgb, RgbImage};
use log::warn;

use crate::checkpoint::Checkpoint;
use crate::Result;
use layout::PageSize;
use paint::PaintCommand;
use qr::CodeEncoder;
use text::TextRenderer;

/// A4 at 72 dpi
pub const PAGE_SIZE: PageSize = PageSize {
    width: 595,
    height: 842,
};

/// Distance from the top of the page to the top of the label
pub const LABEL_TOP: u32 = 600;

pub const LABEL_COLOR: Rgb<u8> = Rgb([0, 0, 0]);

/// A composed page, ready to be encoded and written
#[derive(Debug, Clone)]
pub struct Page {
    pub width: u32,
    pub height: u32,
    pub image: RgbImage,
}

impl Page {
    pub fn png_data(&self) -> Result<Vec<u8>> {
        raster::encode_png(&self.image)
    }
}

/// Composes pages from a code encoder and a text renderer
pub struct PageRenderer<E, T> {
    encoder: E,
    text: T,
}

impl<E: CodeEncoder, T: TextRenderer> PageRenderer<E, T> {
    pub fn new(encoder: E, text: T) -> Self {
        Self { encoder, text }
    }

    /// Paint commands for one checkpoint, in drawing order
    pub fn compose(&self, checkpoint: &Checkpoint) -> Result<Vec<PaintCommand>> {
        let label = checkpoint.id_text()?;

        let code = DynamicImage::ImageLuma8(self.encoder.encode(&label)?).to_rgb8();
        let code_rect = layout::place_code(PAGE_SIZE, code.width(), code.height());

        let (text_w, text_h) = self.text.measure(&label);
        let label_rect = layout::place_label(PAGE_SIZE, text_w, text_h, LABEL_TOP);

        let commands = vec![
            PaintCommand::Blit {
                rect: code_rect,
                pixels: code,
            },
            PaintCommand::Text {
                rect: label_rect,
                text: label,
                color: LABEL_COLOR,
            },
        ];
        for cmd in &commands {
            let r = cmd.rect();
            if !r.fits_within(PAGE_SIZE.width, PAGE_SIZE.height) {
                warn!(
                    "{}x{} element at ({}, {}) on page '{}' is clipped by the page edge",
                    r.width, r.height, r.x, r.y, checkpoint.title
                );
            }
        }
        Ok(commands)
    }

    pub fn render(&self, checkpoint: &Checkpoint) -> Result<Page> {
        let commands = self.compose(checkpoint)?;
        let image = raster::rasterize(PAGE_SIZE, &commands, &self.text);
        Ok(Page {
            width: image.width(),
            height: image.height(),
            image,
        })
    }
}
