/// Paint commands a page is composed from

use image::{Rgb, RgbImage};

use crate::rendering::layout::Rect;

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    /// Opaque copy of `pixels` with its top-left corner at `rect`
    Blit { rect: Rect, pixels: RgbImage },
    /// Text drawn with its top-left corner at `rect`
    Text { rect: Rect, text: String, color: Rgb<u8> },
}

impl PaintCommand {
    pub fn rect(&self) -> Rect {
        match self {
            PaintCommand::Blit { rect, .. } | PaintCommand::Text { rect, .. } => *rect,
        }
    }
}
