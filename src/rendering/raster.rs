/// Rasterizer: executes paint commands onto a white canvas

use std::io::Cursor;

use image::{imageops, ImageFormat, Rgb, RgbImage};

use crate::rendering::layout::PageSize;
use crate::rendering::paint::PaintCommand;
use crate::rendering::text::TextRenderer;
use crate::{Error, Result};

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

pub fn rasterize<T: TextRenderer + ?Sized>(
    size: PageSize,
    commands: &[PaintCommand],
    text: &T,
) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(size.width, size.height, WHITE);
    for cmd in commands {
        match cmd {
            // replace() clips whatever falls outside the canvas
            PaintCommand::Blit { rect, pixels } => {
                imageops::replace(&mut canvas, pixels, rect.x, rect.y)
            }
            PaintCommand::Text { rect, text: s, color } => {
                text.draw(&mut canvas, s, rect.x, rect.y, *color)
            }
        }
    }
    canvas
}

pub fn encode_png(canvas: &RgbImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    canvas
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .map_err(|e| Error::Render(format!("PNG encoding failed: {}", e)))?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::layout::Rect;

    struct NoText;

    impl TextRenderer for NoText {
        fn measure(&self, _text: &str) -> (u32, u32) {
            (0, 0)
        }
        fn draw(&self, _canvas: &mut RgbImage, _text: &str, _x: i64, _y: i64, _color: Rgb<u8>) {}
    }

    #[test]
    fn empty_command_list_gives_white_canvas() {
        let canvas = rasterize(PageSize { width: 8, height: 4 }, &[], &NoText);
        assert_eq!(canvas.dimensions(), (8, 4));
        assert!(canvas.pixels().all(|p| *p == WHITE));
    }

    #[test]
    fn blit_is_opaque_and_clipped() {
        let black = RgbImage::from_pixel(4, 4, Rgb([0, 0, 0]));
        let cmds = [PaintCommand::Blit {
            rect: Rect { x: -2, y: 1, width: 4, height: 4 },
            pixels: black,
        }];
        let canvas = rasterize(PageSize { width: 6, height: 3 }, &cmds, &NoText);
        assert_eq!(canvas.dimensions(), (6, 3));
        assert_eq!(*canvas.get_pixel(0, 1), Rgb([0, 0, 0]));
        assert_eq!(*canvas.get_pixel(1, 2), Rgb([0, 0, 0]));
        assert_eq!(*canvas.get_pixel(2, 1), WHITE);
        assert_eq!(*canvas.get_pixel(0, 0), WHITE);
    }

    #[test]
    fn png_has_signature() {
        let canvas = RgbImage::from_pixel(2, 2, WHITE);
        let png = encode_png(&canvas).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }
}
