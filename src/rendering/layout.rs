/// Placement math for the two elements on a page

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Whether the rect lies completely inside a `width`×`height` area at the origin
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x + self.width as i64 <= width as i64
            && self.y + self.height as i64 <= height as i64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize {
    pub width: u32,
    pub height: u32,
}

/// Offset that centers `inner` within `outer`, divided by `parts`.
///
/// Uses floor division so an element larger than the page gets a negative
/// offset and is clipped evenly on both sides.
fn offset(outer: u32, inner: u32, parts: i64) -> i64 {
    (outer as i64 - inner as i64).div_euclid(parts)
}

/// Code graphic: centered horizontally, a quarter of the free space from the top.
///
/// The quarter keeps the code above the middle of the page so the label has
/// room underneath.
pub fn place_code(page: PageSize, code_width: u32, code_height: u32) -> Rect {
    Rect {
        x: offset(page.width, code_width, 2),
        y: offset(page.height, code_height, 4),
        width: code_width,
        height: code_height,
    }
}

/// Label: centered horizontally, top edge at the fixed `top` line.
pub fn place_label(page: PageSize, text_width: u32, text_height: u32, top: u32) -> Rect {
    Rect {
        x: offset(page.width, text_width, 2),
        y: top as i64,
        width: text_width,
        height: text_height,
    }
}
