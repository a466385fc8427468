// src/geometry.rs

//! Pixel-space geometry shared by extraction, glyphs and layout.

/// A position in destination pixel space. May be negative when centered
/// text is wider than the area it is centered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// The horizontal span `[left, right)` of one glyph on a sheet.
///
/// `height` is the glyph body height: the sheet height minus the marker row.
/// Always `right > left` and `height > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlyphRect {
    pub left: u32,
    pub right: u32,
    pub height: u32,
}

impl GlyphRect {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height)
    }

    /// The region of the sheet to copy when drawing: the glyph's columns,
    /// rows `1..=height` (row 0 is the marker row).
    pub fn source(&self) -> SourceRect {
        SourceRect {
            x: self.left,
            y: 1,
            width: self.width(),
            height: self.height,
        }
    }
}

/// A rectangle on a sheet to be copied 1:1 onto a draw target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}
