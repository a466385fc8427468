// src/test_support.rs

//! Helpers for building glyph sheets in tests.

use crate::color::Rgba;
use crate::surface::PixelBuffer;

/// Build a sheet from a marker-row pattern.
///
/// Each byte of `row` is one column: `|` is a marker pixel, anything else a
/// body pixel. Body rows below are filled with a colour unique to each
/// column (`r = x`, `g = y`) so blits can be traced back to their source.
pub(crate) fn sheet(row: &str, height: u32) -> PixelBuffer {
    let width = row.len() as u32;
    let mut buf = PixelBuffer::new(width, height);
    for (x, b) in row.bytes().enumerate() {
        let x = x as u32;
        let top = if b == b'|' {
            Rgba::MARKER
        } else {
            Rgba::opaque(0, 0, 0)
        };
        buf.set(x, 0, top);
        for y in 1..height {
            buf.set(x, y, body_color(x, y));
        }
    }
    buf
}

/// Colour `sheet` puts at body pixel `(x, y)`.
pub(crate) fn body_color(x: u32, y: u32) -> Rgba {
    Rgba::opaque(x as u8, y as u8, 7)
}
