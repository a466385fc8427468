// src/surface.rs

//! Pixel access and blitting primitives consumed by the font code.
//!
//! Hosts plug their own graphics backend in through two traits:
//! - `GlyphSheet`: read-only access to the sheet image glyphs are cut from
//! - `DrawTarget`: a canvas that can copy a sheet region onto itself
//!
//! `PixelBuffer` is a plain in-memory RGBA implementation of both, useful
//! for headless rendering and tests.

use crate::color::Rgba;
use crate::error::SheetError;
use crate::geometry::{Point, SourceRect};

/// Read-only pixel access to a glyph sheet.
pub trait GlyphSheet {
    /// Width of the sheet in pixels.
    fn width(&self) -> u32;

    /// Height of the sheet in pixels, marker row included.
    fn height(&self) -> u32;

    /// Read the pixel at `(x, y)`.
    ///
    /// Only called with in-bounds coordinates.
    fn pixel(&self, x: u32, y: u32) -> Rgba;
}

/// A canvas glyphs are drawn onto.
///
/// Implementors copy `src` from `sheet` so that its top-left pixel lands on
/// `dest`, pixel for pixel with no scaling. Parts falling outside the
/// canvas are clipped.
pub trait DrawTarget<S: GlyphSheet + ?Sized> {
    fn blit(&mut self, sheet: &S, src: SourceRect, dest: Point);
}

/// Row-major RGBA pixel buffer, 4 bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a fully transparent buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; width as usize * height as usize * 4],
        }
    }

    /// Wrap existing RGBA bytes. The length must be `width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, SheetError> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(SheetError::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Returns the pixel at `(x, y)`, or `None` outside the buffer.
    pub fn get(&self, x: u32, y: u32) -> Option<Rgba> {
        let idx = self.index(x, y)?;
        let mut px = [0u8; 4];
        px.copy_from_slice(&self.data[idx..idx + 4]);
        Some(Rgba::from_bytes(px))
    }

    /// Writes one pixel. Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: u32, y: u32, color: Rgba) {
        if let Some(idx) = self.index(x, y) {
            self.data[idx..idx + 4].copy_from_slice(&color.to_bytes());
        }
    }

    /// Fill every pixel with `color`.
    pub fn fill(&mut self, color: Rgba) {
        let bytes = color.to_bytes();
        for pixel in self.data.chunks_exact_mut(4) {
            pixel.copy_from_slice(&bytes);
        }
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 4)
    }
}

impl GlyphSheet for PixelBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixel(&self, x: u32, y: u32) -> Rgba {
        self.get(x, y).unwrap_or(Rgba::TRANSPARENT)
    }
}

impl DrawTarget<PixelBuffer> for PixelBuffer {
    fn blit(&mut self, sheet: &PixelBuffer, src: SourceRect, dest: Point) {
        // Columns of `src` that survive clipping on both sides.
        let col_start = (-(dest.x as i64)).max(0);
        let col_end = (src.width as i64)
            .min(sheet.width as i64 - src.x as i64)
            .min(self.width as i64 - dest.x as i64);
        if col_start >= col_end {
            return;
        }
        let row_bytes = ((col_end - col_start) * 4) as usize;

        for row in 0..src.height as i64 {
            let src_y = src.y as i64 + row;
            if src_y >= sheet.height as i64 {
                break;
            }
            let dest_y = dest.y as i64 + row;
            if dest_y < 0 {
                continue;
            }
            if dest_y >= self.height as i64 {
                break;
            }

            let src_start = ((src_y * sheet.width as i64 + src.x as i64 + col_start) * 4) as usize;
            let dest_start =
                ((dest_y * self.width as i64 + dest.x as i64 + col_start) * 4) as usize;
            self.data[dest_start..dest_start + row_bytes]
                .copy_from_slice(&sheet.data[src_start..src_start + row_bytes]);
        }
    }
}
