// src/color.rs

//! Defines the `Rgba` pixel value read from glyph sheets and the marker colour
//! that separates glyphs on a sheet's top row.

/// RGBA color in 32-bit format (8 bits per channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Pure magenta. On row 0 of a sheet this delimits glyph columns.
    pub const MARKER: Rgba = Rgba::opaque(255, 0, 255);
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Returns true if this pixel is a marker pixel.
    ///
    /// Only the colour channels are compared. A semi-transparent (or fully
    /// transparent) magenta pixel still counts as a marker.
    pub fn is_marker(&self) -> bool {
        self.r == 255 && self.g == 0 && self.b == 255
    }

    /// Convert to RGBA byte array
    pub fn to_bytes(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }
}
