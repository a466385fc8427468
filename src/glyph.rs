// src/glyph.rs

//! Defines the `Glyph` type: one drawable character cell of a font.
//!
//! A glyph is either cut from a shared sheet image or a non-printing spacer
//! that only reserves horizontal space (used for a synthesized space).

use std::sync::Arc;

use crate::geometry::{GlyphRect, Point, Size};
use crate::surface::{DrawTarget, GlyphSheet};

/// A single character of a bitmap font.
#[derive(Debug)]
pub enum Glyph<S> {
    /// Pixels copied from a region of the sheet.
    Sheet { sheet: Arc<S>, rect: GlyphRect },
    /// Draws nothing; `width` pixels wide and 1 pixel tall.
    Spacer { width: u32 },
}

// Manual impl: cloning only bumps the sheet's refcount, so `S: Clone` is not needed.
impl<S> Clone for Glyph<S> {
    fn clone(&self) -> Self {
        match self {
            Glyph::Sheet { sheet, rect } => Glyph::Sheet {
                sheet: Arc::clone(sheet),
                rect: *rect,
            },
            Glyph::Spacer { width } => Glyph::Spacer { width: *width },
        }
    }
}

impl<S> Glyph<S> {
    pub fn sheet(sheet: Arc<S>, rect: GlyphRect) -> Self {
        Glyph::Sheet { sheet, rect }
    }

    pub fn spacer(width: u32) -> Self {
        Glyph::Spacer { width }
    }

    /// Pixel size of the glyph.
    pub fn size(&self) -> Size {
        match self {
            Glyph::Sheet { rect, .. } => rect.size(),
            Glyph::Spacer { width } => Size::new(*width, 1),
        }
    }

    pub fn width(&self) -> u32 {
        self.size().width
    }

    pub fn height(&self) -> u32 {
        self.size().height
    }

    /// The sheet region this glyph is cut from; `None` for spacers.
    pub fn rect(&self) -> Option<GlyphRect> {
        match self {
            Glyph::Sheet { rect, .. } => Some(*rect),
            Glyph::Spacer { .. } => None,
        }
    }

    pub fn is_printing(&self) -> bool {
        matches!(self, Glyph::Sheet { .. })
    }
}

impl<S: GlyphSheet> Glyph<S> {
    /// Draw the glyph with its top-left corner at `at`.
    pub fn draw<T: DrawTarget<S> + ?Sized>(&self, target: &mut T, at: Point) {
        match self {
            Glyph::Sheet { sheet, rect } => target.blit(sheet, rect.source(), at),
            Glyph::Spacer { .. } => {} // Non-printing
        }
    }
}
