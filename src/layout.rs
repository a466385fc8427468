// src/layout.rs

//! Text measurement and single-line drawing over a `FontCatalog`.
//!
//! Characters without a glyph are skipped everywhere: they add no width,
//! take no spacing slot and do not move the cursor. None of these
//! operations mutate the catalog.

use std::str::Chars;

use log::trace;

use crate::catalog::FontCatalog;
use crate::geometry::{Point, Size};
use crate::glyph::Glyph;
use crate::surface::{DrawTarget, GlyphSheet};

/// One glyph of a laid-out line and where its top-left corner goes.
#[derive(Debug)]
pub struct Placement<'a, S> {
    pub character: char,
    pub glyph: &'a Glyph<S>,
    pub position: Point,
}

/// Iterator over the placements of a line of text, left to right.
///
/// The cursor advances by `glyph width + spacing` after each placed glyph,
/// saturating at `i32::MAX`.
pub struct Advances<'a, S> {
    catalog: &'a FontCatalog<S>,
    chars: Chars<'a>,
    cursor: Point,
}

impl<S> Advances<'_, S> {
    /// Where the next glyph would be placed.
    pub fn cursor(&self) -> Point {
        self.cursor
    }
}

impl<'a, S> Iterator for Advances<'a, S> {
    type Item = Placement<'a, S>;

    fn next(&mut self) -> Option<Self::Item> {
        for c in self.chars.by_ref() {
            let Some(glyph) = self.catalog.character(c) else {
                trace!("Skipping {:?}: not in font", c);
                continue;
            };
            let position = self.cursor;
            let advance = glyph.width().saturating_add(self.catalog.spacing());
            self.cursor.x = self
                .cursor
                .x
                .saturating_add(i32::try_from(advance).unwrap_or(i32::MAX));
            return Some(Placement {
                character: c,
                glyph,
                position,
            });
        }
        None
    }
}

impl<S> FontCatalog<S> {
    fn glyphs_for<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a Glyph<S>> + 'a {
        text.chars().filter_map(move |c| self.character(c))
    }

    /// Lay out `text` as a single line starting at `origin`.
    pub fn advances<'a>(&'a self, text: &'a str, origin: Point) -> Advances<'a, S> {
        Advances {
            catalog: self,
            chars: text.chars(),
            cursor: origin,
        }
    }

    /// Width of `text` in pixels: the glyph widths plus one spacing between
    /// each pair of consecutive glyphs.
    ///
    /// Text with no glyph in this font (including the empty string) is 0 wide.
    /// Saturates at `u32::MAX`.
    pub fn text_width(&self, text: &str) -> u32 {
        let mut count = 0u32;
        let mut width = 0u32;
        for glyph in self.glyphs_for(text) {
            width = width.saturating_add(glyph.width());
            count = count.saturating_add(1);
        }
        if count == 0 {
            return 0;
        }
        width.saturating_add((count - 1).saturating_mul(self.spacing()))
    }

    /// Height of the tallest glyph in `text`, or 0 if none are in the font.
    pub fn text_height(&self, text: &str) -> u32 {
        self.glyphs_for(text)
            .map(Glyph::height)
            .max()
            .unwrap_or(0)
    }

    pub fn text_size(&self, text: &str) -> Size {
        Size::new(self.text_width(text), self.text_height(text))
    }
}

impl<S: GlyphSheet> FontCatalog<S> {
    /// Draw `text` with its top-left corner at `(x, y)`.
    ///
    /// Returns the cursor after the last drawn glyph.
    pub fn draw_text<T>(&self, target: &mut T, x: i32, y: i32, text: &str) -> Point
    where
        T: DrawTarget<S> + ?Sized,
    {
        self.draw_text_at(target, Point::new(x, y), text)
    }

    /// Draw `text` with its top-left corner at `origin`.
    pub fn draw_text_at<T>(&self, target: &mut T, origin: Point, text: &str) -> Point
    where
        T: DrawTarget<S> + ?Sized,
    {
        let mut advances = self.advances(text, origin);
        for placement in advances.by_ref() {
            placement.glyph.draw(target, placement.position);
        }
        advances.cursor()
    }

    /// Draw `text` horizontally centered on `center.x`, top edge at `center.y`.
    pub fn draw_text_centered<T>(&self, target: &mut T, center: Point, text: &str) -> Point
    where
        T: DrawTarget<S> + ?Sized,
    {
        // u32::MAX / 2 == i32::MAX
        let half = (self.text_width(text) / 2) as i32;
        self.draw_text(target, center.x.saturating_sub(half), center.y, text)
    }

    /// Draw `text` horizontally centered between `left_x` and `right_x`.
    pub fn draw_text_centered_between<T>(
        &self,
        target: &mut T,
        left_x: i32,
        right_x: i32,
        y: i32,
        text: &str,
    ) -> Point
    where
        T: DrawTarget<S> + ?Sized,
    {
        // Summed in i64; the truncated mean of two i32 always fits back.
        let mid = (i64::from(left_x) + i64::from(right_x)) / 2;
        let center = Point::new(mid as i32, y);
        self.draw_text_centered(target, center, text)
    }
}
