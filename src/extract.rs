// src/extract.rs

//! Glyph extraction from SFont sheets.
//!
//! An SFont sheet is an ordinary image whose top row is a ruler:
//!
//! ```text
//! row 0:  ||...|....|..|     '|' = pure magenta marker, '.' = anything else
//! rows 1+: glyph pixels
//! ```
//!
//! Every run of non-marker ("body") columns that is preceded and followed by
//! a marker is one glyph, in the order of the character sequence. Body
//! columns before the first marker are padding, and a trailing run with no
//! closing marker is dropped.

use std::sync::Arc;

use log::{debug, trace, warn};

use crate::catalog::FontCatalog;
use crate::error::SheetError;
use crate::geometry::GlyphRect;
use crate::glyph::Glyph;
use crate::surface::GlyphSheet;

/// The characters of a standard SFont sheet, left to right: printable ASCII
/// `!` (0x21) through `~` (0x7E).
pub const STANDARD_CHARACTERS: &str = "!\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstuvwxyz{|}~";

/// Spacing used when none is given.
pub const DEFAULT_SPACING: u32 = 1;

/// Builds a `FontCatalog` from a sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphExtractor {
    spacing: u32,
    characters: Vec<char>,
}

impl Default for GlyphExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_SPACING, STANDARD_CHARACTERS)
    }
}

/// What an extraction produced, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionReport {
    /// Length of the character sequence.
    pub requested: usize,
    /// Number of glyphs cut from the sheet.
    pub bound: usize,
    /// Width of the widest sheet glyph.
    pub widest: u32,
    /// Whether a spacer had to be made up for `' '`.
    pub space_synthesized: bool,
}

impl ExtractionReport {
    /// Characters of the sequence left without a glyph because the sheet ran
    /// out of glyphs first.
    pub fn unbound(&self) -> usize {
        self.requested - self.bound
    }
}

impl GlyphExtractor {
    /// `characters` lists the glyphs on the sheet from left to right.
    pub fn new(spacing: u32, characters: &str) -> Self {
        Self {
            spacing,
            characters: characters.chars().collect(),
        }
    }

    /// Standard characters with the given spacing.
    pub fn with_spacing(spacing: u32) -> Self {
        Self::new(spacing, STANDARD_CHARACTERS)
    }

    /// Default spacing with the given characters.
    pub fn with_characters(characters: &str) -> Self {
        Self::new(DEFAULT_SPACING, characters)
    }

    pub fn spacing(&self) -> u32 {
        self.spacing
    }

    pub fn characters(&self) -> &[char] {
        &self.characters
    }

    /// Extract a font from `sheet`, taking ownership of it.
    pub fn extract<S: GlyphSheet>(&self, sheet: S) -> Result<FontCatalog<S>, SheetError> {
        self.extract_shared(Arc::new(sheet))
    }

    /// Extract a font from a sheet that is shared with other owners.
    pub fn extract_shared<S: GlyphSheet>(
        &self,
        sheet: Arc<S>,
    ) -> Result<FontCatalog<S>, SheetError> {
        self.extract_with_report(sheet).map(|(catalog, _)| catalog)
    }

    /// Extract a font and report how much of the character sequence was bound.
    ///
    /// A sheet with fewer glyphs than characters yields a partial font; the
    /// leftover characters simply have no glyph. The returned font always
    /// has a glyph for `' '`: when the sequence did not bind one, a spacer
    /// half as wide as the widest glyph (at least 1 px) is added.
    ///
    /// # Errors
    /// - `EmptyCharacterSequence` if there is nothing to bind
    /// - `SheetTooShort` if the sheet has no row below the marker row
    /// - `NoGlyphs` if no glyph could be cut from the sheet
    pub fn extract_with_report<S: GlyphSheet>(
        &self,
        sheet: Arc<S>,
    ) -> Result<(FontCatalog<S>, ExtractionReport), SheetError> {
        if self.characters.is_empty() {
            return Err(SheetError::EmptyCharacterSequence);
        }
        let sheet_height = sheet.height();
        if sheet_height < 2 {
            return Err(SheetError::SheetTooShort {
                height: sheet_height,
            });
        }
        let glyph_height = sheet_height - 1;

        let mut catalog = FontCatalog::new(self.spacing);
        let mut bound = 0;
        let mut widest = 0;

        // zip() stops pulling spans once the characters run out, so the rest
        // of the marker row is never scanned.
        for (&c, (left, right)) in self.characters.iter().zip(MarkerRuns::new(&*sheet)) {
            let rect = GlyphRect {
                left,
                right,
                height: glyph_height,
            };
            trace!("Glyph {:?} at columns [{}, {})", c, left, right);
            widest = widest.max(rect.width());
            catalog.add_character(c, Glyph::sheet(Arc::clone(&sheet), rect));
            bound += 1;
        }

        if bound == 0 {
            return Err(SheetError::NoGlyphs);
        }

        let space_synthesized = !catalog.contains(' ');
        if space_synthesized {
            let width = (widest / 2).max(1);
            trace!("No space glyph on sheet, using {} px spacer", width);
            catalog.add_character(' ', Glyph::spacer(width));
        }

        let report = ExtractionReport {
            requested: self.characters.len(),
            bound,
            widest,
            space_synthesized,
        };
        if report.unbound() > 0 {
            warn!(
                "Sheet holds {} glyphs but {} characters were requested; {} left unbound",
                report.bound,
                report.requested,
                report.unbound()
            );
        }
        debug!(
            "Extracted {} glyphs ({} px tall, widest {} px, spacing {})",
            report.bound, glyph_height, widest, self.spacing
        );
        Ok((catalog, report))
    }
}

/// Iterator over the glyph column spans `(left, right)` of a sheet's marker
/// row, left to right. `right` is exclusive and always greater than `left`.
pub struct MarkerRuns<'a, S: ?Sized> {
    sheet: &'a S,
    x: u32,
    /// Column just after the most recent marker.
    start: Option<u32>,
    /// Whether a body pixel was seen since the most recent marker.
    in_body: bool,
}

impl<'a, S: GlyphSheet + ?Sized> MarkerRuns<'a, S> {
    pub fn new(sheet: &'a S) -> Self {
        Self {
            sheet,
            x: 0,
            start: None,
            in_body: false,
        }
    }
}

impl<S: GlyphSheet + ?Sized> Iterator for MarkerRuns<'_, S> {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        let width = self.sheet.width();
        while self.x < width {
            let x = self.x;
            self.x += 1;

            if !self.sheet.pixel(x, 0).is_marker() {
                self.in_body = true;
                continue;
            }

            let closed = if self.in_body { self.start } else { None };
            self.in_body = false;
            self.start = Some(x + 1);
            if let Some(left) = closed {
                return Some((left, x));
            }
        }
        None
    }
}
