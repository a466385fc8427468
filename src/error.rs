// src/error.rs

use thiserror::Error;

/// Errors raised while turning a sheet into a font.
///
/// A sheet with fewer glyphs than requested characters is not an error; see
/// `ExtractionReport::unbound`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SheetError {
    #[error("Glyph sheet is {height} px tall; need a marker row plus at least one body row")]
    SheetTooShort { height: u32 },
    #[error("No glyphs found: the marker row contains no body run closed by a marker")]
    NoGlyphs,
    #[error("Character sequence is empty")]
    EmptyCharacterSequence,
    #[error("Pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
}
