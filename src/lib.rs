// src/lib.rs

//! Proportional bitmap fonts read from SFont glyph sheets.
//!
//! An SFont sheet is an image with every glyph side by side and a marker
//! row on top: pure magenta pixels separate the glyphs, any other colour
//! marks a glyph column. `GlyphExtractor` cuts a sheet into a
//! `FontCatalog`, which measures and draws lines of text onto any
//! `DrawTarget`.
//!
//! ```
//! use sfont::{FontConfig, PixelBuffer, Point};
//!
//! # fn sheet() -> PixelBuffer {
//! #     let mut sheet = PixelBuffer::new(5, 3);
//! #     for x in [0, 2, 4] {
//! #         sheet.set(x, 0, sfont::Rgba::MARKER);
//! #     }
//! #     sheet
//! # }
//! let config = FontConfig::from_json_str(r#"{ "characters": "AB" }"#)?;
//! let font = config.extractor().extract(sheet())?;
//!
//! let mut canvas = PixelBuffer::new(64, 16);
//! font.draw_text_centered(&mut canvas, Point::new(32, 4), "ABBA");
//! assert_eq!(font.text_width("ABBA"), 7);
//! # Ok::<(), anyhow::Error>(())
//! ```

// Declare modules
pub mod catalog;
pub mod color;
pub mod config;
pub mod error;
pub mod extract;
pub mod geometry;
pub mod glyph;
pub mod layout;
pub mod surface;

#[cfg(test)]
mod test_support;

pub use catalog::FontCatalog;
pub use color::Rgba;
pub use config::FontConfig;
pub use error::SheetError;
pub use extract::{ExtractionReport, GlyphExtractor, MarkerRuns, STANDARD_CHARACTERS};
pub use geometry::{GlyphRect, Point, Size, SourceRect};
pub use glyph::Glyph;
pub use layout::{Advances, Placement};
pub use surface::{DrawTarget, GlyphSheet, PixelBuffer};
