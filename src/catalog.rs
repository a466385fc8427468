// src/catalog.rs

//! `FontCatalog`: the character-to-glyph map of a bitmap font plus its
//! uniform inter-character spacing.
//!
//! Catalogs are normally produced by `GlyphExtractor`, but can also be
//! populated by hand. Text measurement and drawing live in `crate::layout`.

use std::collections::HashMap;

use crate::glyph::Glyph;

/// A bitmap font: at most one glyph per character and a fixed spacing.
///
/// Spacing is put between consecutive drawn characters, never before the
/// first or after the last.
#[derive(Debug)]
pub struct FontCatalog<S> {
    glyphs: HashMap<char, Glyph<S>>,
    spacing: u32,
}

impl<S> Clone for FontCatalog<S> {
    fn clone(&self) -> Self {
        Self {
            glyphs: self.glyphs.clone(),
            spacing: self.spacing,
        }
    }
}

impl<S> FontCatalog<S> {
    /// Create an empty catalog.
    pub fn new(spacing: u32) -> Self {
        Self {
            glyphs: HashMap::new(),
            spacing,
        }
    }

    /// Pixels inserted between consecutive characters.
    pub fn spacing(&self) -> u32 {
        self.spacing
    }

    /// Bind `glyph` to `c`, replacing any glyph already bound to it.
    ///
    /// Intended for initial population; the layout functions never mutate.
    pub fn add_character(&mut self, c: char, glyph: Glyph<S>) -> Option<Glyph<S>> {
        self.glyphs.insert(c, glyph)
    }

    /// The glyph bound to `c`, if any.
    pub fn character(&self, c: char) -> Option<&Glyph<S>> {
        self.glyphs.get(&c)
    }

    pub fn contains(&self, c: char) -> bool {
        self.glyphs.contains_key(&c)
    }

    /// Number of characters with a glyph.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Iterate all bindings in unspecified order.
    pub fn characters(&self) -> impl Iterator<Item = (char, &Glyph<S>)> {
        self.glyphs.iter().map(|(c, g)| (*c, g))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::PixelBuffer;

    #[test]
    fn test_new_catalog_is_empty() {
        let catalog: FontCatalog<PixelBuffer> = FontCatalog::new(2);
        assert!(catalog.is_empty());
        assert_eq!(catalog.spacing(), 2);
        assert!(catalog.character('a').is_none());
    }

    #[test]
    fn test_add_character_replaces() {
        let mut catalog: FontCatalog<PixelBuffer> = FontCatalog::new(0);
        assert!(catalog.add_character('a', Glyph::spacer(3)).is_none());
        let old = catalog.add_character('a', Glyph::spacer(5));
        assert_eq!(old.map(|g| g.width()), Some(3));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.character('a').map(Glyph::width), Some(5));
        assert!(catalog.contains('a'));
        assert!(!catalog.contains('b'));
    }

    #[test]
    fn test_characters_iterates_all() {
        let mut catalog: FontCatalog<PixelBuffer> = FontCatalog::new(0);
        catalog.add_character('x', Glyph::spacer(1));
        catalog.add_character('y', Glyph::spacer(2));
        let mut chars: Vec<char> = catalog.characters().map(|(c, _)| c).collect();
        chars.sort_unstable();
        assert_eq!(chars, vec!['x', 'y']);
    }
}
