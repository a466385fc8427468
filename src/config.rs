// src/config.rs

//! Defines the configuration of a font sheet.
//!
//! A sheet image is usually shipped with a small JSON description telling
//! which characters it holds and how far apart to draw them. Missing fields
//! fall back to the classic SFont layout: the 94 printable ASCII characters
//! from `!` to `~`, 1 px apart.

use std::fs;
use std::path::Path;

use anyhow::Context;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::extract::{GlyphExtractor, DEFAULT_SPACING, STANDARD_CHARACTERS};

/// How to read a glyph sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)] // Apply default values for the entire struct if a field is missing.
pub struct FontConfig {
    /// Pixels drawn between consecutive characters.
    pub spacing: u32,
    /// Characters on the sheet, left to right.
    pub characters: String,
}

impl Default for FontConfig {
    fn default() -> Self {
        FontConfig {
            spacing: DEFAULT_SPACING,
            characters: STANDARD_CHARACTERS.to_string(),
        }
    }
}

impl FontConfig {
    /// Parse a config from JSON text.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let config: FontConfig =
            serde_json::from_str(json).context("Failed to parse font config JSON")?;
        if config.characters.is_empty() {
            warn!("Font config lists no characters; extraction will fail");
        }
        Ok(config)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read font config {}", path.display()))?;
        Self::from_json_str(&json)
            .with_context(|| format!("Invalid font config {}", path.display()))
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_string(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize font config")
    }

    /// An extractor reading sheets laid out as configured.
    pub fn extractor(&self) -> GlyphExtractor {
        GlyphExtractor::new(self.spacing, &self.characters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SheetError;
    use crate::test_support::sheet;
    use test_log::test;

    #[test]
    fn test_default_config() {
        let config = FontConfig::default();
        assert_eq!(config.spacing, 1);
        assert_eq!(config.characters.chars().count(), 94);
        assert_eq!(config.extractor(), GlyphExtractor::default());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = FontConfig::from_json_str(r#"{ "spacing": 3 }"#).unwrap();
        assert_eq!(config.spacing, 3);
        assert_eq!(config.characters, STANDARD_CHARACTERS);

        let config = FontConfig::from_json_str("{}").unwrap();
        assert_eq!(config, FontConfig::default());
    }

    #[test]
    fn test_json_round_trip() {
        let config = FontConfig {
            spacing: 0,
            characters: "0123456789".to_string(),
        };
        let json = config.to_json_string().unwrap();
        assert_eq!(FontConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let err = FontConfig::from_json_str(r#"{ "spacing": -1 }"#).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse font config JSON"));
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = FontConfig::load("/nonexistent/sfont/font.json").unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/sfont/font.json"));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("sfont-config-{}.json", std::process::id()));
        fs::write(&path, r#"{ "spacing": 2, "characters": "xy" }"#).unwrap();
        let config = FontConfig::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config.spacing, 2);
        assert_eq!(config.characters, "xy");
    }

    #[test]
    fn test_configured_extractor_drives_extraction() {
        let config = FontConfig::from_json_str(r#"{ "spacing": 4, "characters": "xy" }"#).unwrap();
        let catalog = config.extractor().extract(sheet("|..|...|", 3)).unwrap();
        assert_eq!(catalog.spacing(), 4);
        assert_eq!(catalog.character('y').map(|g| g.width()), Some(3));
    }

    #[test]
    fn test_empty_character_list_fails_extraction() {
        let config = FontConfig::from_json_str(r#"{ "characters": "" }"#).unwrap();
        let err = config.extractor().extract(sheet("|.|", 2)).unwrap_err();
        assert_eq!(err, SheetError::EmptyCharacterSequence);
    }
}
