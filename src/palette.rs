//! Color palette for contribution tiers
//!
//! Cell fills are resolved through a palette so a calendar can be re-themed
//! without touching layout logic. Palettes are plain TOML files with one color
//! per tier plus the month-label color; entries missing from a custom palette
//! fall back to the defaults.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::layout::Tier;

/// Errors that can occur when loading or parsing palettes
#[derive(Error, Debug)]
pub enum PaletteError {
    #[error("Failed to read palette file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse palette TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Concrete colors for each contribution tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Optional name for the palette
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Fill for days with no contributions
    pub neutral: String,
    /// Fill for low-tier days
    pub low: String,
    /// Fill for medium-tier days
    pub medium: String,
    /// Fill for high-tier days
    pub high: String,
    /// Month label text color
    pub label: String,
}

/// TOML structure for deserializing palettes
#[derive(Deserialize)]
struct TomlPalette {
    metadata: Option<TomlMetadata>,
    colors: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

/// Default palette - gray for empty days, orange ramp for activity
const DEFAULT_PALETTE: &str = r##"
[colors]
neutral = "#e1e4e8"
low = "#f4c20d"
medium = "#f39c12"
high = "#e67e22"
label = "#333"
"##;

impl Palette {
    /// Load a palette from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, PaletteError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load a palette from a TOML string
    ///
    /// Tiers absent from the `[colors]` table keep their default color.
    pub fn from_toml_str(content: &str) -> Result<Self, PaletteError> {
        let parsed: TomlPalette = toml::from_str(content)?;
        let pick = |key: &str, default: &str| {
            parsed
                .colors
                .get(key)
                .cloned()
                .unwrap_or_else(|| default.to_string())
        };

        Ok(Palette {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            neutral: pick("neutral", "#e1e4e8"),
            low: pick("low", "#f4c20d"),
            medium: pick("medium", "#f39c12"),
            high: pick("high", "#e67e22"),
            label: pick("label", "#333"),
        })
    }

    /// Fill color for a tier
    pub fn color_for(&self, tier: Tier) -> &str {
        match tier {
            Tier::Neutral => &self.neutral,
            Tier::Low => &self.low,
            Tier::Medium => &self.medium,
            Tier::High => &self.high,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_toml_str(DEFAULT_PALETTE).expect("Default palette should be valid TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let palette = Palette::default();
        assert_eq!(palette.neutral, "#e1e4e8");
        assert_eq!(palette.low, "#f4c20d");
        assert_eq!(palette.medium, "#f39c12");
        assert_eq!(palette.high, "#e67e22");
        assert_eq!(palette.label, "#333");
    }

    #[test]
    fn test_color_for_tier() {
        let palette = Palette::default();
        assert_eq!(palette.color_for(Tier::Neutral), "#e1e4e8");
        assert_eq!(palette.color_for(Tier::High), "#e67e22");
    }

    #[test]
    fn test_parse_toml_with_metadata() {
        let toml_str = r##"
[metadata]
name = "Greens"
description = "GitHub-like green ramp"

[colors]
neutral = "#ebedf0"
low = "#9be9a8"
medium = "#40c463"
high = "#216e39"
"##;
        let palette = Palette::from_toml_str(toml_str).expect("Should parse");
        assert_eq!(palette.name, Some("Greens".to_string()));
        assert_eq!(palette.description, Some("GitHub-like green ramp".to_string()));
        assert_eq!(palette.high, "#216e39");
        // Omitted entries fall back to the defaults
        assert_eq!(palette.label, "#333");
    }

    #[test]
    fn test_parse_toml_without_metadata() {
        let toml_str = r##"
[colors]
neutral = "#ffffff"
"##;
        let palette = Palette::from_toml_str(toml_str).expect("Should parse");
        assert_eq!(palette.name, None);
        assert_eq!(palette.neutral, "#ffffff");
        assert_eq!(palette.low, "#f4c20d");
    }

    #[test]
    fn test_invalid_toml_error() {
        let invalid = "this is not valid toml {{{{";
        let result = Palette::from_toml_str(invalid);
        assert!(matches!(result, Err(PaletteError::ParseError(_))));
    }
}
