//! Preset tables for compression levels and social output dimensions.
//!
//! Both tables are immutable and keyed by an enum. Adding a preset is a
//! data-table edit: extend the enum, add the match arm, done. Exactly one
//! [`CompressionLevel`] is active whenever a selection exists; a
//! [`SocialPreset`] is optional (`None` keeps original dimensions).
//!
//! ## Types
//!
//! - [`Quality`] — Lossy encoding quality factor in (0, 1]. Clamped on construction.
//! - [`CompressionLevel`] — Key into the quality preset table.
//! - [`CompressionPreset`] — `{quality, label, description}` bundle for one level.
//! - [`SocialPreset`] — Named `{width, height}` resize target.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Quality factor for lossy encoding, in (0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quality(f32);

impl Quality {
    pub fn new(value: f32) -> Self {
        Self(value.clamp(0.01, 1.0))
    }

    pub fn value(self) -> f32 {
        self.0
    }

    /// The factor mapped onto the 1-100 scale JPEG encoders expect.
    pub fn jpeg_scale(self) -> u8 {
        (self.0 * 100.0).round() as u8
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(0.7)
    }
}

/// A named compression configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressionPreset {
    pub quality: Quality,
    pub label: &'static str,
    pub description: &'static str,
}

/// Key into the compression preset table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompressionLevel {
    HighQuality,
    Balanced,
    SmallFile,
    SuperSmall,
}

impl CompressionLevel {
    /// All levels, in display order.
    pub const ALL: [CompressionLevel; 4] = [
        CompressionLevel::HighQuality,
        CompressionLevel::Balanced,
        CompressionLevel::SmallFile,
        CompressionLevel::SuperSmall,
    ];

    pub fn preset(self) -> CompressionPreset {
        match self {
            CompressionLevel::HighQuality => CompressionPreset {
                quality: Quality::new(0.9),
                label: "High Quality",
                description: "Minimal compression",
            },
            CompressionLevel::Balanced => CompressionPreset {
                quality: Quality::new(0.7),
                label: "Balanced",
                description: "Good quality, smaller size",
            },
            CompressionLevel::SmallFile => CompressionPreset {
                quality: Quality::new(0.5),
                label: "Small File",
                description: "Maximum compression",
            },
            CompressionLevel::SuperSmall => CompressionPreset {
                quality: Quality::new(0.3),
                label: "Super Small",
                description: "Heaviest compression, visible quality loss",
            },
        }
    }
}

impl Default for CompressionLevel {
    fn default() -> Self {
        CompressionLevel::Balanced
    }
}

/// Output-dimension preset for social platforms.
///
/// Independent of [`CompressionLevel`]: the resize happens before the
/// quality encode, and `None` at the workflow level means no resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SocialPreset {
    InstagramSquare,
    InstagramPortrait,
    Story,
    XPost,
}

impl SocialPreset {
    /// All presets, in display order.
    pub const ALL: [SocialPreset; 4] = [
        SocialPreset::InstagramSquare,
        SocialPreset::InstagramPortrait,
        SocialPreset::Story,
        SocialPreset::XPost,
    ];

    /// Target dimensions as (width, height).
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            SocialPreset::InstagramSquare => (1080, 1080),
            SocialPreset::InstagramPortrait => (1080, 1350),
            SocialPreset::Story => (1080, 1920),
            SocialPreset::XPost => (1200, 675),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SocialPreset::InstagramSquare => "Instagram Square",
            SocialPreset::InstagramPortrait => "Instagram Portrait",
            SocialPreset::Story => "Story",
            SocialPreset::XPost => "X Post",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_clamps_to_valid_range() {
        assert_eq!(Quality::new(0.0).value(), 0.01);
        assert_eq!(Quality::new(0.5).value(), 0.5);
        assert_eq!(Quality::new(1.5).value(), 1.0);
    }

    #[test]
    fn quality_maps_to_jpeg_scale() {
        assert_eq!(Quality::new(0.7).jpeg_scale(), 70);
        assert_eq!(Quality::new(1.0).jpeg_scale(), 100);
        assert_eq!(Quality::new(0.01).jpeg_scale(), 1);
    }

    #[test]
    fn default_level_is_balanced() {
        assert_eq!(CompressionLevel::default(), CompressionLevel::Balanced);
        assert_eq!(CompressionLevel::default().preset().quality.value(), 0.7);
    }

    #[test]
    fn preset_table_values() {
        assert_eq!(
            CompressionLevel::HighQuality.preset().quality.value(),
            0.9
        );
        assert_eq!(CompressionLevel::SmallFile.preset().quality.value(), 0.5);
        assert_eq!(CompressionLevel::SuperSmall.preset().quality.value(), 0.3);
        assert_eq!(CompressionLevel::Balanced.preset().label, "Balanced");
    }

    #[test]
    fn social_dimensions() {
        assert_eq!(SocialPreset::InstagramSquare.dimensions(), (1080, 1080));
        assert_eq!(SocialPreset::Story.dimensions(), (1080, 1920));
        assert_eq!(SocialPreset::XPost.dimensions(), (1200, 675));
    }

    #[test]
    fn level_parses_from_kebab_case() {
        let level: CompressionLevel = serde_json::from_str("\"small-file\"").unwrap();
        assert_eq!(level, CompressionLevel::SmallFile);
    }
}
