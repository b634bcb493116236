//! Global tuning parameters shared by every color config at generation
//! time.
//!
//! One instance is passed by value into each generation call; there is no
//! ambient global. All fields have serde defaults so a hand-written TOML
//! file only needs the knobs it actually changes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which appearance mode the global skip count is attributed to when
/// numbering tone codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SkipScheme {
    /// Codes follow the light-mode table positions.
    #[default]
    Light,
    /// Codes follow the dark-mode table positions (shifted by the skip
    /// count).
    Dark,
}

impl fmt::Display for SkipScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Light => "light",
            Self::Dark => "dark",
        };
        write!(f, "{name}")
    }
}

/// Tunable constants for the shade generation pipeline, grouped by color
/// model. Hue offsets are fractions of a full turn (0.02 = 7.2 degrees).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteParameters {
    /// How many extreme tones are trimmed from every ramp.
    pub skip_count: usize,
    /// Which mode's table positions the tone codes follow.
    pub skip_scheme: SkipScheme,

    /// Hue shift applied to HCT dark-mode shades.
    pub hct_dark_hue_offset: f32,
    /// Chroma multiplier for HCT light-mode shades.
    pub hct_light_chroma_factor: f32,
    /// Chroma multiplier for HCT dark-mode shades.
    pub hct_dark_chroma_factor: f32,
    /// Tone multiplier for HCT light-mode shades.
    pub hct_light_tone_factor: f32,
    /// Tone multiplier for HCT dark-mode shades.
    pub hct_dark_tone_factor: f32,

    /// Hue shift applied to HSB dark-mode shades.
    pub hsb_dark_hue_offset: f32,
    /// Saturation factor for HSB light-mode shades.
    pub hsb_light_saturation_factor: f32,
    /// Saturation factor for HSB dark-mode shades.
    pub hsb_dark_saturation_factor: f32,
    /// Brightness skew strength for HSB light-mode shades.
    pub hsb_light_brightness_factor: f32,
    /// Brightness skew strength for HSB dark-mode shades.
    pub hsb_dark_brightness_factor: f32,

    /// Hue nudge applied to RGB light-mode shades.
    pub rgb_light_hue_offset: f32,
    /// Hue nudge applied to RGB dark-mode shades.
    pub rgb_dark_hue_offset: f32,
    /// Saturation multiplier for RGB light-mode shades.
    pub rgb_light_saturation_factor: f32,
    /// Saturation multiplier for RGB dark-mode shades.
    pub rgb_dark_saturation_factor: f32,
    /// Brightness multiplier for RGB light-mode shades.
    pub rgb_light_brightness_factor: f32,
    /// Brightness multiplier for RGB dark-mode shades.
    pub rgb_dark_brightness_factor: f32,
}

impl Default for PaletteParameters {
    fn default() -> Self {
        Self {
            skip_count: 1,
            skip_scheme: SkipScheme::Light,

            hct_dark_hue_offset: 0.02,
            hct_light_chroma_factor: 1.0,
            hct_dark_chroma_factor: 1.0,
            hct_light_tone_factor: 1.0,
            hct_dark_tone_factor: 1.0,

            hsb_dark_hue_offset: 0.02,
            hsb_light_saturation_factor: 1.0,
            hsb_dark_saturation_factor: 1.0,
            hsb_light_brightness_factor: 0.5,
            hsb_dark_brightness_factor: 0.5,

            rgb_light_hue_offset: 0.0,
            rgb_dark_hue_offset: 0.02,
            rgb_light_saturation_factor: 1.0,
            rgb_dark_saturation_factor: 0.85,
            rgb_light_brightness_factor: 1.0,
            rgb_dark_brightness_factor: 0.9,
        }
    }
}
