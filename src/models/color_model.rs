//! The three interchangeable seed color representations and their tagged
//! union.
//!
//! Hue is stored as a fraction of a full turn in `[0, 1)` across all models
//! so the small configured hue offsets (e.g. 0.02) mean the same thing
//! everywhere; converters map turns to degrees at their own boundary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::str::FromStr;

use crate::convert::ColorSpaceConverter;

use super::RgbColor;

/// A perceptual hue/chroma/tone value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hct {
    /// Hue as a fraction of a full turn, `[0, 1)`.
    pub hue: f32,
    /// Chroma (colorfulness); 0 is gray, the usable ceiling is gamut
    /// dependent (roughly 0-132 for sRGB).
    pub chroma: f32,
    /// Tone (perceptual lightness), 0-100.
    pub tone: f32,
}

impl Hct {
    /// Creates an HCT value from raw components.
    #[must_use]
    pub const fn new(hue: f32, chroma: f32, tone: f32) -> Self {
        Self { hue, chroma, tone }
    }
}

impl fmt::Display for Hct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "H{:.2} C{:.1} T{:.1}", self.hue, self.chroma, self.tone)
    }
}

impl Eq for Hct {}

impl Hash for Hct {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hue.to_bits().hash(state);
        self.chroma.to_bits().hash(state);
        self.tone.to_bits().hash(state);
    }
}

/// A hue/saturation/brightness value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsb {
    /// Hue as a fraction of a full turn, `[0, 1)`.
    pub hue: f32,
    /// Saturation, 0-1.
    pub saturation: f32,
    /// Brightness, 0-1.
    pub brightness: f32,
}

impl Hsb {
    /// Creates an HSB value from raw components.
    #[must_use]
    pub const fn new(hue: f32, saturation: f32, brightness: f32) -> Self {
        Self {
            hue,
            saturation,
            brightness,
        }
    }
}

impl fmt::Display for Hsb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "H{:.2} S{:.2} B{:.2}",
            self.hue, self.saturation, self.brightness
        )
    }
}

impl Eq for Hsb {}

impl Hash for Hsb {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hue.to_bits().hash(state);
        self.saturation.to_bits().hash(state);
        self.brightness.to_bits().hash(state);
    }
}

/// Which of the three color models a value or generation run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorModelKind {
    /// Perceptual hue/chroma/tone.
    Hct,
    /// Hue/saturation/brightness.
    Hsb,
    /// Plain RGB with blend-based shading.
    Rgb,
}

impl fmt::Display for ColorModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hct => "hct",
            Self::Hsb => "hsb",
            Self::Rgb => "rgb",
        };
        write!(f, "{name}")
    }
}

impl FromStr for ColorModelKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hct" => Ok(Self::Hct),
            "hsb" => Ok(Self::Hsb),
            "rgb" => Ok(Self::Rgb),
            other => anyhow::bail!("Unknown color model '{other}'. Expected hct, hsb or rgb"),
        }
    }
}

/// A seed value under exactly one of the three color models.
///
/// Serialization is variant-aware: the variant tag wraps the payload, so a
/// round-trip preserves which model the value was authored in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ColorModelValue {
    /// A perceptual hue/chroma/tone seed.
    Hct(Hct),
    /// A hue/saturation/brightness seed.
    Hsb(Hsb),
    /// A plain RGB seed.
    Rgb(RgbColor),
}

impl ColorModelValue {
    /// The model this value is authored in.
    #[must_use]
    pub const fn kind(&self) -> ColorModelKind {
        match self {
            Self::Hct(_) => ColorModelKind::Hct,
            Self::Hsb(_) => ColorModelKind::Hsb,
            Self::Rgb(_) => ColorModelKind::Rgb,
        }
    }

    /// This value viewed as HCT, converting if authored in another model.
    #[must_use]
    pub fn as_hct(&self, converter: &dyn ColorSpaceConverter) -> Hct {
        match *self {
            Self::Hct(value) => value,
            Self::Hsb(value) => converter.rgb_to_hct(converter.hsb_to_rgb(value)),
            Self::Rgb(color) => converter.rgb_to_hct(color),
        }
    }

    /// This value viewed as HSB, converting if authored in another model.
    #[must_use]
    pub fn as_hsb(&self, converter: &dyn ColorSpaceConverter) -> Hsb {
        match *self {
            Self::Hct(value) => converter.rgb_to_hsb(converter.hct_to_rgb(value)),
            Self::Hsb(value) => value,
            Self::Rgb(color) => converter.rgb_to_hsb(color),
        }
    }

    /// This value resolved to a concrete RGB color.
    #[must_use]
    pub fn as_rgb(&self, converter: &dyn ColorSpaceConverter) -> RgbColor {
        match *self {
            Self::Hct(value) => converter.hct_to_rgb(value),
            Self::Hsb(value) => converter.hsb_to_rgb(value),
            Self::Rgb(color) => color,
        }
    }

    /// Display label for this value viewed under `kind` (HCT and HSB as
    /// their numeric component form, RGB as uppercase hex).
    #[must_use]
    pub fn label(&self, kind: ColorModelKind, converter: &dyn ColorSpaceConverter) -> String {
        match kind {
            ColorModelKind::Hct => self.as_hct(converter).to_string(),
            ColorModelKind::Hsb => self.as_hsb(converter).to_string(),
            ColorModelKind::Rgb => self.as_rgb(converter).to_hex(),
        }
    }
}

impl Eq for ColorModelValue {}

impl Hash for ColorModelValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);
        match self {
            Self::Hct(value) => value.hash(state),
            Self::Hsb(value) => value.hash(state),
            Self::Rgb(color) => color.hash(state),
        }
    }
}

impl Default for ColorModelValue {
    /// Default seed is plain RGB white.
    fn default() -> Self {
        Self::Rgb(RgbColor::default())
    }
}
