//! RGB seed color handling with hex parsing and serialization.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Seed color as red, green, and blue channels (0-255 each).
///
/// Parses from and formats to `#RRGGBB` hex strings. Color space
/// conversions live behind [`crate::convert::ColorSpaceConverter`];
/// this type only carries channel data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl RgbColor {
    /// Pure white, the light blend overlay.
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Pure black, the dark blend overlay.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a hex color string, with or without the leading `#`.
    ///
    /// Exactly six hex digits are required; shorthand forms like `#FFF`
    /// are rejected. Surrounding whitespace is ignored, digit case is not
    /// significant.
    ///
    /// # Examples
    ///
    /// ```
    /// use shadekit::models::RgbColor;
    ///
    /// let seed = RgbColor::from_hex("#689FD4").unwrap();
    /// assert_eq!(seed, RgbColor::new(104, 159, 212));
    ///
    /// let seed = RgbColor::from_hex("1a1b1c").unwrap();
    /// assert_eq!(seed, RgbColor::new(26, 27, 28));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not six hex digits.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);

        if digits.len() != 6 {
            anyhow::bail!("Invalid hex color '{digits}'. Expected 6 hex digits (RRGGBB)");
        }

        let packed = u32::from_str_radix(digits, 16)
            .context(format!("Invalid hex digits in color '{digits}'"))?;

        Ok(Self::new(
            (packed >> 16) as u8,
            (packed >> 8) as u8,
            packed as u8,
        ))
    }

    /// Formats the color as `#RRGGBB` with uppercase digits.
    ///
    /// # Examples
    ///
    /// ```
    /// use shadekit::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::new(104, 159, 212).to_hex(), "#689FD4");
    /// assert_eq!(RgbColor::new(0, 128, 255).to_hex(), "#0080FF");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Linearly blends this color toward `other`.
    ///
    /// `amount` is clamped to 0-1; 0 returns `self` unchanged, 1 returns
    /// `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use shadekit::models::RgbColor;
    ///
    /// let seed = RgbColor::new(100, 150, 200);
    /// assert_eq!(seed.blend(RgbColor::BLACK, 0.0), seed);
    /// assert_eq!(seed.blend(RgbColor::WHITE, 1.0), RgbColor::WHITE);
    /// assert_eq!(seed.blend(RgbColor::BLACK, 0.5), RgbColor::new(50, 75, 100));
    /// ```
    #[must_use]
    pub fn blend(&self, other: Self, amount: f32) -> Self {
        let amount = amount.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 {
            let mixed = f32::from(a) * (1.0 - amount) + f32::from(b) * amount;
            mixed.round().clamp(0.0, 255.0) as u8
        };
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for RgbColor {
    /// Default color is white (#FFFFFF).
    fn default() -> Self {
        Self::WHITE
    }
}
