//! Per-appearance-mode scheme configuration and its compact directive
//! grammar.
//!
//! Each color config carries two of these, one for light mode and one for
//! dark mode. The textual form is a semicolon-separated list of short
//! directives (`<` `>` scale, `[start,width]` range window, `S:<symbol>` /
//! `B:<symbol>` adjustment levels, `+` `-` skip direction) embedded in the
//! `L{...}` / `D{...}` blocks of a palette line.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::ParseError;

/// Direction a ramp's tones progress in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scale {
    /// Tones get lighter as the ramp index grows.
    Lightening,
    /// Tones get darker as the ramp index grows.
    Darkening,
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Lightening => "lightening",
            Self::Darkening => "darkening",
        };
        write!(f, "{name}")
    }
}

/// Which end of the ramp the global skip count trims for a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkipDirection {
    /// Trim from the start of the ramp.
    Forward,
    /// Trim from the end of the ramp.
    Backward,
}

impl fmt::Display for SkipDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        };
        write!(f, "{name}")
    }
}

/// Saturation or brightness shaping strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdjustmentLevel {
    /// Multiplier 0.25.
    Min,
    /// Multiplier 0.5.
    Low,
    /// Multiplier 1.0 (neutral).
    Medium,
    /// Multiplier 1.5.
    High,
    /// Multiplier 2.0.
    Max,
}

impl AdjustmentLevel {
    /// The multiplier this level applies to a shaping factor.
    #[must_use]
    pub const fn multiplier(&self) -> f32 {
        match self {
            Self::Min => 0.25,
            Self::Low => 0.5,
            Self::Medium => 1.0,
            Self::High => 1.5,
            Self::Max => 2.0,
        }
    }

    /// One-letter symbol used by the compact grammar.
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Min => 'N',
            Self::Low => 'L',
            Self::Medium => 'M',
            Self::High => 'H',
            Self::Max => 'X',
        }
    }

    /// Level for a grammar symbol, case-insensitive. `None` for symbols the
    /// grammar does not know.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'N' => Some(Self::Min),
            'L' => Some(Self::Low),
            'M' => Some(Self::Medium),
            'H' => Some(Self::High),
            'X' => Some(Self::Max),
            _ => None,
        }
    }
}

impl fmt::Display for AdjustmentLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Min => "min",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Max => "max",
        };
        write!(f, "{name}")
    }
}

/// Width of a tone-table sub-window, as a fixed fraction of the 0-100% axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RangeWidth {
    /// The full axis (100%).
    Whole,
    /// Three quarters of the axis (75%), traditionally "gibbous".
    ThreeQuarter,
    /// Half the axis (50%).
    Half,
    /// A quarter of the axis (25%).
    Quarter,
}

impl RangeWidth {
    /// Width in percent of the tone axis.
    #[must_use]
    pub const fn percent(&self) -> f32 {
        match self {
            Self::Whole => 100.0,
            Self::ThreeQuarter => 75.0,
            Self::Half => 50.0,
            Self::Quarter => 25.0,
        }
    }

    /// Maps an exact percent value back to a width.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::ConfigInconsistency`] when the percent is not
    /// one of the four fixed widths.
    pub fn from_percent(percent: f32) -> Result<Self, ParseError> {
        #[allow(clippy::float_cmp)] // widths are exact quantized values
        let width = if percent == 100.0 {
            Self::Whole
        } else if percent == 75.0 {
            Self::ThreeQuarter
        } else if percent == 50.0 {
            Self::Half
        } else if percent == 25.0 {
            Self::Quarter
        } else {
            return Err(ParseError::inconsistency(format!(
                "range width {percent}% is not one of 100/75/50/25"
            )));
        };
        Ok(width)
    }

    /// The fixed named windows of this width, in start order. Whole, half
    /// and quarter widths partition the axis; the three-quarter windows
    /// overlap (a 75% window only fits flush against either end).
    #[must_use]
    pub const fn windows(&self) -> &'static [Range] {
        const THREE_QUARTER: [Range; 2] = [
            Range {
                start: 0.0,
                width: RangeWidth::ThreeQuarter,
            },
            Range {
                start: 25.0,
                width: RangeWidth::ThreeQuarter,
            },
        ];
        const HALF: [Range; 2] = [
            Range {
                start: 0.0,
                width: RangeWidth::Half,
            },
            Range {
                start: 50.0,
                width: RangeWidth::Half,
            },
        ];
        const QUARTER: [Range; 4] = [
            Range {
                start: 0.0,
                width: RangeWidth::Quarter,
            },
            Range {
                start: 25.0,
                width: RangeWidth::Quarter,
            },
            Range {
                start: 50.0,
                width: RangeWidth::Quarter,
            },
            Range {
                start: 75.0,
                width: RangeWidth::Quarter,
            },
        ];

        match self {
            Self::Whole => &[Range::FULL],
            Self::ThreeQuarter => &THREE_QUARTER,
            Self::Half => &HALF,
            Self::Quarter => &QUARTER,
        }
    }
}

/// A sub-window of the tone axis: a start percent plus a quantized width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    /// Window start on the tone axis, percent in `[0, 100)`.
    pub start: f32,
    /// Window width.
    pub width: RangeWidth,
}

impl Range {
    /// The full tone axis.
    pub const FULL: Self = Self {
        start: 0.0,
        width: RangeWidth::Whole,
    };

    /// Creates a range window, validating that it fits on the tone axis.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::ConfigInconsistency`] when `start` lies outside
    /// `[0, 100)` or the window extends past 100%.
    pub fn new(start: f32, width: RangeWidth) -> Result<Self, ParseError> {
        if !start.is_finite() || !(0.0..100.0).contains(&start) {
            return Err(ParseError::inconsistency(format!(
                "range start {start}% is outside [0, 100)"
            )));
        }
        if start + width.percent() > 100.0 {
            return Err(ParseError::inconsistency(format!(
                "range [{start}%, {}%] extends past the tone axis",
                width.percent()
            )));
        }
        Ok(Self { start, width })
    }

    /// Window width in percent.
    #[must_use]
    pub const fn width_percent(&self) -> f32 {
        self.width.percent()
    }
}

impl Default for Range {
    fn default() -> Self {
        Self::FULL
    }
}

impl Eq for Range {}

impl Hash for Range {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.to_bits().hash(state);
        self.width.hash(state);
    }
}

/// Formats a percent value without a trailing `.0` for whole numbers.
fn format_percent(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Per-mode ramp settings: scale direction, tone window, shaping levels and
/// skip direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchemeConfig {
    /// Direction the ramp progresses in.
    pub scale: Scale,
    /// Active sub-window of the tone axis.
    pub range: Range,
    /// Saturation shaping strength.
    pub saturation_level: AdjustmentLevel,
    /// Brightness shaping strength.
    pub brightness_level: AdjustmentLevel,
    /// Which end the global skip count trims for this mode.
    pub skip_direction: SkipDirection,
}

impl SchemeConfig {
    /// Default light-mode scheme: ramps darken and skipped tones come off
    /// the end.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            scale: Scale::Darkening,
            range: Range::FULL,
            saturation_level: AdjustmentLevel::Medium,
            brightness_level: AdjustmentLevel::Medium,
            skip_direction: SkipDirection::Backward,
        }
    }

    /// Default dark-mode scheme: ramps lighten and skipped tones come off
    /// the start.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            scale: Scale::Lightening,
            range: Range::FULL,
            saturation_level: AdjustmentLevel::Medium,
            brightness_level: AdjustmentLevel::Medium,
            skip_direction: SkipDirection::Forward,
        }
    }

    /// Parses a semicolon-separated directive list.
    ///
    /// Missing directives fall back to the supplied defaults (plus the
    /// universal whole-range and medium-level defaults); unknown directives
    /// are ignored so newer writers stay readable by older parsers.
    ///
    /// # Examples
    ///
    /// ```
    /// use shadekit::models::{Scale, SchemeConfig, SkipDirection};
    ///
    /// let config =
    ///     SchemeConfig::parse("<;[0,50]", Scale::Darkening, SkipDirection::Backward).unwrap();
    /// assert_eq!(config.scale, Scale::Lightening);
    /// assert_eq!(config.range.width_percent(), 50.0);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::ConfigInconsistency`] for a recognized range
    /// directive whose numbers violate the range invariants.
    pub fn parse(
        text: &str,
        default_scale: Scale,
        default_skip: SkipDirection,
    ) -> Result<Self, ParseError> {
        let range_pattern = Regex::new(r"^\[(\d+(?:\.\d+)?),(\d+(?:\.\d+)?)\]$").unwrap();
        let level_pattern = Regex::new(r"^(?i)([SB]):([A-Za-z])$").unwrap();

        let mut config = Self {
            scale: default_scale,
            range: Range::FULL,
            saturation_level: AdjustmentLevel::Medium,
            brightness_level: AdjustmentLevel::Medium,
            skip_direction: default_skip,
        };

        for directive in text.split(';') {
            let directive = directive.trim();
            match directive {
                "" => {}
                "<" => config.scale = Scale::Lightening,
                ">" => config.scale = Scale::Darkening,
                "+" => config.skip_direction = SkipDirection::Forward,
                "-" => config.skip_direction = SkipDirection::Backward,
                _ => {
                    if let Some(captures) = range_pattern.captures(directive) {
                        // Digits guaranteed by the pattern; only the range
                        // invariants can still fail.
                        let start: f32 = captures[1].parse().unwrap_or(f32::NAN);
                        let width_percent: f32 = captures[2].parse().unwrap_or(f32::NAN);
                        let width = RangeWidth::from_percent(width_percent)?;
                        config.range = Range::new(start, width)?;
                    } else if let Some(captures) = level_pattern.captures(directive) {
                        let symbol = captures[2].chars().next().unwrap_or_default();
                        if let Some(level) = AdjustmentLevel::from_symbol(symbol) {
                            if captures[1].eq_ignore_ascii_case("S") {
                                config.saturation_level = level;
                            } else {
                                config.brightness_level = level;
                            }
                        }
                    }
                    // Anything else is an unknown directive: ignored.
                }
            }
        }

        Ok(config)
    }

    /// Formats the directives that differ from the supplied defaults.
    ///
    /// Returns `None` for a fully default scheme so palette lines stay
    /// terse. The inverse of [`SchemeConfig::parse`].
    #[must_use]
    pub fn format(&self, default_scale: Scale, default_skip: SkipDirection) -> Option<String> {
        let mut directives = Vec::new();

        if self.scale != default_scale {
            directives.push(
                match self.scale {
                    Scale::Lightening => "<",
                    Scale::Darkening => ">",
                }
                .to_string(),
            );
        }
        if self.range != Range::FULL {
            directives.push(format!(
                "[{},{}]",
                format_percent(self.range.start),
                format_percent(self.range.width_percent())
            ));
        }
        if self.saturation_level != AdjustmentLevel::Medium {
            directives.push(format!("S:{}", self.saturation_level.symbol()));
        }
        if self.brightness_level != AdjustmentLevel::Medium {
            directives.push(format!("B:{}", self.brightness_level.symbol()));
        }
        if self.skip_direction != default_skip {
            directives.push(
                match self.skip_direction {
                    SkipDirection::Forward => "+",
                    SkipDirection::Backward => "-",
                }
                .to_string(),
            );
        }

        if directives.is_empty() {
            None
        } else {
            Some(directives.join(";"))
        }
    }
}
