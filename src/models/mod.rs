//! Data models for seed colors, schemes and palettes.
//!
//! This module contains all the core data structures used throughout the
//! crate. Models are pure data plus local validation; generation and
//! parsing live in their own modules.

pub mod color_config;
pub mod color_model;
pub mod pair;
pub mod palette;
pub mod params;
pub mod rgb;
pub mod scheme;

// Re-export all model types
pub use color_config::ColorConfig;
pub use color_model::{ColorModelKind, ColorModelValue, Hct, Hsb};
pub use pair::ColorPair;
pub use palette::Palette;
pub use params::{PaletteParameters, SkipScheme};
pub use rgb::RgbColor;
pub use scheme::{AdjustmentLevel, Range, RangeWidth, Scale, SchemeConfig, SkipDirection};
