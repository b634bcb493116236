//! Parsing and serialization for the palette text format.
//!
//! This module handles reading and writing palettes from the compact
//! line grammar used by palette files and clipboard exchange.

pub mod palette;

// Re-export commonly used functions
pub use palette::{format_line, format_palette, parse_line, parse_palette};
