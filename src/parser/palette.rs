//! The compact palette line grammar: parsing and serialization.
//!
//! One color config per line:
//!
//! ```text
//! [<group>/]<name>: #RRGGBB [L{<directives>}] [D{<directives>}]
//! ```
//!
//! Parsing is line oriented and lenient: blank lines and lines that don't
//! match the grammar are skipped, so palettes survive stray clipboard
//! content. Serialization is the exact inverse and omits every default, so
//! a freshly created config round-trips to just `Name: #RRGGBB`.

use regex::Regex;
use tracing::debug;

use crate::convert::PaletteConverter;
use crate::error::ParseError;
use crate::models::{ColorConfig, ColorModelValue, Palette, RgbColor, SchemeConfig};

/// Parses one palette line into a color config.
///
/// The seed always re-enters as an RGB model value: the hex form cannot
/// carry HCT or HSB components, so those models are not round-trippable
/// through this grammar.
///
/// # Errors
///
/// [`ParseError::GrammarMismatch`] when the line doesn't match the
/// pattern; [`ParseError::ConfigInconsistency`] when it matches but
/// carries invalid values (bad range window, over-long name).
pub fn parse_line(line: &str) -> Result<ColorConfig, ParseError> {
    // Pattern breakdown:
    //   (?:(?P<group>\w+)/)?     - optional group name before a slash
    //   (?P<name>\w+):           - color name and separator
    //   #(?P<hex>[0-9A-Fa-f]{6}) - seed color, case-insensitive hex
    //   (?:\s+L\{...\})?         - optional light-mode directives
    //   (?:\s+D\{...\})?         - optional dark-mode directives
    let pattern = Regex::new(
        r"^(?:(?P<group>\w+)/)?(?P<name>\w+):\s*#(?P<hex>[0-9A-Fa-f]{6})(?:\s+L\{(?P<light>[^}]*)\})?(?:\s+D\{(?P<dark>[^}]*)\})?\s*$",
    )
    .unwrap();

    let captures = pattern
        .captures(line.trim())
        .ok_or_else(|| ParseError::mismatch(line))?;

    // Six hex digits are guaranteed by the pattern
    let seed = RgbColor::from_hex(&captures["hex"]).map_err(|_| ParseError::mismatch(line))?;

    let light_defaults = SchemeConfig::light();
    let light_config = match captures.name("light") {
        Some(block) => SchemeConfig::parse(
            block.as_str(),
            light_defaults.scale,
            light_defaults.skip_direction,
        )?,
        None => light_defaults,
    };

    let dark_defaults = SchemeConfig::dark();
    let dark_config = match captures.name("dark") {
        Some(block) => SchemeConfig::parse(
            block.as_str(),
            dark_defaults.scale,
            dark_defaults.skip_direction,
        )?,
        None => dark_defaults,
    };

    let mut config = ColorConfig::new(&captures["name"], ColorModelValue::Rgb(seed))
        .map_err(|e| ParseError::inconsistency(e.to_string()))?;
    if let Some(group) = captures.name("group") {
        config = config
            .with_group(group.as_str())
            .map_err(|e| ParseError::inconsistency(e.to_string()))?;
    }

    Ok(config.with_schemes(light_config, dark_config))
}

/// Parses whole palette text, one config per line.
///
/// Lines that don't match the grammar are skipped (logged at debug level);
/// inconsistent values on a matching line abort the parse.
///
/// # Errors
///
/// Returns [`ParseError::ConfigInconsistency`] from the first offending
/// line.
pub fn parse_palette(text: &str) -> Result<Palette, ParseError> {
    let mut palette = Palette::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line) {
            Ok(config) => palette.add(config),
            Err(ParseError::GrammarMismatch { .. }) => {
                debug!("skipping unrecognized palette line: {line:?}");
            }
            Err(err) => return Err(err),
        }
    }

    Ok(palette)
}

/// Serializes one config to its palette line.
///
/// Non-RGB seeds render through the default converter since the wire form
/// only carries hex; scheme blocks are omitted when fully default.
#[must_use]
pub fn format_line(config: &ColorConfig) -> String {
    let converter = PaletteConverter;
    let mut line = String::new();

    if let Some(group) = &config.group_name {
        line.push_str(group);
        line.push('/');
    }
    line.push_str(&config.color_name);
    line.push_str(": ");
    line.push_str(&config.color_model.as_rgb(&converter).to_hex());

    let light_defaults = SchemeConfig::light();
    if let Some(directives) = config
        .light_config
        .format(light_defaults.scale, light_defaults.skip_direction)
    {
        line.push_str(" L{");
        line.push_str(&directives);
        line.push('}');
    }

    let dark_defaults = SchemeConfig::dark();
    if let Some(directives) = config
        .dark_config
        .format(dark_defaults.scale, dark_defaults.skip_direction)
    {
        line.push_str(" D{");
        line.push_str(&directives);
        line.push('}');
    }

    line
}

/// Serializes a whole palette, newline-joined, one line per config.
#[must_use]
pub fn format_palette(palette: &Palette) -> String {
    palette
        .configs
        .iter()
        .map(format_line)
        .collect::<Vec<_>>()
        .join("\n")
}
