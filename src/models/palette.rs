//! An ordered collection of color configs with text round-tripping.

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::parser;

use super::ColorConfig;

/// An ordered sequence of color configs.
///
/// The wire form is the line grammar in [`crate::parser::palette`]: one
/// config per line, order preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// The configs, in authoring order.
    pub configs: Vec<ColorConfig>,
}

impl Palette {
    /// Creates an empty palette.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            configs: Vec::new(),
        }
    }

    /// Parses palette text, one config per line. Lines that don't match
    /// the grammar are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::ConfigInconsistency`] when a matching line
    /// carries values that violate a model invariant.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        parser::palette::parse_palette(text)
    }

    /// Serializes the palette to its text form, one line per config.
    #[must_use]
    pub fn to_text(&self) -> String {
        parser::palette::format_palette(self)
    }

    /// Appends a config.
    pub fn add(&mut self, config: ColorConfig) {
        self.configs.push(config);
    }

    /// Removes the config with the given id, returning it if present.
    pub fn remove(&mut self, id: &str) -> Option<ColorConfig> {
        let index = self.configs.iter().position(|c| c.id == id)?;
        Some(self.configs.remove(index))
    }

    /// The config with the given id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ColorConfig> {
        self.configs.iter().find(|c| c.id == id)
    }

    /// Mutable access to the config with the given id.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut ColorConfig> {
        self.configs.iter_mut().find(|c| c.id == id)
    }

    /// Number of configs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.configs.len()
    }

    /// Whether the palette holds no configs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }
}
