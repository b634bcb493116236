//! The named, grouped seed color definition at the heart of a palette.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::convert::ColorSpaceConverter;
use crate::models::{ColorModelKind, ColorModelValue, ColorPair, PaletteParameters, SchemeConfig};
use crate::shade;

/// A named seed color plus its light/dark scheme configurations.
///
/// # Validation
///
/// - Color name must be non-empty word characters (letters, digits,
///   underscore), max 50 characters
/// - Group name, when present, follows the same rule
///
/// Word characters keep every name representable in the palette line
/// grammar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorConfig {
    /// Unique identifier (stable across renames and edits).
    #[serde(default = "generate_config_id")]
    pub id: String,
    /// The seed value under its authored color model.
    pub color_model: ColorModelValue,
    /// Display name, also the asset name stem.
    pub color_name: String,
    /// Optional group the color is filed under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    /// Light-mode ramp settings.
    pub light_config: SchemeConfig,
    /// Dark-mode ramp settings.
    pub dark_config: SchemeConfig,
}

/// Generates a new unique config ID.
fn generate_config_id() -> String {
    Uuid::new_v4().to_string()
}

impl ColorConfig {
    /// Creates a config with default light/dark schemes and no group.
    ///
    /// # Examples
    ///
    /// ```
    /// use shadekit::models::{ColorConfig, ColorModelValue, RgbColor};
    ///
    /// let seed = ColorModelValue::Rgb(RgbColor::from_hex("#689FD4").unwrap());
    /// let config = ColorConfig::new("Primary", seed).unwrap();
    /// assert_eq!(config.color_name, "Primary");
    /// assert!(config.group_name.is_none());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty, too long or contains
    /// non-word characters.
    pub fn new(color_name: impl Into<String>, color_model: ColorModelValue) -> Result<Self> {
        let color_name = color_name.into();
        Self::validate_name(&color_name, "Color name")?;

        Ok(Self {
            id: generate_config_id(),
            color_model,
            color_name,
            group_name: None,
            light_config: SchemeConfig::light(),
            dark_config: SchemeConfig::dark(),
        })
    }

    /// Sets the group name.
    ///
    /// # Errors
    ///
    /// Returns an error if the group name fails name validation.
    pub fn with_group(mut self, group_name: impl Into<String>) -> Result<Self> {
        let group_name = group_name.into();
        Self::validate_name(&group_name, "Group name")?;
        self.group_name = Some(group_name);
        Ok(self)
    }

    /// Replaces both scheme configurations.
    #[must_use]
    pub const fn with_schemes(mut self, light: SchemeConfig, dark: SchemeConfig) -> Self {
        self.light_config = light;
        self.dark_config = dark;
        self
    }

    /// Validates a color or group name.
    fn validate_name(name: &str, what: &str) -> Result<()> {
        if name.is_empty() {
            anyhow::bail!("{what} cannot be empty");
        }

        if name.len() > 50 {
            anyhow::bail!(
                "{what} '{}' exceeds maximum length of 50 characters (got {})",
                name,
                name.len()
            );
        }

        if !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
            anyhow::bail!("{what} '{name}' may only contain letters, digits and underscores");
        }

        Ok(())
    }

    /// Updates the color name with validation.
    pub fn set_name(&mut self, color_name: impl Into<String>) -> Result<()> {
        let color_name = color_name.into();
        Self::validate_name(&color_name, "Color name")?;
        self.color_name = color_name;
        Ok(())
    }

    /// Replaces everything except the id with `other`'s values; used when
    /// an edit commits.
    pub fn update(&mut self, other: &Self) {
        self.color_model = other.color_model;
        self.color_name.clone_from(&other.color_name);
        self.group_name.clone_from(&other.group_name);
        self.light_config = other.light_config;
        self.dark_config = other.dark_config;
    }

    /// Display label for the seed viewed under `kind`.
    #[must_use]
    pub fn label(&self, kind: ColorModelKind, converter: &dyn ColorSpaceConverter) -> String {
        self.color_model.label(kind, converter)
    }

    /// Generates this config's shade ramp under the given model and
    /// parameters. See [`shade::generate`] for the pipeline itself.
    #[must_use]
    pub fn shades(
        &self,
        params: &PaletteParameters,
        kind: ColorModelKind,
        converter: &dyn ColorSpaceConverter,
    ) -> Vec<ColorPair> {
        shade::generate(self, params, kind, converter)
    }
}
