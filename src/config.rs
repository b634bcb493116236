//! Persistent application configuration.
//!
//! Configuration lives in a TOML file under the platform config directory
//! and bundles shade parameters, export settings, and UI preferences.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::APP_NAME;
use crate::models::{ColorModelKind, PaletteParameters};

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Follow the OS theme setting
    #[default]
    Auto,
    /// Dark theme regardless of OS setting
    Dark,
    /// Light theme regardless of OS setting
    Light,
}

impl ThemeMode {
    /// Resolves the preference to a concrete dark-mode flag.
    ///
    /// `Auto` follows the OS setting where the platform reports one.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            Self::Dark => true,
            Self::Light => false,
            Self::Auto => match dark_light::detect() {
                Ok(dark_light::Mode::Light) => false,
                // Fall back to dark for dark mode, unspecified, or errors
                Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => true,
            },
        }
    }
}

/// Output preferences for generated palettes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory for exported palette files
    pub export_dir: PathBuf,
    /// Color model used when none is requested explicitly
    #[serde(default = "default_model")]
    pub default_model: ColorModelKind,
}

/// Default output color model
const fn default_model() -> ColorModelKind {
    ColorModelKind::Rgb
}

impl Default for OutputConfig {
    fn default() -> Self {
        // Use config directory for exports by default
        let export_dir = Self::default_export_dir().unwrap_or_else(|_| PathBuf::from("exports"));

        Self {
            export_dir,
            default_model: default_model(),
        }
    }
}

impl OutputConfig {
    /// Gets the default export directory path.
    ///
    /// - Linux: `~/.config/ShadeKit/exports/`
    /// - macOS: `~/Library/Application Support/ShadeKit/exports/`
    /// - Windows: `%APPDATA%\ShadeKit\exports\`
    fn default_export_dir() -> Result<PathBuf> {
        Ok(Config::config_dir()?.join("exports"))
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/ShadeKit/config.toml`
/// - macOS: `~/Library/Application Support/ShadeKit/config.toml`
/// - Windows: `%APPDATA%\ShadeKit\config.toml`
///
/// # Validation
///
/// - every numeric shade parameter must be finite
/// - multiplicative factors must not be negative
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Shade engine parameters
    #[serde(default)]
    pub params: PaletteParameters,
    /// Palette export settings
    #[serde(default)]
    pub output: OutputConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            params: PaletteParameters::default(),
            output: OutputConfig::default(),
            ui: UiConfig::default(),
        }
    }

    /// Reports whether a config file has been written to disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    ///
    /// - Linux: `~/.config/ShadeKit/`
    /// - macOS: `~/Library/Application Support/ShadeKit/`
    /// - Windows: `%APPDATA%\ShadeKit\`
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads the configuration, falling back to defaults when no file
    /// exists yet.
    ///
    /// Loaded values are validated before they are returned.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;

        Ok(config)
    }

    /// Saves the configuration atomically via a temp file and rename.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        validate_params(&self.params)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Loads shade engine parameters from a standalone TOML file.
///
/// Missing keys keep their defaults, so a parameters file only needs to
/// name the values it overrides.
pub fn load_params_file(path: &Path) -> Result<PaletteParameters> {
    let content = fs::read_to_string(path).context(format!(
        "Failed to read parameters file: {}",
        path.display()
    ))?;

    let params: PaletteParameters = toml::from_str(&content).context(format!(
        "Failed to parse parameters file: {}",
        path.display()
    ))?;

    validate_params(&params)?;

    Ok(params)
}

/// Validates shade engine parameters.
///
/// Hue offsets may take any finite value since they wrap around the hue
/// circle; factors scale saturation, chroma, tone, or brightness and must
/// not be negative.
pub fn validate_params(params: &PaletteParameters) -> Result<()> {
    let offsets = [
        ("hct_dark_hue_offset", params.hct_dark_hue_offset),
        ("hsb_dark_hue_offset", params.hsb_dark_hue_offset),
        ("rgb_light_hue_offset", params.rgb_light_hue_offset),
        ("rgb_dark_hue_offset", params.rgb_dark_hue_offset),
    ];

    let factors = [
        ("hct_light_chroma_factor", params.hct_light_chroma_factor),
        ("hct_dark_chroma_factor", params.hct_dark_chroma_factor),
        ("hct_light_tone_factor", params.hct_light_tone_factor),
        ("hct_dark_tone_factor", params.hct_dark_tone_factor),
        (
            "hsb_light_saturation_factor",
            params.hsb_light_saturation_factor,
        ),
        (
            "hsb_dark_saturation_factor",
            params.hsb_dark_saturation_factor,
        ),
        (
            "hsb_light_brightness_factor",
            params.hsb_light_brightness_factor,
        ),
        (
            "hsb_dark_brightness_factor",
            params.hsb_dark_brightness_factor,
        ),
        (
            "rgb_light_saturation_factor",
            params.rgb_light_saturation_factor,
        ),
        (
            "rgb_dark_saturation_factor",
            params.rgb_dark_saturation_factor,
        ),
        (
            "rgb_light_brightness_factor",
            params.rgb_light_brightness_factor,
        ),
        (
            "rgb_dark_brightness_factor",
            params.rgb_dark_brightness_factor,
        ),
    ];

    for (name, value) in offsets.iter().chain(&factors) {
        if !value.is_finite() {
            anyhow::bail!("Parameter '{name}' must be finite, got {value}");
        }
    }

    for (name, value) in factors {
        if value < 0.0 {
            anyhow::bail!("Parameter '{name}' must not be negative, got {value}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SkipScheme;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.params.skip_count, 1);
        assert_eq!(config.params.skip_scheme, SkipScheme::Light);
        assert_eq!(config.output.default_model, ColorModelKind::Rgb);
        assert_eq!(config.ui.theme_mode, ThemeMode::Auto);
        assert!(config.output.export_dir.ends_with("exports"));
    }

    #[test]
    fn test_config_validate_defaults() {
        let config = Config::new();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_rejects_non_finite_params() {
        let mut config = Config::new();
        config.params.hct_dark_hue_offset = f32::NAN;
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.params.rgb_dark_brightness_factor = f32::INFINITY;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validate_rejects_negative_factors() {
        let mut config = Config::new();
        config.params.hsb_light_saturation_factor = -0.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validate_allows_negative_hue_offsets() {
        let mut config = Config::new();
        config.params.hct_dark_hue_offset = -0.25;
        config.params.rgb_light_hue_offset = -0.1;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");

        let mut config = Config::new();
        config.params.skip_count = 3;
        config.ui.theme_mode = ThemeMode::Dark;

        // Round-trip through a temp file instead of the real config path
        let content = toml::to_string_pretty(&config).unwrap();
        fs::write(&config_file, content).unwrap();

        let content = fs::read_to_string(&config_file).unwrap();
        let loaded: Config = toml::from_str(&content).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_params_file_partial_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let params_file = temp_dir.path().join("params.toml");
        fs::write(
            &params_file,
            "skip_count = 2\nskip_scheme = \"dark\"\nhct_dark_hue_offset = 0.05\n",
        )
        .unwrap();

        let params = load_params_file(&params_file).unwrap();
        assert_eq!(params.skip_count, 2);
        assert_eq!(params.skip_scheme, SkipScheme::Dark);
        assert!((params.hct_dark_hue_offset - 0.05).abs() < f32::EPSILON);
        // Untouched values keep their defaults
        assert!((params.rgb_dark_saturation_factor - 0.85).abs() < f32::EPSILON);
    }

    #[test]
    fn test_load_params_file_rejects_invalid_values() {
        let temp_dir = TempDir::new().unwrap();
        let params_file = temp_dir.path().join("params.toml");
        fs::write(&params_file, "hsb_dark_brightness_factor = -1.0\n").unwrap();

        assert!(load_params_file(&params_file).is_err());
    }

    #[test]
    fn test_load_params_file_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.toml");

        assert!(load_params_file(&missing).is_err());
    }

    #[test]
    fn test_theme_mode_forced_values() {
        assert!(ThemeMode::Dark.is_dark());
        assert!(!ThemeMode::Light.is_dark());
    }
}
