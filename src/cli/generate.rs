//! Generate command for shade ramps.

use crate::cli::common::read_palette_text;
use crate::config::{self, Config, ThemeMode};
use crate::convert::{ColorSpaceConverter, PaletteConverter};
use crate::models::{ColorModelKind, Palette, PaletteParameters};
use crate::parser;
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

/// Generate shade ramps from palette text
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Path to palette text file (reads stdin if omitted)
    #[arg(value_name = "FILE")]
    pub palette: Option<PathBuf>,

    /// Color model to generate under: hct, hsb, or rgb
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Path to a TOML file with shade parameter overrides
    #[arg(long, value_name = "FILE")]
    pub params: Option<PathBuf>,

    /// Number of extreme tones to skip per ramp
    #[arg(long, value_name = "N")]
    pub skip: Option<usize>,

    /// Output format: table or json
    #[arg(long, value_name = "TYPE", default_value = "table")]
    pub format: String,

    /// Restrict table output to one mode: auto, light, or dark
    #[arg(long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Write output to the configured export directory with a dated name
    #[arg(long)]
    pub export: bool,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> Result<()> {
        if !matches!(self.format.as_str(), "table" | "json") {
            anyhow::bail!("Invalid format '{}'. Must be 'table' or 'json'", self.format);
        }

        let mode = self.resolve_mode()?;

        let config = Config::load().unwrap_or_default();

        let mut params = match &self.params {
            Some(path) => config::load_params_file(path)?,
            None => config.params,
        };
        if let Some(skip) = self.skip {
            params.skip_count = skip;
        }

        let kind = match &self.model {
            Some(name) => ColorModelKind::from_str(name)?,
            None => config.output.default_model,
        };

        let text = read_palette_text(self.palette.as_deref())?;
        let palette = parser::parse_palette(&text).context("Failed to parse palette")?;
        if palette.is_empty() {
            anyhow::bail!("Palette contains no color configs");
        }

        let converter = PaletteConverter;
        let rendered = match self.format.as_str() {
            "json" => render_json(&palette, &params, kind, &converter)?,
            _ => render_table(&palette, &params, kind, &converter, mode),
        };

        if let Some(path) = self.output_path(&config) {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).context(format!(
                    "Failed to create output directory: {}",
                    parent.display()
                ))?;
            }
            fs::write(&path, rendered).context(format!(
                "Failed to write output file: {}",
                path.display()
            ))?;
            println!("✓ Wrote shades to: {}", path.display());
        } else {
            print!("{rendered}");
        }

        Ok(())
    }

    /// Resolves the `--mode` flag to a dark-mode flag.
    ///
    /// `None` means both members of each pair are shown.
    fn resolve_mode(&self) -> Result<Option<bool>> {
        match self.mode.as_deref() {
            None => Ok(None),
            Some("light") => Ok(Some(false)),
            Some("dark") => Ok(Some(true)),
            Some("auto") => Ok(Some(ThemeMode::Auto.is_dark())),
            Some(other) => {
                anyhow::bail!("Invalid mode '{other}'. Must be 'auto', 'light', or 'dark'")
            }
        }
    }

    /// Get the output file path (either user-specified or dated export)
    fn output_path(&self, config: &Config) -> Option<PathBuf> {
        if let Some(path) = &self.output {
            return Some(path.clone());
        }

        if self.export {
            return Some(config.output.export_dir.join(self.export_file_name()));
        }

        None
    }

    /// Auto-generated export filename: `[stem]_shades_[date].[ext]`
    fn export_file_name(&self) -> String {
        let date = chrono::Local::now().format("%Y-%m-%d");
        let stem = self.palette.as_ref().and_then(|p| p.file_stem()).map_or_else(
            || "palette".to_string(),
            |s| s.to_string_lossy().to_lowercase(),
        );
        let ext = if self.format == "json" { "json" } else { "txt" };

        format!("{stem}_shades_{date}.{ext}")
    }
}

/// Renders ramps as an aligned text table, one block per config.
fn render_table(
    palette: &Palette,
    params: &PaletteParameters,
    kind: ColorModelKind,
    converter: &dyn ColorSpaceConverter,
    dark_only: Option<bool>,
) -> String {
    let mut blocks = Vec::new();

    for config in &palette.configs {
        let heading = match &config.group_name {
            Some(group) => format!("{group}/{}", config.color_name),
            None => config.color_name.clone(),
        };
        let mut block = format!("{heading} ({kind}): {}\n", config.label(kind, converter));

        let pairs = config.shades(params, kind, converter);
        let width = pairs.iter().map(|p| p.name.len()).max().unwrap_or(0);
        for pair in &pairs {
            let row = match dark_only {
                Some(true) => format!("  {:<width$}  {}\n", pair.name, pair.dark.to_hex()),
                Some(false) => format!("  {:<width$}  {}\n", pair.name, pair.light.to_hex()),
                None => format!(
                    "  {:<width$}  {}  {}\n",
                    pair.name,
                    pair.light.to_hex(),
                    pair.dark.to_hex()
                ),
            };
            block.push_str(&row);
        }
        blocks.push(block);
    }

    // Blocks are separated by one blank line, with no trailing blank
    blocks.join("\n")
}

/// Renders ramps as pretty-printed JSON for downstream tooling.
fn render_json(
    palette: &Palette,
    params: &PaletteParameters,
    kind: ColorModelKind,
    converter: &dyn ColorSpaceConverter,
) -> Result<String> {
    let colors: Vec<serde_json::Value> = palette
        .configs
        .iter()
        .map(|config| {
            let shades: Vec<serde_json::Value> = config
                .shades(params, kind, converter)
                .iter()
                .map(|pair| {
                    serde_json::json!({
                        "name": pair.name,
                        "tone_code": pair.tone_code,
                        "light": pair.light.to_hex(),
                        "dark": pair.dark.to_hex(),
                    })
                })
                .collect();

            serde_json::json!({
                "name": config.color_name,
                "group": config.group_name,
                "seed": config.label(kind, converter),
                "shades": shades,
            })
        })
        .collect();

    let json = serde_json::json!({
        "model": kind.to_string(),
        "colors": colors,
    });

    let pretty = serde_json::to_string_pretty(&json).context("Failed to serialize JSON")?;
    Ok(format!("{pretty}\n"))
}
