//! Inspect command showing parsed palette configs.

use crate::cli::common::read_palette_text;
use crate::convert::PaletteConverter;
use crate::models::{ColorConfig, ColorModelKind, SchemeConfig};
use crate::parser;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Show parsed configs, model labels and scheme directives
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Path to palette text file (reads stdin if omitted)
    #[arg(value_name = "FILE")]
    pub palette: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> Result<()> {
        let text = read_palette_text(self.palette.as_deref())?;
        let palette = parser::parse_palette(&text).context("Failed to parse palette")?;

        if self.json {
            let configs: Vec<serde_json::Value> =
                palette.configs.iter().map(config_to_json).collect();
            let json = serde_json::json!({ "colors": configs });
            println!(
                "{}",
                serde_json::to_string_pretty(&json).context("Failed to serialize JSON")?
            );
        } else {
            for config in &palette.configs {
                print_config(config);
            }
        }

        Ok(())
    }
}

/// Directive block for a scheme, `None` when fully default.
fn directives(scheme: &SchemeConfig, defaults: SchemeConfig) -> Option<String> {
    scheme.format(defaults.scale, defaults.skip_direction)
}

fn config_to_json(config: &ColorConfig) -> serde_json::Value {
    let converter = PaletteConverter;

    serde_json::json!({
        "name": config.color_name,
        "group": config.group_name,
        "seed": config.label(ColorModelKind::Rgb, &converter),
        "hct": config.label(ColorModelKind::Hct, &converter),
        "hsb": config.label(ColorModelKind::Hsb, &converter),
        "light": directives(&config.light_config, SchemeConfig::light()),
        "dark": directives(&config.dark_config, SchemeConfig::dark()),
    })
}

fn print_config(config: &ColorConfig) {
    let converter = PaletteConverter;

    match &config.group_name {
        Some(group) => println!("{group}/{}", config.color_name),
        None => println!("{}", config.color_name),
    }
    println!("  seed:  {}", config.label(ColorModelKind::Rgb, &converter));
    println!("  hct:   {}", config.label(ColorModelKind::Hct, &converter));
    println!("  hsb:   {}", config.label(ColorModelKind::Hsb, &converter));
    println!(
        "  light: {}",
        directives(&config.light_config, SchemeConfig::light())
            .unwrap_or_else(|| "(defaults)".to_string())
    );
    println!(
        "  dark:  {}",
        directives(&config.dark_config, SchemeConfig::dark())
            .unwrap_or_else(|| "(defaults)".to_string())
    );
    println!();
}
