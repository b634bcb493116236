//! Fmt command canonicalising palette text.

use crate::cli::common::read_palette_text;
use crate::parser;
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Canonicalise palette text formatting
#[derive(Debug, Clone, Args)]
pub struct FmtArgs {
    /// Path to palette text file (reads stdin if omitted)
    #[arg(value_name = "FILE")]
    pub palette: Option<PathBuf>,

    /// Rewrite the file in place instead of printing
    #[arg(long)]
    pub write: bool,
}

impl FmtArgs {
    /// Execute the fmt command
    pub fn execute(&self) -> Result<()> {
        let text = read_palette_text(self.palette.as_deref())?;
        let palette = parser::parse_palette(&text).context("Failed to parse palette")?;

        let mut formatted = parser::format_palette(&palette);
        if !formatted.is_empty() {
            formatted.push('\n');
        }

        if self.write {
            let Some(path) = &self.palette else {
                anyhow::bail!("--write requires a palette file argument");
            };
            fs::write(path, formatted).context(format!(
                "Failed to write palette file: {}",
                path.display()
            ))?;
            println!("✓ Formatted: {}", path.display());
        } else {
            print!("{formatted}");
        }

        Ok(())
    }
}
