//! Shared plumbing for CLI command handlers.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Reads palette text from a file, or from stdin when no path is given.
pub fn read_palette_text(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path).context(format!(
            "Failed to read palette file: {}",
            path.display()
        )),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read palette from stdin")?;
            Ok(text)
        }
    }
}
