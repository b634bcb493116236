//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Each test binary uses a different subset

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A small palette exercising groups, directives, and plain seeds.
pub fn sample_palette_text() -> &'static str {
    "Brand/Primary: #689FD4 D{S:H}\n\
     Brand/Accent: #FF8800\n\
     neutral: #1A1B1C L{[0,50]} D{<;B:L}\n"
}

/// A single-config palette with no directives.
pub fn minimal_palette_text() -> &'static str {
    "Primary: #689FD4\n"
}

/// Writes palette text to a temp file and returns the path.
pub fn create_temp_palette_file(text: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let palette_path = temp_dir.path().join("palette.txt");
    fs::write(&palette_path, text).expect("Failed to write palette file");
    (palette_path, temp_dir)
}

/// Writes a shade parameters TOML file and returns the path.
pub fn create_temp_params_file(toml_text: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let params_path = temp_dir.path().join("params.toml");
    fs::write(&params_path, toml_text).expect("Failed to write params file");
    (params_path, temp_dir)
}
