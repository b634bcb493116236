//! End-to-end tests for `shadekit generate` command.

use std::io::Write;
use std::process::{Command, Stdio};

mod fixtures;
use fixtures::*;

/// Path to the shadekit binary
fn shadekit_bin() -> &'static str {
    env!("CARGO_BIN_EXE_shadekit")
}

#[test]
fn test_generate_table_output() {
    let (palette_path, _temp_dir) = create_temp_palette_file(sample_palette_text());

    let output = Command::new(shadekit_bin())
        .args(["generate", palette_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Valid palette should exit with code 0. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Brand/Primary (rgb): #689FD4"));
    assert!(stdout.contains("Primary-010"));
    assert!(stdout.contains("neutral (rgb): #1A1B1C"));

    // Default skip of 1 leaves 15 shades, each row carrying both hexes
    let primary_rows: Vec<&str> = stdout
        .lines()
        .filter(|line| line.trim_start().starts_with("Primary-"))
        .collect();
    assert_eq!(primary_rows.len(), 15);
    assert_eq!(primary_rows[0].matches('#').count(), 2);
}

#[test]
fn test_generate_mode_restricts_columns() {
    let (palette_path, _temp_dir) = create_temp_palette_file(minimal_palette_text());

    let output = Command::new(shadekit_bin())
        .args([
            "generate",
            palette_path.to_str().unwrap(),
            "--mode",
            "light",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let row = stdout
        .lines()
        .find(|line| line.trim_start().starts_with("Primary-"))
        .expect("Should print shade rows");
    assert_eq!(row.matches('#').count(), 1);
}

#[test]
fn test_generate_json_output() {
    let (palette_path, _temp_dir) = create_temp_palette_file(sample_palette_text());

    let output = Command::new(shadekit_bin())
        .args([
            "generate",
            palette_path.to_str().unwrap(),
            "--format",
            "json",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value = serde_json::from_str(&stdout).expect("Should parse JSON");

    assert_eq!(result["model"], "rgb");
    let colors = result["colors"].as_array().expect("Should have colors");
    assert_eq!(colors.len(), 3);

    assert_eq!(colors[0]["name"], "Primary");
    assert_eq!(colors[0]["group"], "Brand");
    assert_eq!(colors[0]["seed"], "#689FD4");
    assert_eq!(colors[2]["name"], "neutral");
    assert!(colors[2]["group"].is_null());

    let shades = colors[0]["shades"].as_array().expect("Should have shades");
    assert_eq!(shades.len(), 15);
    assert_eq!(shades[0]["tone_code"], "010");
    assert_eq!(shades[14]["tone_code"], "990");

    for shade in shades {
        let light = shade["light"].as_str().unwrap();
        let dark = shade["dark"].as_str().unwrap();
        assert_eq!(light.len(), 7);
        assert!(light.starts_with('#'));
        assert_eq!(dark.len(), 7);
        assert!(dark.starts_with('#'));
    }
}

#[test]
fn test_generate_skip_flag() {
    let (palette_path, _temp_dir) = create_temp_palette_file(minimal_palette_text());

    let output = Command::new(shadekit_bin())
        .args([
            "generate",
            palette_path.to_str().unwrap(),
            "--format",
            "json",
            "--skip",
            "3",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value = serde_json::from_str(&stdout).expect("Should parse JSON");
    let shades = result["colors"][0]["shades"].as_array().unwrap();
    assert_eq!(shades.len(), 13);
}

#[test]
fn test_generate_models_produce_different_ramps() {
    let (palette_path, _temp_dir) = create_temp_palette_file(minimal_palette_text());

    let mut outputs = Vec::new();
    for model in ["hct", "hsb", "rgb"] {
        let output = Command::new(shadekit_bin())
            .args([
                "generate",
                palette_path.to_str().unwrap(),
                "--format",
                "json",
                "--model",
                model,
            ])
            .output()
            .expect("Failed to execute command");

        assert_eq!(
            output.status.code(),
            Some(0),
            "Model {model} should generate. stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let result: serde_json::Value = serde_json::from_str(&stdout).expect("Should parse JSON");
        assert_eq!(result["model"], model);
        outputs.push(result["colors"][0]["shades"].to_string());
    }

    assert_ne!(outputs[0], outputs[1]);
    assert_ne!(outputs[0], outputs[2]);
    assert_ne!(outputs[1], outputs[2]);
}

#[test]
fn test_generate_is_deterministic() {
    let (palette_path, _temp_dir) = create_temp_palette_file(sample_palette_text());

    let run = || {
        let output = Command::new(shadekit_bin())
            .args([
                "generate",
                palette_path.to_str().unwrap(),
                "--format",
                "json",
                "--model",
                "hct",
            ])
            .output()
            .expect("Failed to execute command");
        assert_eq!(output.status.code(), Some(0));
        String::from_utf8_lossy(&output.stdout).to_string()
    };

    assert_eq!(run(), run());
}

#[test]
fn test_generate_params_file() {
    let (palette_path, _palette_dir) = create_temp_palette_file(minimal_palette_text());
    let (params_path, _params_dir) =
        create_temp_params_file("skip_count = 5\nskip_scheme = \"dark\"\n");

    let output = Command::new(shadekit_bin())
        .args([
            "generate",
            palette_path.to_str().unwrap(),
            "--format",
            "json",
            "--params",
            params_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value = serde_json::from_str(&stdout).expect("Should parse JSON");
    let shades = result["colors"][0]["shades"].as_array().unwrap();

    // 16 tones minus a skip of 5; dark skip scheme shifts codes upward
    assert_eq!(shades.len(), 11);
    assert_eq!(shades[0]["tone_code"], "300");
    assert_eq!(shades[10]["tone_code"], "1000");
}

#[test]
fn test_generate_rejects_invalid_params_file() {
    let (palette_path, _palette_dir) = create_temp_palette_file(minimal_palette_text());
    let (params_path, _params_dir) = create_temp_params_file("rgb_dark_saturation_factor = -1.0\n");

    let output = Command::new(shadekit_bin())
        .args([
            "generate",
            palette_path.to_str().unwrap(),
            "--params",
            params_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_ne!(output.status.code(), Some(0));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("negative"), "stderr: {stderr}");
}

#[test]
fn test_generate_reads_stdin() {
    let mut child = Command::new(shadekit_bin())
        .args(["generate", "--format", "json"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn command");

    child
        .stdin
        .as_mut()
        .expect("Should have stdin")
        .write_all(minimal_palette_text().as_bytes())
        .expect("Failed to write stdin");

    let output = child.wait_with_output().expect("Failed to wait for command");
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value = serde_json::from_str(&stdout).expect("Should parse JSON");
    assert_eq!(result["colors"][0]["name"], "Primary");
}

#[test]
fn test_generate_writes_output_file() {
    let (palette_path, temp_dir) = create_temp_palette_file(minimal_palette_text());
    let out_path = temp_dir.path().join("shades.json");

    let output = Command::new(shadekit_bin())
        .args([
            "generate",
            palette_path.to_str().unwrap(),
            "--format",
            "json",
            "--output",
            out_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("✓"), "Should confirm the write");

    let written = std::fs::read_to_string(&out_path).expect("Output file should exist");
    let result: serde_json::Value = serde_json::from_str(&written).expect("Should parse JSON");
    assert_eq!(result["colors"][0]["name"], "Primary");
}

#[test]
fn test_generate_rejects_invalid_format() {
    let (palette_path, _temp_dir) = create_temp_palette_file(minimal_palette_text());

    let output = Command::new(shadekit_bin())
        .args([
            "generate",
            palette_path.to_str().unwrap(),
            "--format",
            "yaml",
        ])
        .output()
        .expect("Failed to execute command");

    assert_ne!(output.status.code(), Some(0));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid format"), "stderr: {stderr}");
}

#[test]
fn test_generate_rejects_invalid_mode() {
    let (palette_path, _temp_dir) = create_temp_palette_file(minimal_palette_text());

    let output = Command::new(shadekit_bin())
        .args([
            "generate",
            palette_path.to_str().unwrap(),
            "--mode",
            "sepia",
        ])
        .output()
        .expect("Failed to execute command");

    assert_ne!(output.status.code(), Some(0));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid mode"), "stderr: {stderr}");
}

#[test]
fn test_generate_rejects_invalid_model() {
    let (palette_path, _temp_dir) = create_temp_palette_file(minimal_palette_text());

    let output = Command::new(shadekit_bin())
        .args([
            "generate",
            palette_path.to_str().unwrap(),
            "--model",
            "cmyk",
        ])
        .output()
        .expect("Failed to execute command");

    assert_ne!(output.status.code(), Some(0));
}

#[test]
fn test_generate_nonexistent_file() {
    let output = Command::new(shadekit_bin())
        .args(["generate", "/nonexistent/palette.txt"])
        .output()
        .expect("Failed to execute command");

    assert_ne!(output.status.code(), Some(0));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to read palette file"),
        "stderr: {stderr}"
    );
}

#[test]
fn test_generate_empty_palette_fails() {
    let (palette_path, _temp_dir) =
        create_temp_palette_file("# nothing here\njust prose, no configs\n");

    let output = Command::new(shadekit_bin())
        .args(["generate", palette_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_ne!(output.status.code(), Some(0));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no color configs"), "stderr: {stderr}");
}

#[test]
fn test_generate_inconsistent_range_fails() {
    let (palette_path, _temp_dir) = create_temp_palette_file("Primary: #689FD4 L{[90,25]}\n");

    let output = Command::new(shadekit_bin())
        .args(["generate", palette_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_ne!(output.status.code(), Some(0));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("palette"), "stderr: {stderr}");
}
