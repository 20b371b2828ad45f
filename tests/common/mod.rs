//! Shared test helpers for integration tests
//!
//! This module provides common utilities used across all test files.

#![allow(dead_code)]

use assert_cmd::cargo;
use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to get a basesize command with an isolated config and data dir
pub fn basesize(env: &TempDir) -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("basesize"));
    cmd.env("BASESIZE_CONFIG_DIR", env.path().join("config"))
        .env("BASESIZE_DATA_DIR", env.path().join("data"))
        .env_remove("BASESIZE_LOG")
        .env("USER", "jdoe")
        .env("USERNAME", "jdoe");
    cmd
}

/// Helper to create an empty environment (embedded defaults only)
pub fn setup_env() -> TempDir {
    TempDir::new().unwrap()
}

/// Helper to write a file into the config directory
pub fn write_config(env: &TempDir, name: &str, content: &str) {
    let dir = env.path().join("config");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(name), content).unwrap();
}

/// Helper to build one complete `presets.yaml` entry
///
/// `extra` is spliced in as additional (or overriding) keys, e.g.
/// `"  preference: min\n"`.
pub fn preset_entry(name: &str, coordinate_mode: i64, extra: &str) -> String {
    let mut entry = format!("- name: {}\n  coordinate_mode: {}\n{}", name, coordinate_mode, extra);
    for (key, value) in [
        ("step", "0"),
        ("offset_applies_to_preferred", "false"),
        ("offset_applies_to_others", "false"),
        ("sort_descending", "true"),
        ("result_pattern", "'.+'"),
        ("pattern_examples", "[]"),
        ("tooltip", "''"),
    ] {
        if !extra.contains(&format!("  {}:", key)) {
            entry.push_str(&format!("  {}: {}\n", key, value));
        }
    }
    entry
}

/// Helper to register the default test user
pub fn write_users(env: &TempDir) {
    write_config(
        env,
        "users.yaml",
        "- logon: jdoe\n  id: \"0042\"\n  name: Jane Doe\n  mail: jane.doe@example.com\n",
    );
}

/// Helper to create a part file with a bounding box and optional extras
pub fn create_part(env: &TempDir, name: &str, bbox: [f64; 3], extra: &str) -> PathBuf {
    let path = env.path().join(format!("{}.yaml", name));
    let content = format!(
        "bounding_box: {{x: {}, y: {}, z: {}}}\n{}",
        bbox[0], bbox[1], bbox[2], extra
    );
    fs::write(&path, content).unwrap();
    path
}

/// Helper to read a saved property back from a part file
pub fn read_property(path: &PathBuf, property: &str) -> Option<String> {
    let content = fs::read_to_string(path).unwrap();
    let doc: serde_yml::Value = serde_yml::from_str(&content).unwrap();
    doc.get("properties")
        .and_then(|p| p.get(property))
        .and_then(|v| v.as_str())
        .map(str::to_string)
}
