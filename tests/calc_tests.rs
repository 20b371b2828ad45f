//! `basesize calc` tests

mod common;

use common::{basesize, preset_entry, setup_env, write_config};
use predicates::prelude::*;

fn calc_json(args: &[&str]) -> serde_json::Value {
    let env = setup_env();
    let output = basesize(&env)
        .args(["calc", "-f", "json"])
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

// ============================================================================
// End-to-end results
// ============================================================================

#[test]
fn test_box_without_preference() {
    let report = calc_json(&["20", "100", "50", "--preset", "Exact"]);
    assert_eq!(report["result"], "100 x 50 x 20");
    assert_eq!(report["valid"], true);
    assert_eq!(report["axis"], "x");
}

#[test]
fn test_box_with_min_preference_and_postfix() {
    let report = calc_json(&["80", "100", "20", "--preset", "Sawn", "--offset", "0"]);
    assert_eq!(report["axis"], "z");
    assert_eq!(report["result"], "100 x 80 x 20F");
    assert_eq!(report["valid"], true);
}

#[test]
fn test_cylindrical_turning_axis() {
    let report = calc_json(&["20", "100", "20", "--preset", "Shaft", "--step", "0"]);
    assert_eq!(report["axis"], "y");
    assert_eq!(report["result"], "Ø20 x 100");
}

#[test]
fn test_default_offset_and_step_applied() {
    // Standard: +5 mm on every axis, rounded to 5 mm
    let report = calc_json(&["97.3", "41", "12.25", "--preset", "Standard"]);
    assert_eq!(report["offset"], 5);
    assert_eq!(report["step"], 5);
    assert_eq!(report["calculated"], serde_json::json!([105.0, 50.0, 20.0]));
    assert_eq!(report["result"], "105 x 50 x 20");
}

#[test]
fn test_offset_only_on_other_axes() {
    let report = calc_json(&["80", "100", "20", "--preset", "Sawn"]);
    assert_eq!(report["calculated"], serde_json::json!([85.0, 105.0, 20.0]));
    assert_eq!(report["result"], "105 x 85 x 20F");
}

#[test]
fn test_axis_override() {
    let report = calc_json(&["80", "100", "20", "-p", "Sawn", "-o", "0", "--axis", "x"]);
    assert_eq!(report["axis"], "x");
    assert_eq!(report["result"], "100 x 20 x 80F");
}

#[test]
fn test_thickness_slot() {
    let report = calc_json(&["100", "80", "20", "-p", "Pre-Milled", "-o", "0", "-t", "2"]);
    assert_eq!(report["result"], "100 x 80 x 2 x 20F");
    assert_eq!(report["thickness"], "2");

    let report = calc_json(&[
        "100", "80", "20", "-p", "Pre-Milled", "-o", "0", "-t", "2", "--no-thickness",
    ]);
    assert_eq!(report["result"], "100 x 80 x 20F");
}

#[test]
fn test_offset_is_clamped_to_settings() {
    let report = calc_json(&["18", "18", "98", "-p", "Shaft", "--offset", "500"]);
    assert_eq!(report["offset"], 20);
}

// ============================================================================
// Errors and validation
// ============================================================================

#[test]
fn test_invalid_measurement_fails() {
    let env = setup_env();
    basesize(&env)
        .args(["calc", "abc", "50", "20"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid measurement"));
}

#[test]
fn test_unknown_preset_fails() {
    let env = setup_env();
    basesize(&env)
        .args(["calc", "1", "2", "3", "--preset", "Nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Preset not found"));
}

#[test]
fn test_offset_refused_for_preset_without_offset() {
    let env = setup_env();
    basesize(&env)
        .args(["calc", "1", "2", "3", "--preset", "Exact", "--offset", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("has no offset"));
}

#[test]
fn test_invalid_result_is_reported() {
    let env = setup_env();
    // Sawn without rounding keeps the decimals, which the pattern rejects
    basesize(&env)
        .args(["calc", "80.5", "100", "20", "-p", "Sawn", "--step", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✗"))
        .stdout(predicate::str::contains("Examples for this pattern"));
}

#[test]
fn test_strict_fails_on_invalid_result() {
    let env = setup_env();
    basesize(&env)
        .args(["calc", "80.5", "100", "20", "-p", "Sawn", "--step", "0", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not valid"));
}

#[test]
fn test_text_output() {
    let env = setup_env();
    basesize(&env)
        .args(["calc", "20", "100", "50", "--preset", "Exact"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Base Size"))
        .stdout(predicate::str::contains("Preset:"))
        .stdout(predicate::str::contains("✓ 100 x 50 x 20"));
}

#[test]
fn test_first_preset_is_default() {
    let env = setup_env();
    write_config(&env, "presets.yaml", &preset_entry("Plain", 3, ""));
    let output = basesize(&env)
        .args(["calc", "3", "1", "2", "-f", "yaml"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    insta::assert_snapshot!(stdout, @r###"
    preset: Plain
    axis: x
    offset: 0
    step: 0
    measured:
      - 3.0
      - 1.0
      - 2.0
    calculated:
      - 3.0
      - 1.0
      - 2.0
    result: "3 x 2 x 1"
    valid: true
    "###);
}

#[test]
fn test_preset_missing_step_fails_with_file_name() {
    let env = setup_env();
    let entry = preset_entry("Plain", 3, "").replace("  step: 0\n", "");
    write_config(&env, "presets.yaml", &entry);
    basesize(&env)
        .args(["calc", "1", "2", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("presets.yaml"))
        .stderr(predicate::str::contains("`step`"));
}

#[test]
fn test_malformed_config_fails_with_file_name() {
    let env = setup_env();
    write_config(&env, "presets.yaml", "- name: Broken\n  coordinate_mode: [\n");
    basesize(&env)
        .args(["calc", "1", "2", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("presets.yaml"));
}
