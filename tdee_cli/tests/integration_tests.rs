//! Integration tests for the tdee binary.
//!
//! These tests verify end-to-end behavior including:
//! - Text and JSON reports
//! - Validation failures
//! - JSON profile files
//! - Configuration files

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a test config directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the path to the CLI binary, isolated from any user config
fn cli(dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("tdee"));
    cmd.arg("--config").arg(config_path(dir));
    cmd
}

fn config_path(dir: &TempDir) -> PathBuf {
    dir.path().join("config.toml")
}

fn reference_profile(cmd: &mut Command) -> &mut Command {
    cmd.args([
        "calc",
        "--gender",
        "male",
        "--age",
        "30",
        "--weight",
        "70",
        "--height-cm",
        "170",
        "--activity",
        "moderate",
    ])
}

fn json_output(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).expect("stdout should be JSON")
}

#[test]
fn test_cli_help() {
    let dir = setup_test_dir();
    cli(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("TDEE calculator and weight projection"));
}

#[test]
fn test_text_report() {
    let dir = setup_test_dir();
    reference_profile(&mut cli(&dir))
        .assert()
        .success()
        .stdout(predicate::str::contains("BMR:  1618 calories/day"))
        .stdout(predicate::str::contains("TDEE: 2507 calories/day"))
        .stdout(predicate::str::contains("Cutting (-20%):  2006"))
        .stdout(predicate::str::contains("Bulking (+10%):  2758"))
        .stdout(predicate::str::contains("Estimated Healthy Weight: 68 kg"))
        .stdout(predicate::str::contains("about 4 weeks cutting"));
}

#[test]
fn test_json_report() {
    let dir = setup_test_dir();
    let value = json_output(reference_profile(&mut cli(&dir)).arg("--json"));

    assert_eq!(value["energy"]["bmr"], 1618);
    assert_eq!(value["energy"]["tdee"], 2507);
    assert_eq!(value["target"]["is_healthy_estimate"], true);
    assert_eq!(value["weeks_to_target"]["cutting"], 4);
    assert!(value["weeks_to_target"]["bulking"].is_null());
    assert_eq!(value["trajectory"]["maintenance"].as_array().unwrap().len(), 13);
    assert_eq!(value["trajectory"]["cutting"][1]["weight"], 69.5);
    assert_eq!(value["summaries"][2]["week"], 12);
    assert_eq!(value["composition"][0]["plan"], "cutting");
    assert_eq!(value["composition"][0]["fat"], -4.4);
    assert_eq!(value["composition"][0]["lean"], -1.1);
    assert_eq!(value["composition"][2]["fat"], 0.8);
    assert_eq!(value["composition"][2]["lean"], 1.9);
}

#[test]
fn test_text_report_shows_composition() {
    let dir = setup_test_dir();
    reference_profile(&mut cli(&dir))
        .assert()
        .success()
        .stdout(predicate::str::contains("Estimated 12-week composition change (kg)"))
        .stdout(predicate::str::contains("cutting           -4.4      -1.1"))
        .stdout(predicate::str::contains("bulking           +0.8      +1.9"));
}

#[test]
fn test_imperial_units_with_target() {
    let dir = setup_test_dir();
    let value = json_output(cli(&dir).args([
        "calc",
        "--gender",
        "male",
        "--age",
        "30",
        "--weight",
        "154",
        "--weight-unit",
        "lbs",
        "--height-unit",
        "ft",
        "--height-ft",
        "5",
        "--height-ft-in",
        "7",
        "--target-weight",
        "140",
        "--json",
    ]));

    assert_eq!(value["weight_unit"], "lb");
    assert_eq!(value["target"]["is_healthy_estimate"], false);
    assert_eq!(value["weeks_to_target"]["cutting"], 14);
    assert_eq!(value["trajectory"]["target"].as_array().unwrap().len(), 29);
}

#[test]
fn test_long_target_mentions_extended_projection() {
    let dir = setup_test_dir();
    reference_profile(&mut cli(&dir))
        .args(["--target-weight", "60"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Your Target Weight: 60 kg"))
        .stdout(predicate::str::contains("Extends beyond 12-week projection"));
}

#[test]
fn test_missing_height_is_rejected() {
    let dir = setup_test_dir();
    cli(&dir)
        .args([
            "calc",
            "--gender",
            "female",
            "--age",
            "40",
            "--weight",
            "60",
            "--height-unit",
            "in",
            "--height-cm",
            "165",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("height is required for unit 'in'"));
}

#[test]
fn test_out_of_range_age_is_rejected() {
    let dir = setup_test_dir();
    cli(&dir)
        .args([
            "calc", "--gender", "male", "--age", "12", "--weight", "70", "--height-cm", "170",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("age must be between 15 and 100"));
}

#[test]
fn test_unknown_activity_is_rejected() {
    let dir = setup_test_dir();
    reference_profile(&mut cli(&dir))
        .args(["--activity", "extreme"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown activity level"));
}

#[test]
fn test_profile_file() {
    let dir = setup_test_dir();
    let profile_path = dir.path().join("profile.json");
    fs::write(
        &profile_path,
        r#"{
            "gender": "male",
            "age": 30,
            "weight": 70,
            "height_unit": "cm",
            "height_cm": 170,
            "activity_level": "moderate",
            "target_weight": 70
        }"#,
    )
    .unwrap();

    let value = json_output(cli(&dir).arg("file").arg(&profile_path).arg("--json"));

    assert_eq!(value["energy"]["bulking"], 2758);
    assert!(value["weeks_to_target"]["cutting"].is_null());
    assert!(value["weeks_to_target"]["bulking"].is_null());
}

#[test]
fn test_activities_listing() {
    let dir = setup_test_dir();
    cli(&dir)
        .arg("activities")
        .assert()
        .success()
        .stdout(predicate::str::contains("very-active"))
        .stdout(predicate::str::contains("Moderate exercise 3-5 days/week"));
}

#[test]
fn test_config_init_and_override() {
    let dir = setup_test_dir();

    cli(&dir)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));
    assert!(config_path(&dir).exists());

    // A second init without --force must not clobber the file
    cli(&dir).args(["config", "--init"]).assert().failure();

    let contents = fs::read_to_string(config_path(&dir)).unwrap();
    fs::write(
        config_path(&dir),
        contents.replace("cutting_factor = 0.8", "cutting_factor = 0.75"),
    )
    .unwrap();

    let value = json_output(reference_profile(&mut cli(&dir)).arg("--json"));
    assert_eq!(value["energy"]["cutting"], 1880);
}

#[test]
fn test_invalid_config_is_rejected() {
    let dir = setup_test_dir();
    fs::write(config_path(&dir), "[projection]\ndefault_weeks = 6\n").unwrap();

    reference_profile(&mut cli(&dir))
        .assert()
        .failure()
        .stderr(predicate::str::contains("default_weeks"));
}
