#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CATALOG: &str = r#"{
  "shoes": [
    { "color": "red",  "size": 9,  "width": "narrow" },
    { "color": "red",  "size": 10, "width": "standard" },
    { "color": "blue", "size": 9,  "width": "standard" }
  ]
}"#;

fn setup() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("data.json"), CATALOG).unwrap();
    temp
}

fn facetz(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("facetz").unwrap();
    cmd.current_dir(dir)
        .env("FACETZ_CONFIG_DIR", dir.join("config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn default_command_shows_all_values() {
    let temp = setup();
    facetz(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("colors  red blue"))
        .stdout(predicate::str::contains("sizes   9 10"))
        .stdout(predicate::str::contains("widths  narrow standard"));
}

#[test]
fn selecting_blue_disables_incompatible_values() {
    let temp = setup();
    facetz(temp.path())
        .args(["show", "-s", "colors=blue"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Selected colors=blue"))
        .stdout(predicate::str::contains("colors  red [blue]"))
        .stdout(predicate::str::contains("sizes   9 ~10~"))
        .stdout(predicate::str::contains("widths  ~narrow~ standard"));
}

#[test]
fn disabled_toggle_is_reported_and_ignored() {
    let temp = setup();
    facetz(temp.path())
        .args(["show", "-s", "color=blue", "-s", "size=10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sizes=10 is disabled; ignored"))
        .stdout(predicate::str::contains("sizes   9 ~10~"));
}

#[test]
fn retoggle_clears_selection() {
    let temp = setup();
    facetz(temp.path())
        .args(["show", "-s", "colors=blue", "-s", "colors=blue"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared colors=blue"))
        .stdout(predicate::str::contains("colors  red blue"))
        .stdout(predicate::str::contains("~").not());
}

#[test]
fn unknown_value_fails() {
    let temp = setup();
    facetz(temp.path())
        .args(["show", "-s", "colors=green"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Unknown value 'green' for dimension 'colors'",
        ));
}

#[test]
fn unknown_dimension_fails() {
    let temp = setup();
    facetz(temp.path())
        .args(["show", "-s", "heel=high"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown dimension: heel"));
}

#[test]
fn malformed_catalog_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("data.json"),
        r#"{"shoes": [{"color": "red", "size": 9}]}"#,
    )
    .unwrap();

    facetz(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Item 0 has no value for dimension 'widths'",
        ));
}

#[test]
fn show_json_output() {
    let temp = setup();
    let output = facetz(temp.path())
        .args(["show", "--json", "-s", "colors=blue"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let facets: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(facets[0]["dimension"], "colors");
    assert_eq!(facets[0]["values"][1]["value"], "blue");
    assert_eq!(facets[0]["values"][1]["selected"], true);
    assert_eq!(facets[1]["values"][1]["value"], "10");
    assert_eq!(facets[1]["values"][1]["disabled"], true);
}

#[test]
fn matches_lists_items() {
    let temp = setup();
    facetz(temp.path())
        .args(["matches", "-s", "sizes=9"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1. colors=red  sizes=9  widths=narrow",
        ))
        .stdout(predicate::str::contains(
            "3. colors=blue  sizes=9  widths=standard",
        ))
        .stdout(predicate::str::contains("2 of 3 items match"));
}

#[test]
fn catalog_flag_and_config_fields() {
    let temp = TempDir::new().unwrap();
    let catalog = temp.path().join("boots.json");
    fs::write(
        &catalog,
        r#"{"boots": [{"colour": "tan", "size": "8", "width": "wide"}]}"#,
    )
    .unwrap();

    facetz(temp.path())
        .args(["config", "collection", "boots"])
        .assert()
        .success()
        .stdout(predicate::str::contains("collection set to boots"));
    facetz(temp.path())
        .args(["config", "field.colors", "colour"])
        .assert()
        .success();

    facetz(temp.path())
        .args(["--catalog", catalog.to_str().unwrap(), "dimensions"])
        .assert()
        .success()
        .stdout(predicate::str::contains("colors  field: colour, 1 value(s)"));

    facetz(temp.path())
        .args(["config", "field.colors"])
        .assert()
        .success()
        .stdout(predicate::str::contains("colour"));
}

#[test]
fn config_unknown_key_reports_error() {
    let temp = setup();
    facetz(temp.path())
        .args(["config", "heel", "high"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown config key: heel"));
}

#[test]
fn rust_log_level_enables_debug_output() {
    let temp = setup();
    facetz(temp.path())
        .env("RUST_LOG", "debug")
        .args(["show", "-s", "colors=red"])
        .assert()
        .success()
        .stderr(predicate::str::contains("built value index"));
}

#[test]
fn quiet_by_default() {
    let temp = setup();
    facetz(temp.path())
        .args(["show", "-s", "colors=red"])
        .assert()
        .success()
        .stderr(predicate::str::contains("built value index").not());
}
