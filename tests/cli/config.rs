use crate::support::{promptgrade_in, stdout_json};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Config command and config resolution tests
// ============================================================================

#[test]
fn test_config_defaults_as_toml() {
    let dir = tempdir().unwrap();
    let output = promptgrade_in(dir.path())
        .args(["--quiet", "config"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout).unwrap();
    let value: toml::Value = toml::from_str(&text).unwrap();
    assert_eq!(value["locale"].as_str(), Some("ko"));
    assert_eq!(value["scoring"]["base_score"].as_integer(), Some(50));
    assert_eq!(value["scoring"]["label_threshold"].as_float(), Some(75.0));
    assert_eq!(value["sampling"]["mode"].as_str(), Some("prefix"));
}

#[test]
fn test_config_json_reports_source() {
    let dir = tempdir().unwrap();
    let output = promptgrade_in(dir.path())
        .args(["--format", "json", "config"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["source"], "built-in defaults");
    assert_eq!(json["config"]["scoring"]["accuracy_weight"], 0.9);
}

#[test]
fn test_local_config_changes_threshold() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("promptgrade.toml"),
        "[scoring]\nlabel_threshold = 50.0\n",
    )
    .unwrap();

    let output = promptgrade_in(dir.path())
        .args(["--format", "json", "score", "--text", "번역해 주세요"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["total_score"], 50.0);
    assert_eq!(json["label"], 1);
}

#[test]
fn test_global_config_is_used_without_local() {
    let dir = tempdir().unwrap();
    let global = dir.path().join(".global-config");
    fs::create_dir_all(&global).unwrap();
    fs::write(global.join("config.toml"), "locale = \"en\"\n").unwrap();

    let output = promptgrade_in(dir.path())
        .args(["--format", "json", "config"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["source"], "custom config directory");
    assert_eq!(json["config"]["locale"], "en");
}

#[test]
fn test_locale_flag_overrides_config() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("promptgrade.toml"), "locale = \"en\"\n").unwrap();

    let output = promptgrade_in(dir.path())
        .args(["--locale", "ko", "--format", "json", "config"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["config"]["locale"], "ko");
}

#[test]
fn test_save_then_load_explicit_config() {
    let dir = tempdir().unwrap();
    promptgrade_in(dir.path())
        .args(["--locale", "en", "config", "--save", "saved.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved configuration to"));

    let output = promptgrade_in(dir.path())
        .args(["--config", "saved.toml", "--format", "json", "config"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["config"]["locale"], "en");
    assert!(json["source"].as_str().unwrap().ends_with("saved.toml"));
}

#[test]
fn test_config_env_var() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("custom.toml"), "[sampling]\nmode = \"full\"\n").unwrap();

    let output = promptgrade_in(dir.path())
        .env("PROMPTGRADE_CONFIG", "custom.toml")
        .args(["--format", "json", "config"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["config"]["sampling"]["mode"], "full");
}

#[test]
fn test_missing_explicit_config_is_data_error() {
    let dir = tempdir().unwrap();
    promptgrade_in(dir.path())
        .args(["--config", "nope.toml", "config"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn test_invalid_weights_are_rejected() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("promptgrade.toml"),
        "[scoring]\naccuracy_weight = 0.5\nlength_weight = 0.1\n",
    )
    .unwrap();

    promptgrade_in(dir.path())
        .args(["score", "--text", "hi"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("weights must sum to 1.0"));
}
