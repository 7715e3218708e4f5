use crate::support::{promptgrade_in, stdout_json};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Catalog command tests
// ============================================================================

#[test]
fn test_catalog_json() {
    let dir = tempdir().unwrap();
    let output = promptgrade_in(dir.path())
        .args(["--format", "json", "catalog"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let entries = json["catalog"]["entries"].as_array().unwrap();
    let importances: Vec<u64> = entries
        .iter()
        .map(|e| e["importance"].as_u64().unwrap())
        .collect();
    assert_eq!(importances, vec![95, 88, 82, 76]);
    assert_eq!(json["catalog"]["locale"], "ko");
    assert_eq!(json["catalog"]["temperature"]["value"], 0.4);
    assert_eq!(json["catalog"]["temperature"]["importance"], 70);
    assert_eq!(json["rules"][0]["weight"], 25);
    assert_eq!(json["rules"][0]["keywords"][0], "당신은");
}

#[test]
fn test_catalog_records() {
    let dir = tempdir().unwrap();
    promptgrade_in(dir.path())
        .args(["--format", "records", "--locale", "en", "catalog"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H promptgrade=1 records=1 mode=catalog locale=en\n",
        ))
        .stdout(predicate::str::contains("E role importance=95 "))
        .stdout(predicate::str::contains("E constraints importance=76 "))
        .stdout(predicate::str::contains("T value=0.4 importance=70 "));
}

#[test]
fn test_catalog_human_shows_configured_rules() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("promptgrade.toml"),
        "[features.role]\nweight = 30\nkeywords = [\"페르소나\"]\n",
    )
    .unwrap();

    promptgrade_in(dir.path())
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("Evidence catalog (ko)"))
        .stdout(predicate::str::contains("role  importance 95  weight 30"))
        .stdout(predicate::str::contains("markers: 페르소나"))
        .stdout(predicate::str::contains("temperature  importance 70  value 0.4"));
}
