use crate::support::{promptgrade_in, stdout_json};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const STRONG_KO: &str = "당신은 분석가입니다. 다음 단계를 따르세요. 예를 들어 표로 정리하세요.";

// ============================================================================
// Score command tests
// ============================================================================

#[test]
fn test_score_inline_text_json() {
    let dir = tempdir().unwrap();
    let output = promptgrade_in(dir.path())
        .args(["--format", "json", "score", "--text", STRONG_KO])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["total_score"], 95.0);
    assert_eq!(json["accuracy_score"], 100);
    assert_eq!(json["length_score"], 50);
    assert_eq!(json["label"], 1);
    assert_eq!(json["temperature_setting"], 0.4);
    assert_eq!(json["strengths"].as_array().unwrap().len(), 3);
    assert_eq!(json["weaknesses"][0]["category"], "constraints");
    assert_eq!(json["suggestions"][0]["category"], "constraints");
    assert!(json["improved_prompt"].as_str().unwrap().contains(STRONG_KO));
}

#[test]
fn test_score_weak_prompt_ranks_all_suggestions() {
    let dir = tempdir().unwrap();
    let output = promptgrade_in(dir.path())
        .args(["--format", "json", "score", "--text", "번역해 주세요"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["total_score"], 50.0);
    assert_eq!(json["label"], 0);

    let priorities: Vec<u64> = json["suggestions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["priority"].as_u64().unwrap())
        .collect();
    assert_eq!(priorities, vec![25, 20, 15, 10]);
}

#[test]
fn test_score_reads_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("prompt.txt"), STRONG_KO).unwrap();

    promptgrade_in(dir.path())
        .args(["--quiet", "score", "prompt.txt"])
        .assert()
        .success()
        .stdout("95\n");
}

#[test]
fn test_score_reads_stdin() {
    let dir = tempdir().unwrap();
    promptgrade_in(dir.path())
        .args(["--quiet", "score", "-"])
        .write_stdin("번역해 주세요")
        .assert()
        .success()
        .stdout("50\n");
}

#[test]
fn test_score_empty_text() {
    let dir = tempdir().unwrap();
    let output = promptgrade_in(dir.path())
        .args(["--format", "json", "score", "--text", ""])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["total_score"], 5.0);
    assert_eq!(json["weaknesses"].as_array().unwrap().len(), 0);
}

#[test]
fn test_score_human_report() {
    let dir = tempdir().unwrap();
    promptgrade_in(dir.path())
        .args(["score", "--text", "번역해 주세요"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 50.00 / 100 (low quality"))
        .stdout(predicate::str::contains("Weaknesses:"))
        .stdout(predicate::str::contains("1. [role]"))
        .stdout(predicate::str::contains("Improved prompt:"))
        .stdout(predicate::str::contains("Recommended temperature: 0.4"));
}

#[test]
fn test_score_records() {
    let dir = tempdir().unwrap();
    promptgrade_in(dir.path())
        .args(["--format", "records", "score", "--text", STRONG_KO])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H promptgrade=1 records=1 mode=score locale=ko threshold=75\n",
        ))
        .stdout(predicate::str::contains(
            "S total=95 accuracy=100 length=50 label=1 temperature=0.4\n",
        ))
        .stdout(predicate::str::contains("F strength role impact=25 "))
        .stdout(predicate::str::contains("F weakness constraints impact=-10 "))
        .stdout(predicate::str::contains("G constraints priority=10 "))
        .stdout(predicate::str::contains("B improved\n"))
        .stdout(predicate::str::ends_with("B-END\n"));
}

#[test]
fn test_score_english_locale() {
    let dir = tempdir().unwrap();
    let output = promptgrade_in(dir.path())
        .args([
            "--locale",
            "en",
            "--format",
            "json",
            "score",
            "--text",
            "You are a travel planner. Step 1: ask the dates. For example, Paris. Do not exceed 200 words.",
        ])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["accuracy_score"], 100);
    assert_eq!(json["length_score"], 80);
    assert_eq!(json["total_score"], 98.0);
    assert!(json["suggestions"].as_array().unwrap().is_empty());
}

#[test]
fn test_score_missing_file_is_data_error() {
    let dir = tempdir().unwrap();
    promptgrade_in(dir.path())
        .args(["score", "missing.txt"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_score_missing_file_json_envelope() {
    let dir = tempdir().unwrap();
    let output = promptgrade_in(dir.path())
        .args(["--format", "json", "score", "missing.txt"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "not_found");
    assert_eq!(err["error"]["code"], 3);
}

#[test]
fn test_score_text_and_file_conflict() {
    let dir = tempdir().unwrap();
    promptgrade_in(dir.path())
        .args(["score", "prompt.txt", "--text", "hi"])
        .assert()
        .code(2);
}
