use crate::support::{jsonl_fixture, promptgrade_in, stdout_json};
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use tempfile::tempdir;

fn sample_rows() -> Vec<serde_json::Value> {
    vec![
        json!({"id": 1, "prompt": "당신은 분석가입니다. 다음 단계를 따르세요. 예를 들어 표로 정리하세요."}),
        json!({"id": 2, "prompt": "번역해 주세요"}),
        json!({"id": 3, "prompt": null}),
    ]
}

// ============================================================================
// Batch command tests
// ============================================================================

#[test]
fn test_batch_json_summary() {
    let dir = jsonl_fixture("rows.jsonl", &sample_rows());
    let output = promptgrade_in(dir.path())
        .args(["--format", "json", "batch", "rows.jsonl"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["total"], 3);
    assert_eq!(json["scored"], 3);
    assert_eq!(json["interrupted"], false);
    assert!(json["generated_at"].is_string());

    let summary = &json["summary"];
    assert_eq!(summary["count"], 3);
    assert_eq!(summary["high_count"], 1);
    assert_eq!(summary["low_count"], 2);
    assert_eq!(summary["mean_score"], 50.0);
    assert_eq!(summary["high_mean_score"], 95.0);
    assert_eq!(summary["low_mean_score"], 27.5);
    assert_eq!(summary["improvement_gap"], 47.5);

    // Null prompt scores as the empty string
    assert_eq!(json["rows"][2]["index"], 2);
    assert_eq!(json["rows"][2]["total_score"], 5.0);

    assert_eq!(json["top_strengths"][0]["category"], "role");
    assert_eq!(json["top_weaknesses"][0]["category"], "role");
    assert_eq!(json["top_weaknesses"][0]["count"], 1);
}

#[test]
fn test_batch_records() {
    let dir = jsonl_fixture("rows.jsonl", &sample_rows());
    promptgrade_in(dir.path())
        .args(["--format", "records", "batch", "rows.jsonl"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H promptgrade=1 records=1 mode=batch locale=ko sampling=prefix total=3 scored=3 interrupted=false\n",
        ))
        .stdout(predicate::str::contains("S index=0 total=95 "))
        .stdout(predicate::str::contains("S index=1 total=50 "))
        .stdout(predicate::str::contains("A count=3 mean=50.00 high=1 low=2 "))
        .stdout(predicate::str::contains("P strength role count=1"));
}

#[test]
fn test_batch_human_report() {
    let dir = jsonl_fixture("rows.jsonl", &sample_rows());
    promptgrade_in(dir.path())
        .args(["batch", "rows.jsonl"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#0"))
        .stdout(predicate::str::contains("missing: role, steps, examples, constraints"))
        .stdout(predicate::str::contains("Mean score: 50.00"))
        .stdout(predicate::str::contains("Common weaknesses (first 3 high / 5 low):"));
}

#[test]
fn test_batch_combines_fields_in_order() {
    let rows = vec![json!({"title": "예시:", "body": "당신은 시인입니다"})];
    let dir = jsonl_fixture("rows.jsonl", &rows);
    let output = promptgrade_in(dir.path())
        .args([
            "--format", "json", "batch", "rows.jsonl", "--field", "body", "--field", "title",
        ])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    let strengths: Vec<&str> = json["rows"][0]["strengths"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["category"].as_str().unwrap())
        .collect();
    assert_eq!(strengths, vec!["role", "examples"]);
}

#[test]
fn test_batch_defaults_to_first_text_field() {
    let rows = vec![json!({"id": 7, "question": "당신은 의사입니다"})];
    let dir = jsonl_fixture("rows.jsonl", &rows);
    let output = promptgrade_in(dir.path())
        .args(["--format", "json", "batch", "rows.jsonl"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["rows"][0]["strengths"][0]["category"], "role");
}

#[test]
fn test_batch_output_file() {
    let dir = jsonl_fixture("rows.jsonl", &sample_rows());
    let output = promptgrade_in(dir.path())
        .args(["--format", "json", "batch", "rows.jsonl", "--output", "results.jsonl"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert!(json.get("rows").is_none());

    let written = fs::read_to_string(dir.path().join("results.jsonl")).unwrap();
    let lines: Vec<serde_json::Value> = written
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["index"], 0);
    assert_eq!(lines[0]["label"], 1);
}

#[test]
fn test_batch_reads_stdin() {
    let dir = tempdir().unwrap();
    promptgrade_in(dir.path())
        .args(["--quiet", "batch", "-"])
        .write_stdin("{\"prompt\": \"번역해 주세요\"}\n\n{\"prompt\": \"요약해 주세요\"}\n")
        .assert()
        .success()
        .stdout("50.00\n");
}

#[test]
fn test_batch_malformed_row_is_data_error() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("rows.jsonl"),
        "{\"prompt\": \"ok\"}\n[1, 2]\n",
    )
    .unwrap();

    let output = promptgrade_in(dir.path())
        .args(["--format", "json", "batch", "rows.jsonl"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "invalid_record");
    assert_eq!(err["error"]["line"], 2);
}

#[test]
fn test_batch_directory() {
    let dir = tempdir().unwrap();
    let prompts = dir.path().join("prompts");
    fs::create_dir(&prompts).unwrap();
    fs::write(prompts.join("a.txt"), "번역해 주세요").unwrap();
    fs::write(prompts.join("b.md"), "당신은 분석가입니다. 다음 단계를 따르세요. 예를 들어 표로 정리하세요.").unwrap();
    fs::write(prompts.join("ignored.json"), "{}").unwrap();

    let output = promptgrade_in(dir.path())
        .args(["--format", "json", "batch", "--dir", "prompts"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["total"], 2);
    assert_eq!(json["rows"][0]["total_score"], 50.0);
    assert_eq!(json["rows"][1]["total_score"], 95.0);
}

#[test]
fn test_batch_full_scan_counts_every_row() {
    let rows: Vec<serde_json::Value> = (0..7).map(|_| json!({"prompt": "요약"})).collect();
    let dir = jsonl_fixture("rows.jsonl", &rows);

    let prefix = stdout_json(
        &promptgrade_in(dir.path())
            .args(["--format", "json", "batch", "rows.jsonl"])
            .output()
            .unwrap(),
    );
    assert_eq!(prefix["summary"]["weakness_pattern_counts"]["role"], 5);

    let full = stdout_json(
        &promptgrade_in(dir.path())
            .args(["--format", "json", "batch", "rows.jsonl", "--full-scan"])
            .output()
            .unwrap(),
    );
    assert_eq!(full["summary"]["weakness_pattern_counts"]["role"], 7);
    assert_eq!(full["summary"]["sampling"]["mode"], "full");
}

#[test]
fn test_batch_requires_input() {
    let dir = tempdir().unwrap();
    promptgrade_in(dir.path()).arg("batch").assert().code(2);
}

#[test]
fn test_batch_rejects_empty_field_name() {
    let dir = jsonl_fixture("rows.jsonl", &sample_rows());
    promptgrade_in(dir.path())
        .args(["batch", "rows.jsonl", "--field", ""])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid field name"));
}

#[test]
fn test_batch_refuses_to_overwrite_input() {
    let dir = jsonl_fixture("rows.jsonl", &sample_rows());
    promptgrade_in(dir.path())
        .args(["batch", "rows.jsonl", "--output", "rows.jsonl"])
        .assert()
        .code(2);
    let input = fs::read_to_string(dir.path().join("rows.jsonl")).unwrap();
    assert_eq!(input.lines().count(), 3);
}
