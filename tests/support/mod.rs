use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Get a Command for promptgrade, isolated from the caller's environment
pub fn promptgrade() -> Command {
    let mut cmd = cargo_bin_cmd!("promptgrade");
    cmd.env_remove("PROMPTGRADE_CONFIG")
        .env_remove("PROMPTGRADE_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Command running inside `dir`, with the global config directory pointed
/// at an empty folder under it
pub fn promptgrade_in(dir: &Path) -> Command {
    let mut cmd = promptgrade();
    cmd.current_dir(dir)
        .env("PROMPTGRADE_CONFIG_DIR", dir.join(".global-config"));
    cmd
}

/// Temp directory holding a JSON Lines file with the given rows
#[allow(dead_code)]
pub fn jsonl_fixture(name: &str, rows: &[serde_json::Value]) -> TempDir {
    let dir = TempDir::new().unwrap();
    let body: Vec<String> = rows.iter().map(|r| r.to_string()).collect();
    fs::write(dir.path().join(name), body.join("\n") + "\n").unwrap();
    dir
}

/// Parse stdout of a finished command as JSON
#[allow(dead_code)]
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
