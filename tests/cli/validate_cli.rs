use std::path::{Path, PathBuf};

use predicates::prelude::predicate;
use serde_json::Value;
use tempfile::tempdir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn help_is_available() {
    assert_cmd::cargo::cargo_bin_cmd!("entrycheck")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("validate"));
}

#[test]
fn version_is_available() {
    assert_cmd::cargo::cargo_bin_cmd!("entrycheck")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn valid_file_prints_text_report_and_exits_zero() {
    assert_cmd::cargo::cargo_bin_cmd!("entrycheck")
        .args(["validate", "--today", "2024-06-01", "--input"])
        .arg(fixture("valid_data.json"))
        .env_remove("RUST_LOG")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("DATA VALIDATION REPORT"))
        .stdout(predicate::str::contains("Valid Entries: 4"))
        .stdout(predicate::str::contains("✅ Entry 3: Baby Lee (baby.lee@example.org)"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn invalid_file_exits_two_with_errors_listed() {
    assert_cmd::cargo::cargo_bin_cmd!("entrycheck")
        .args(["validate", "--today", "2024-06-01", "--input"])
        .arg(fixture("invalid_data.json"))
        .assert()
        .code(2)
        .stdout(predicate::str::contains("ERRORS DETECTED:"))
        .stdout(predicate::str::contains("❌ Entry 3: Name cannot be empty"))
        .stdout(predicate::str::contains("Errors: 6"));
}

#[test]
fn json_format_emits_structured_result() {
    let output = assert_cmd::cargo::cargo_bin_cmd!("entrycheck")
        .args(["validate", "--format", "json", "--today", "2024-06-01", "--input"])
        .arg(fixture("users.csv"))
        .output()
        .expect("run entrycheck");

    assert_eq!(output.status.code(), Some(2));
    let value: Value = serde_json::from_slice(&output.stdout).expect("stdout json");
    assert_eq!(value["is_valid"], Value::Bool(false));
    assert_eq!(value["summary"]["total_entries"], serde_json::json!(3));
    assert_eq!(value["valid_entries"][0]["name"], serde_json::json!("John Doe"));
}

#[test]
fn plain_format_lists_entries_as_json() {
    assert_cmd::cargo::cargo_bin_cmd!("entrycheck")
        .args(["validate", "--format", "plain", "--today", "2024-06-01", "--input"])
        .arg(fixture("valid_data.json"))
        .assert()
        .code(0)
        .stdout(predicate::str::starts_with("Validation Report:\n"))
        .stdout(predicate::str::contains("\"plan\":\"family\""));
}

#[test]
fn future_registration_is_judged_against_today_flag() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("users.json");
    std::fs::write(
        &path,
        r#"[{"name":"Early","email":"early@example.com","age":20,"registration_date":"2024-06-02"}]"#,
    )
    .expect("write input");

    assert_cmd::cargo::cargo_bin_cmd!("entrycheck")
        .args(["validate", "--today", "2024-06-01", "--input"])
        .arg(&path)
        .assert()
        .code(2)
        .stdout(predicate::str::contains(
            "❌ Entry 1: Registration date cannot be in the future",
        ));

    assert_cmd::cargo::cargo_bin_cmd!("entrycheck")
        .args(["validate", "--today", "2024-06-02", "--input"])
        .arg(&path)
        .assert()
        .code(0);
}

#[test]
fn unsupported_extension_exits_three_with_json_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("users.txt");
    std::fs::write(&path, "name\n").expect("write input");

    let output = assert_cmd::cargo::cargo_bin_cmd!("entrycheck")
        .args(["validate", "--input"])
        .arg(&path)
        .output()
        .expect("run entrycheck");

    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).expect("stderr utf8");
    let payload: Value = serde_json::from_str(stderr.trim()).expect("stderr json");
    assert_eq!(payload["error"], Value::String("input_usage_error".to_string()));
    assert_eq!(payload["code"], serde_json::json!(3));
}

#[test]
fn missing_input_flag_is_usage_error() {
    assert_cmd::cargo::cargo_bin_cmd!("entrycheck")
        .arg("validate")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("cli_parse_error"));
}

#[test]
fn verbose_flag_logs_to_stderr() {
    assert_cmd::cargo::cargo_bin_cmd!("entrycheck")
        .args(["-v", "validate", "--today", "2024-06-01", "--input"])
        .arg(fixture("valid_data.json"))
        .env_remove("RUST_LOG")
        .assert()
        .code(0)
        .stderr(predicate::str::contains("validation finished"));
}
