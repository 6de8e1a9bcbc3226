use chrono::NaiveDate;
use entrycheck::io::{Format, IoError};
use entrycheck::util::time::FixedClock;
use entrycheck::{DataValidator, ValidateError};
use tempfile::tempdir;

fn validator() -> DataValidator<FixedClock> {
    DataValidator::with_clock(FixedClock(
        NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date"),
    ))
}

#[test]
fn missing_source_path_is_a_configuration_error() {
    let err = validator().validate_entries().expect_err("must fail");
    assert!(matches!(err, ValidateError::NoSourcePath));
    assert_eq!(err.to_string(), "no file path provided");
}

#[test]
fn unsupported_extension_is_a_configuration_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("users.yaml");
    std::fs::write(&path, "- name: a\n").expect("write input");

    let err = validator().validate_file(&path).expect_err("must fail");
    match err {
        ValidateError::ResolveSource {
            source: IoError::UnsupportedPathExtension { path: reported },
        } => assert!(reported.ends_with("users.yaml")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn nonexistent_file_is_an_open_error() {
    let dir = tempdir().expect("tempdir");
    let err = validator()
        .validate_file(dir.path().join("absent.json"))
        .expect_err("must fail");
    assert!(matches!(err, ValidateError::OpenSource { .. }));
}

#[test]
fn malformed_json_is_a_read_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{not json").expect("write input");

    let err = validator().validate_file(&path).expect_err("must fail");
    match err {
        ValidateError::ReadSource {
            format: Format::Json,
            source: IoError::JsonParse(_),
        } => {}
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn read_records_reports_each_csv_row() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("rows.CSV");
    std::fs::write(&path, "name,email\na,a@example.com\nb,b@example.com\n").expect("write input");

    let records = validator().with_source(&path).read_records().expect("records");
    assert_eq!(records.len(), 2);
    assert_eq!(records[1]["email"], serde_json::json!("b@example.com"));
}
