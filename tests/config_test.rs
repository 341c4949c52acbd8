//! Configuration loading tests

use serial_test::serial;
use std::io::Write;
use tempfile::NamedTempFile;
use volunteer_hub::{DateKey, Settings};

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("Failed to create temp config");
    file.write_all(contents.as_bytes()).expect("Failed to write temp config");
    file
}

#[test]
fn test_file_overrides_defaults() {
    let file = write_config(
        r#"
[logging]
level = "debug"

[board]
date_key = "createdAt"
fixed_now = "2025-01-01T09:00:00"
"#,
    );

    let settings = Settings::from_file(file.path()).expect("Failed to load settings");
    assert_eq!(settings.logging.level, "debug");
    assert!(!settings.logging.json);
    assert_eq!(settings.board.date_key, DateKey::CreatedAt);
    assert_eq!(settings.board.snapshot_path, "events.json");
    assert!(settings.validate().is_ok());
    assert_eq!(settings.board.now().to_string(), "2025-01-01 09:00:00");
}

#[test]
fn test_invalid_file_values_fail_validation() {
    let file = write_config(
        r#"
[logging]
level = "loud"
"#,
    );

    let settings = Settings::from_file(file.path()).expect("Failed to load settings");
    assert!(settings.validate().is_err());
}

#[test]
#[serial]
fn test_environment_overrides() {
    std::env::set_var("VOLUNTEERHUB__BOARD__SNAPSHOT_PATH", "/tmp/snapshot.json");
    let settings = Settings::new();
    std::env::remove_var("VOLUNTEERHUB__BOARD__SNAPSHOT_PATH");

    let settings = settings.expect("Failed to load settings");
    assert_eq!(settings.board.snapshot_path, "/tmp/snapshot.json");
    assert_eq!(settings.board.date_key, DateKey::StartDate);
}
