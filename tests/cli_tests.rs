use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use tempfile::tempdir;

mod common;
use common::{config_path, tp, write_config};

#[test]
fn test_init_creates_config_and_refuses_overwrite() {
    let dir = tempdir().unwrap();

    tp(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Config file"));

    let content = fs::read_to_string(config_path(&dir)).unwrap();
    assert!(content.contains("office_name:"));
    assert!(content.contains("default_ownership: Private"));

    tp(&dir)
        .arg("init")
        .assert()
        .failure()
        .stderr(contains("already exists"));

    tp(&dir).args(["init", "--force"]).assert().success();
}

#[test]
fn test_config_print_and_check() {
    let dir = tempdir().unwrap();
    write_config(&dir, "Private");

    tp(&dir)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("officer_name: Test Officer"));

    tp(&dir)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration file is complete."));
}

#[test]
fn test_config_check_reports_missing_keys() {
    let dir = tempdir().unwrap();
    fs::write(config_path(&dir), "office_name: Somewhere\n").unwrap();

    tp(&dir)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing key 'pen'"))
        .stdout(contains("Missing key 'office_name'").not());
}

#[test]
fn test_broken_config_is_an_error() {
    let dir = tempdir().unwrap();
    fs::write(config_path(&dir), "office_name: [unclosed\n").unwrap();

    tp(&dir)
        .args(["config", "--print"])
        .assert()
        .failure()
        .stderr(contains("Error:"));
}

#[test]
fn test_check_dates() {
    let dir = tempdir().unwrap();
    write_config(&dir, "Private");

    tp(&dir)
        .args(["check", "2024-03-04", "2024-03-09", "2024-03-10"])
        .assert()
        .success()
        .stdout(contains("2024-03-04 is available"))
        .stdout(contains("2024-03-09 is not available: Selected date is the second Saturday."))
        .stdout(contains("2024-03-10 is not available: Selected date is a Sunday."));
}

#[test]
fn test_check_rejects_bad_date() {
    let dir = tempdir().unwrap();

    tp(&dir)
        .args(["check", "04/03/2024"])
        .assert()
        .failure()
        .stderr(contains("is not a date"));
}
