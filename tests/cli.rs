//! End-to-end checks of the binary's failure paths.
//!
//! The success path blocks in the terminal viewer until dismissed, so these
//! tests only cover the paths that exit before the alternate screen is
//! entered.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn missing_file_fails_before_the_viewer_starts() {
    let mut cmd = Command::cargo_bin("evoplot").unwrap();
    cmd.arg("definitely/not/here.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Path not found"))
        .stderr(predicate::str::contains("definitely/not/here.txt"));
}

#[test]
fn parse_failure_names_the_offending_token() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "1.0").unwrap();
    writeln!(file, "abc").unwrap();

    let mut cmd = Command::cargo_bin("evoplot").unwrap();
    cmd.arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("'abc'"));
}

#[test]
fn ragged_file_reports_the_column_mismatch() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "1.0 2.0").unwrap();
    writeln!(file, "3.0").unwrap();

    let mut cmd = Command::cargo_bin("evoplot").unwrap();
    cmd.arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected 2 columns, found 1"));
}

#[test]
fn help_lists_the_original_defaults() {
    let mut cmd = Command::cargo_bin("evoplot").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("pop10_gen500.txt"))
        .stdout(predicate::str::contains("25"));
}
