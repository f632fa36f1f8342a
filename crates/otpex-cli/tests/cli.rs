//! End-to-end tests for the otpex binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn extract_reports_the_code() {
    Command::cargo_bin("otpex")
        .unwrap()
        .args(["extract", "Your verification code is 482913, please confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("482913"));
}

#[test]
fn extract_json_output_is_parseable() {
    let output = Command::cargo_bin("otpex")
        .unwrap()
        .args(["extract", "--format", "json", "code 482913 sent"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["otp"], "482913");
    assert_eq!(value["method"], "pattern");
}

#[test]
fn extract_reports_no_candidate() {
    Command::cargo_bin("otpex")
        .unwrap()
        .args(["extract", "no numbers in this message"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No OTP candidate"));
}

#[test]
fn batch_processes_a_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "Your OTP is 739482, valid for 10 minutes.").unwrap();
    writeln!(file, "nothing to see here").unwrap();

    Command::cargo_bin("otpex")
        .unwrap()
        .args(["batch", "--format", "csv"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("739482"))
        .stdout(predicate::str::contains("1 of 2 messages"));
}
