//! End-to-end tests driving the `c5` binary itself.

use std::fs;
use std::process::Command;

use tempfile::tempdir;

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_c5")
}

#[test]
fn compresses_and_decompresses_a_file_round_trip() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("sample.txt");
    let contents = b"hello hello hello hello world world world world".repeat(4);
    fs::write(&input_path, &contents).unwrap();

    let status = Command::new(bin()).arg(&input_path).status().unwrap();
    assert!(status.success());

    let compressed_path = dir.path().join("sample.txt.c5");
    assert!(compressed_path.exists());
    fs::remove_file(&input_path).unwrap();

    let status = Command::new(bin()).arg(&compressed_path).status().unwrap();
    assert!(status.success());

    let restored = fs::read(&input_path).unwrap();
    assert_eq!(restored, contents);
}

#[test]
fn selftest_flag_reports_okay_for_a_valid_file() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("data.bin");
    fs::write(&input_path, b"abababababababababababababab").unwrap();

    let output = Command::new(bin()).arg("-t").arg(&input_path).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("OKAY"), "stdout was: {}", stdout);
}

#[test]
fn skips_directories_instead_of_failing() {
    let dir = tempdir().unwrap();

    let output = Command::new(bin()).arg(dir.path()).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Skipping"), "stdout was: {}", stdout);
}

#[test]
fn reports_failure_for_a_missing_file() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("does-not-exist.txt");

    let status = Command::new(bin()).arg(&missing).status().unwrap();
    assert!(!status.success());
}
