// File: crates/demo/tests/cli.rs
// Purpose: Run the demo binary end to end against random and CSV input.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn renders_random_data() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("random.png");
    Command::cargo_bin("column-demo")
        .unwrap()
        .args(["--seed", "7", "--width", "320", "--height", "240", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));
    let bytes = fs::read(&out).unwrap();
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn renders_csv_data() {
    let dir = tempdir().unwrap();
    let csv = dir.path().join("sales.csv");
    fs::write(&csv, "Label,Value\nQ1,12.5\nQ2,30\nQ3,18\n").unwrap();
    let out = dir.path().join("sales.png");
    Command::cargo_bin("column-demo")
        .unwrap()
        .arg("--csv")
        .arg(&csv)
        .arg("--out")
        .arg(&out)
        .assert()
        .success();
    assert!(out.exists());
}

#[test]
fn rejects_negative_csv_values() {
    let dir = tempdir().unwrap();
    let csv = dir.path().join("bad.csv");
    fs::write(&csv, "label,value\na,1\nb,-2\n").unwrap();
    Command::cargo_bin("column-demo")
        .unwrap()
        .arg("--csv")
        .arg(&csv)
        .arg("--out")
        .arg(dir.path().join("bad.png"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("negative"));
}

#[test]
fn rejects_bad_color() {
    Command::cargo_bin("column-demo")
        .unwrap()
        .args(["--bar-color", "blue", "--out", "target/test_out/never.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid color"));
}

#[test]
fn headerless_csv_keeps_first_row() {
    let dir = tempdir().unwrap();
    let csv = dir.path().join("plain.csv");
    fs::write(&csv, "a,1\nb,2\n").unwrap();
    Command::cargo_bin("column-demo")
        .unwrap()
        .env("RUST_LOG", "info")
        .arg("--csv")
        .arg(&csv)
        .arg("--out")
        .arg(dir.path().join("plain.png"))
        .assert()
        .success()
        .stderr(predicate::str::contains("Loaded 2 categories"));
}

#[test]
fn rejects_non_positive_density() {
    for density in ["0", "NaN", "-1"] {
        Command::cargo_bin("column-demo")
            .unwrap()
            .arg(format!("--density={density}"))
            .args(["--out", "target/test_out/never.png"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid density"));
    }
}
