//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;

fn write_sample(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("input.csv");
    std::fs::write(&path, "id,name,score\n1,ada,3.5\n2,grace,\n").unwrap();
    path
}

#[test]
fn info_prints_shape_and_columns() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_sample(dir.path());

    Command::cargo_bin("tabio")
        .unwrap()
        .args(["info"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 rows x 3 columns"))
        .stdout(predicate::str::contains("score (float)"))
        .stdout(predicate::str::contains("ada"));
}

#[test]
fn info_json_summary() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_sample(dir.path());

    Command::cargo_bin("tabio")
        .unwrap()
        .args(["info", "--json"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"rows\": 2"))
        .stdout(predicate::str::contains("\"name\": \"score\""));
}

#[test]
fn convert_writes_explicit_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_sample(dir.path());
    let output = dir.path().join("copy.csv");

    Command::cargo_bin("tabio")
        .unwrap()
        .arg("convert")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let contents = std::fs::read_to_string(&output).unwrap();
    assert_eq!(contents, "id,name,score\n1,ada,3.5\n2,grace,\n");
}

#[test]
fn convert_defaults_to_final_dataset_csv() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_sample(dir.path());

    Command::cargo_bin("tabio")
        .unwrap()
        .current_dir(dir.path())
        .arg("convert")
        .arg(&input)
        .assert()
        .success();

    assert!(dir.path().join("final_dataset.csv").exists());
}

#[test]
fn convert_missing_input_fails() {
    Command::cargo_bin("tabio")
        .unwrap()
        .args(["convert", "/nonexistent/path.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load dataset"));
}
