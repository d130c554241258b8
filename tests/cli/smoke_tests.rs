use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::file_with;

fn county() -> Command {
    Command::new(env!("CARGO_BIN_EXE_county"))
}

#[test]
fn shows_help() {
    county()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("county"));
}

#[test]
fn counts_file_with_explicit_workers() {
    let tmp = file_with(b"a\nb\nc\n");
    county()
        .arg(tmp.path())
        .args(["2", "4K"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total lines: 3"))
        .stdout(predicate::str::contains("Total workers: 2"));
}

#[test]
fn json_output() {
    let tmp = file_with(b"a\nb\n");
    let output = county()
        .arg(tmp.path())
        .args(["1", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["total_lines"], 2);
    assert_eq!(value["workers"], 1);
}

#[test]
fn missing_argument_exits_with_one() {
    county()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn non_existent_file_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();
    county()
        .arg(dir.path().join("absent.txt"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("does not exist"))
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn invalid_worker_count_exits_with_one() {
    let tmp = file_with(b"x\n");
    for bad in ["0", "-3", "many"] {
        county().arg(tmp.path()).arg(bad).assert().code(1);
    }
}

#[test]
fn invalid_chunk_size_exits_with_one() {
    let tmp = file_with(b"x\n");
    county().arg(tmp.path()).args(["2", "0"]).assert().code(1);
}
