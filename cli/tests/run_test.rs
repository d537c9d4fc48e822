//! Integration tests for the `run` and `types` commands.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn arrayc() -> Command {
    Command::new(env!("CARGO_BIN_EXE_arrayc"))
}

/// Create a temporary script file with the given content.
fn temp_script(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".ops")
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn run_script_file() {
    let file = temp_script("set 0 9;\nsort;\nfind 9\n");
    arrayc()
        .args(["run", "--values", "3, 1, 2"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("2\n[1, 2, 9]\n");
}

#[test]
fn run_script_from_stdin() {
    arrayc()
        .args(["run", "--values", "true, false", "-"])
        .write_stdin("count true; reverse")
        .assert()
        .success()
        .stdout("1\n[false, true]\n");
}

#[test]
fn run_error_names_the_file() {
    let file = temp_script("len;\nget 7\n");
    let path = file.path().to_string_lossy().into_owned();
    arrayc()
        .args(["--no-color", "run", "--values", "1"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains(format!("{path}:2:1")));
}

#[test]
fn run_missing_file() {
    arrayc()
        .args(["run", "/nonexistent/script.ops"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("/nonexistent/script.ops"));
}

#[test]
fn types_lists_native_names() {
    arrayc()
        .arg("types")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("c_longlong")
                .and(predicate::str::contains("c_void_p"))
                .and(predicate::str::contains("Vec<u8>"))
                .and(predicate::str::contains("numeric,ordered")),
        );
}
