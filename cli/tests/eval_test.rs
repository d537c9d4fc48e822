//! Integration tests for the `eval` command.

use assert_cmd::Command;
use predicates::prelude::*;

fn arrayc() -> Command {
    Command::new(env!("CARGO_BIN_EXE_arrayc"))
}

#[test]
fn eval_without_script_prints_array() {
    arrayc()
        .args(["eval", "--values", "1, 2, 3", "--length", "5"])
        .assert()
        .success()
        .stdout("[1, 2, 3, 0, 0]\n");
}

#[test]
fn eval_list_workflow() {
    arrayc()
        .args([
            "eval",
            "--values",
            "1, 2, 3",
            "--length",
            "5",
            "remove 3; expand 2; len; count 0",
        ])
        .assert()
        .success()
        .stdout("7\n5\n[1, 2, 0, 0, 0, 0, 0]\n");
}

#[test]
fn eval_named_type_converts_values() {
    arrayc()
        .args(["eval", "--type", "c_double", "--values", "1, 2", "repr"])
        .assert()
        .success()
        .stdout("arrayc(iterable=[1.0, 2.0], arrtype=c_double, length=2)\n[1.0, 2.0]\n");
}

#[test]
fn eval_text_sort() {
    arrayc()
        .args(["eval", "--values", r#""pear", "apple", "fig""#, "sort desc"])
        .assert()
        .success()
        .stdout("[\"pear\", \"fig\", \"apple\"]\n");
}

#[test]
fn eval_empty_array_defaults_to_pointers() {
    arrayc()
        .args(["eval", "--length", "2", "repr"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "arrayc(iterable=[null, null], arrtype=c_void_p, length=2)",
        ));
}

#[test]
fn eval_index_out_of_range() {
    arrayc()
        .args(["--no-color", "eval", "--values", "1, 2", "get 2"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "[E006] Error: index 2 out of range for length 2",
        ));
}

#[test]
fn eval_outputs_before_failure_are_printed() {
    arrayc()
        .args(["--no-color", "eval", "--values", "4", "get 0; pop 3"])
        .assert()
        .failure()
        .stdout("4\n")
        .stderr(predicate::str::contains("E006"));
}

#[test]
fn eval_fixed_array_cannot_expand() {
    arrayc()
        .args(["--no-color", "eval", "--fixed", "--values", "1", "expand 1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("fixed array is immutable"));
}

#[test]
fn eval_heterogeneous_values() {
    arrayc()
        .args(["--no-color", "eval", "--values", r#"1, "two""#])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("[E003]").and(predicate::str::contains("--values")),
        );
}

#[test]
fn eval_negative_length() {
    arrayc()
        .args(["--no-color", "eval", "--length", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("[E002]"));
}

#[test]
fn eval_unknown_type_name() {
    arrayc()
        .args(["--no-color", "eval", "--type", "c_short", "--values", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("[E004]"));
}

#[test]
fn eval_syntax_error() {
    arrayc()
        .args(["--no-color", "eval", "--values", "1", "len; shuffle"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown operation `shuffle`"));
}

#[test]
fn eval_update_length_guard() {
    arrayc()
        .args([
            "--no-color",
            "eval",
            "--values",
            "1, 2, 3",
            "--length",
            "5",
            "update 1, 2, 3, 4, 5, 6",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "length mismatch: array length is 5, input length is 6",
        ));
}

#[test]
fn eval_logs_parsed_script_at_debug() {
    arrayc()
        .env("RUST_LOG", "debug")
        .args(["eval", "--values", "1, 2", "len; show"])
        .assert()
        .success()
        .stdout("2\n[1, 2]\n[1, 2]\n")
        .stderr(predicate::str::contains("Parsed script").and(predicate::str::contains("ops=2")));
}

#[test]
fn eval_rejects_length_over_limit() {
    arrayc()
        .args(["eval", "--type", "int", "--length", "100000000"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("length exceeds the configured maximum"));
}
