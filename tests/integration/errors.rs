// tests/integration/errors.rs
use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::{FRUIT_A, Fixture};

fn comm() -> Command {
    Command::new(env!("CARGO_BIN_EXE_comm"))
}

#[test]
fn no_operands() {
    comm()
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("comm: missing operand"));
}

#[test]
fn one_operand() {
    comm()
        .arg("only.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing operand after the first file"));
}

#[test]
fn three_operands() {
    comm()
        .args(["a", "b", "c"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("extra operand"));
}

#[test]
fn missing_file_names_the_operand() {
    let fx = Fixture::new();
    let a = fx.write_lines("a.txt", FRUIT_A);
    let missing = fx.missing("nope.txt");

    comm()
        .args([&a, &missing])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with(format!("comm: {missing}: ")));
}

#[test]
fn check_order_rejects_unsorted_input() {
    let fx = Fixture::new();
    let a = fx.write_lines("a.txt", &["a", "c", "b"]);
    let b = fx.write_lines("b.txt", &["a"]);

    comm()
        .args(["--check-order", "--total", a.as_str(), b.as_str()])
        .assert()
        .failure()
        .stdout("\t\ta\nc\n")
        .stderr(predicate::str::contains("file 1 is not in sorted order"));
}

#[test]
fn nocheck_order_overrides_check_order() {
    let fx = Fixture::new();
    let a = fx.write_lines("a.txt", &["b", "a"]);
    let b = fx.write_lines("b.txt", &[]);

    comm().args(["--check-order", "--nocheck-order", a.as_str(), b.as_str()]).assert().success().stdout("b\na\n");
}

#[test]
fn zero_timeout_is_rejected() {
    comm()
        .args(["--timeout", "0", "a", "b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be at least 1"));
}
