// tests/integration/end_to_end.rs
use assert_cmd::Command;

use crate::common::{FRUIT_A, FRUIT_B, Fixture};

fn comm() -> Command {
    Command::new(env!("CARGO_BIN_EXE_comm"))
}

fn fruit() -> (Fixture, String, String) {
    let fx = Fixture::new();
    let a = fx.write_lines("a.txt", FRUIT_A);
    let b = fx.write_lines("b.txt", FRUIT_B);
    (fx, a, b)
}

#[test]
fn three_columns_by_default() {
    let (_fx, a, b) = fruit();
    comm().args([&a, &b]).assert().success().stdout("apple\n\t\tbanana\n\t\tcherry\n\tdate\n");
}

#[test]
fn suppressing_column_one_shifts_remaining_columns() {
    let (_fx, a, b) = fruit();
    comm().args(["-1", a.as_str(), b.as_str()]).assert().success().stdout("\tbanana\n\tcherry\ndate\n");
}

#[test]
fn combined_flags_select_common_lines() {
    let (_fx, a, b) = fruit();
    comm().args(["-12", a.as_str(), b.as_str()]).assert().success().stdout("banana\ncherry\n");
}

#[test]
fn unique_lines_only() {
    let (_fx, a, b) = fruit();
    comm().args(["-3", a.as_str(), b.as_str()]).assert().success().stdout("apple\n\tdate\n");
}

#[test]
fn total_counts_suppressed_columns_too() {
    let (_fx, a, b) = fruit();
    comm().args(["-123", "--total", a.as_str(), b.as_str()]).assert().success().stdout("1\t1\t2\ttotal\n");
}

#[test]
fn empty_files_with_total() {
    let fx = Fixture::new();
    let a = fx.write_lines("a.txt", &[]);
    let b = fx.write_lines("b.txt", &[]);
    comm().args(["--total", a.as_str(), b.as_str()]).assert().success().stdout("0\t0\t0\ttotal\n");
}

#[test]
fn one_empty_side_lists_the_other() {
    let fx = Fixture::new();
    let a = fx.write_lines("a.txt", &[]);
    let b = fx.write_lines("b.txt", &["x", "y"]);
    comm().args([&a, &b]).assert().success().stdout("\tx\n\ty\n");
    comm().args([&b, &a]).assert().success().stdout("x\ny\n");
}

#[test]
fn dash_reads_standard_input() {
    let (_fx, _a, b) = fruit();
    comm()
        .args(["-", b.as_str()])
        .write_stdin("apple\nbanana\ncherry\n")
        .assert()
        .success()
        .stdout("apple\n\t\tbanana\n\t\tcherry\n\tdate\n");
}

#[test]
fn crlf_and_missing_final_newline_are_normalised() {
    let fx = Fixture::new();
    let a = fx.write_file("a.txt", "apple\r\nbanana").to_string_lossy().into_owned();
    let b = fx.write_file("b.txt", "banana\n").to_string_lossy().into_owned();
    comm().args([&a, &b]).assert().success().stdout("apple\n\t\tbanana\n");
}

#[test]
fn duplicates_pair_off() {
    let fx = Fixture::new();
    let a = fx.write_lines("a.txt", &["x", "x", "x"]);
    let b = fx.write_lines("b.txt", &["x"]);
    comm().args([&a, &b]).assert().success().stdout("\t\tx\nx\nx\n");
}

#[test]
fn unsorted_input_passes_without_check_order() {
    let fx = Fixture::new();
    let a = fx.write_lines("a.txt", &["b", "a"]);
    let b = fx.write_lines("b.txt", &["c"]);
    comm().args(["--total", a.as_str(), b.as_str()]).assert().success().stdout("b\na\n\tc\n2\t1\t0\ttotal\n");
}

#[test]
fn dash_for_both_operands_alternates_stdin_lines() {
    comm()
        .args(["-", "-"])
        .write_stdin("apple\nbanana\nbanana\ndate\n")
        .assert()
        .success()
        .stdout("apple\n\t\tbanana\ndate\n");
}

#[test]
fn timeout_beyond_the_clock_range_is_accepted() {
    let (_fx, a, b) = fruit();
    comm()
        .args(["--timeout", "18446744073709551615", a.as_str(), b.as_str()])
        .assert()
        .success()
        .stdout("apple\n\t\tbanana\n\t\tcherry\n\tdate\n");
}
