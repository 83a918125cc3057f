use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

const SAMPLE: &str = "1721\n979\n366\n299\n675\n1456\n";

#[test]
fn part1_output_right_answer() {
    let mut cmd = assert_cmd::Command::cargo_bin("day1_part1").unwrap();
    cmd.write_stdin(SAMPLE);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("the sum of [299, 1721] is 2020, their product is 514579."));
}

#[test]
fn part1_reads_input_file() {
    let path = std::env::temp_dir().join("day1_part1_sample.txt");
    std::fs::write(&path, SAMPLE).unwrap();

    let mut cmd = Command::cargo_bin("day1_part1").unwrap();
    cmd.arg(&path);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("514579"));
}

#[test]
fn part1_rejects_non_integer() {
    let mut cmd = assert_cmd::Command::cargo_bin("day1_part1").unwrap();
    cmd.write_stdin("1721\nabc\n");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid string(abc)"));
}
