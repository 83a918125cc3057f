use assert_cmd::Command;
use predicates::prelude::*;

const SAMPLE: &str = "nop +0
acc +1
jmp +4
acc +3
jmp -3
acc -99
acc +1
jmp -4
acc +6
";

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("day8_part1").unwrap();
    cmd.write_stdin(SAMPLE);

    cmd.assert().success().stdout(predicate::str::contains(
        "FAIL, infinite loop at line #2(acc +1), the accumulator is 5.",
    ));
}

#[test]
fn part1_reports_success_for_terminating_code() {
    let mut cmd = Command::cargo_bin("day8_part1").unwrap();
    cmd.write_stdin("acc +2\njmp +2\nacc +100\nacc -1\n");

    cmd.assert().success().stdout(predicate::str::contains(
        "SUCCESS, code run through to end, the accumulator is 1.",
    ));
}

#[test]
fn part1_rejects_invalid_code() {
    let mut cmd = Command::cargo_bin("day8_part1").unwrap();
    cmd.write_stdin("nop +0\nhcf +1\nacc 3\n");

    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("instruction #2(hcf +1)"))
        .stderr(predicate::str::contains("instruction #3(acc 3)"));
}
