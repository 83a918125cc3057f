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
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("day8_part2").unwrap();
    cmd.write_stdin(SAMPLE);

    cmd.assert().success().stdout(predicate::str::contains(
        "Exchanged jmp -4(at line #8) to nop -4, code run through to end without loop, and the final accumulator value is 8.",
    ));
}

#[test]
fn part2_reports_unfixable_code() {
    // Every single exchange on the loop still ends up in a loop.
    let mut cmd = Command::cargo_bin("day8_part2").unwrap();
    cmd.write_stdin("jmp +2\njmp +1\njmp -1\njmp -3\n");

    cmd.assert().success().stdout(
        predicate::str::contains("There's no exchange")
            .and(predicate::str::contains("infinite loop at line #3(jmp -1), the accumulator is 0.")),
    );
}

#[test]
fn part2_leaves_terminating_code_alone() {
    let mut cmd = Command::cargo_bin("day8_part2").unwrap();
    cmd.write_stdin("acc +7\nnop -1\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("needs no repair"))
        .stdout(predicate::str::contains("the accumulator is 7."));
}
