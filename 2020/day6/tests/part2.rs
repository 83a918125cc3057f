use assert_cmd::Command;
use predicates::prelude::*;

const SAMPLE: &str = "abc

a
b
c

ab
ac

a
a
a
a

b
";

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("day6_part2").unwrap();
    cmd.write_stdin(SAMPLE);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("in given 5 groups is 6."));
}
