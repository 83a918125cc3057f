use assert_cmd::Command;
use predicates::prelude::*;

const SAMPLE: &str = "35\n20\n15\n25\n47\n40\n62\n55\n65\n95\n102\n117\n150\n182\n127\n219\n299\n277\n309\n576\n";

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("day9_part2").unwrap();
    cmd.args(["-p", "5"]).write_stdin(SAMPLE);
    cmd.assert().success().stdout(predicate::str::contains(
        "range summing to 127) is 62.",
    ));
}
