use assert_cmd::Command;
use predicates::prelude::*;

const SAMPLE1: &str = "16\n10\n15\n5\n1\n11\n7\n19\n6\n12\n4\n";
const SAMPLE2: &str = "28\n33\n18\n42\n31\n14\n46\n20\n48\n47\n24\n23\n49\n45\n19\n38\n39\n11\n1\n32\n25\n35\n8\n17\n7\n9\n4\n2\n34\n10\n3\n";

#[test]
fn part2_output_right_answer() {
    for (sample, adapter_n, expect_n) in [(SAMPLE1, 11, 8), (SAMPLE2, 31, 19208)] {
        let mut cmd = Command::cargo_bin("day10_part2").unwrap();
        cmd.write_stdin(sample);
        cmd.assert().success().stdout(predicate::str::contains(format!(
            "(using given {} joltage adapters) are {}.",
            adapter_n, expect_n
        )));
    }
}
