use assert_cmd::Command;
use predicates::prelude::*;

const SAMPLE: &str = "light red bags contain 1 bright white bag, 2 muted yellow bags.
dark orange bags contain 3 bright white bags, 4 muted yellow bags.
bright white bags contain 1 shiny gold bag.
muted yellow bags contain 2 shiny gold bags, 9 faded blue bags.
shiny gold bags contain 1 dark olive bag, 2 vibrant plum bags.
dark olive bags contain 3 faded blue bags, 4 dotted black bags.
vibrant plum bags contain 5 faded blue bags, 6 dotted black bags.
faded blue bags contain no other bags.
dotted black bags contain no other bags.
";

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("day7_part1").unwrap();
    cmd.write_stdin(SAMPLE);
    cmd.assert().success().stdout(predicate::str::contains(
        "There are 4 kinds of bag can contain at least one specified shiny gold bag.",
    ));
}

#[test]
fn part1_reports_missing_bag() {
    let mut cmd = Command::cargo_bin("day7_part1").unwrap();
    cmd.write_stdin("faded blue bags contain no other bags.\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("There's no shiny gold bag"));
}

#[test]
fn part1_rejects_invalid_rule() {
    let mut cmd = Command::cargo_bin("day7_part1").unwrap();
    cmd.write_stdin("faded blue bags contain some bags.\n");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid bag rule"));
}
