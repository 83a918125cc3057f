use assert_cmd::Command;

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("day2_part2").unwrap();
    cmd.write_stdin("1-3 a: abcde\n1-3 b: cdefg\n2-9 c: ccccccccc\n");

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("There are 1 valid passwords in given 3 entries."));
}
