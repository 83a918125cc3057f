use assert_cmd::Command;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("day2_part1").unwrap();
    cmd.write_stdin("1-3 a: abcde\n1-3 b: cdefg\n2-9 c: ccccccccc\n");

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("There are 2 valid passwords in given 3 entries."));
}

#[test]
fn part1_rejects_malformed_entry() {
    let mut cmd = Command::cargo_bin("day2_part1").unwrap();
    cmd.write_stdin("1-3 a: abcde\n1-3 cdefg\n");

    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("Invalid password: 1-3 cdefg"));
}
