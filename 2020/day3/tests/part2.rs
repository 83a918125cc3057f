use assert_cmd::Command;
use predicates::prelude::*;

const SAMPLE: &str = "..##.......
#...#...#..
.#....#..#.
..#.#...#.#
.#...##..#.
..#.##.....
.#.#.#....#
.#........#
#.##...#...
#...##....#
.#..#...#.#
";

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("day3_part2").unwrap();
    cmd.write_stdin(SAMPLE);
    cmd.assert().success().stdout(predicate::str::contains(
        "are [2, 7, 3, 4, 2], and their product is 336.",
    ));
}
