#[test]
fn invalid_needs_two_distinct_positions() {
    // 10 is 5 + 5, but there's only one 5.
    assert_eq!(day9::find_invalid(&[5, 1, 2, 10], 3), Some(10));
    assert_eq!(day9::find_invalid(&[5, 5, 2, 10], 3), None);
    assert_eq!(day9::find_invalid(&[1, 2, 3], 0), None);
}

#[test]
fn weakness_range_has_two_numbers_at_least() {
    let nums = [7, 3, 4, 1, 6];
    assert_eq!(day9::find_weakness_range(&nums, 7), Some(&nums[1..3]));
    assert_eq!(day9::find_weakness(&nums, 7), Some(7));
    assert_eq!(day9::find_weakness_range(&nums, 100), None);
}

#[test]
fn huge_numbers_do_not_overflow() {
    assert_eq!(day9::find_invalid(&[u64::MAX, 1, 2], 2), Some(2));
    assert_eq!(day9::find_invalid(&[u64::MAX - 1, 1, u64::MAX], 2), None);

    let nums = [u64::MAX, u64::MAX, 3, 4, u64::MAX - 7];
    assert_eq!(day9::find_weakness_range(&nums, 7), Some(&nums[2..4]));
    assert_eq!(day9::find_weakness(&nums, 7), Some(7));
    assert_eq!(day9::find_weakness_range(&nums, u64::MAX), Some(&nums[2..5]));
    assert_eq!(day9::find_weakness_range(&[u64::MAX, 1], 5), None);
}
