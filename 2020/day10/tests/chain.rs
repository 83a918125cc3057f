#[test]
fn chain_adds_outlet_and_device() {
    let chain = day10::chain(vec![3, 1, 2]).unwrap();
    assert_eq!(*chain, vec![0, 1, 2, 3, 6]);
    assert!(matches!(day10::chain(Vec::new()), Err(day10::Error::NoAdapter)));
}

#[test]
fn gap_too_wide_has_no_arrangement() {
    let chain = day10::chain(vec![1, 5]).unwrap();
    assert_eq!(day10::arrangements(&chain), 0);
    assert_eq!(day10::differentials(&chain).get(&4), Some(&1));
}

#[test]
fn arrangements_of_small_chain() {
    // 0 1 2 3 6: {1,2,3}, {1,3}, {2,3}, {3}
    let chain = day10::chain(vec![1, 2, 3]).unwrap();
    assert_eq!(day10::arrangements(&chain), 4);
}
