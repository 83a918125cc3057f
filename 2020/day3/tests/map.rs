use day3::Slope;

#[test]
fn map_wraps_to_the_right() {
    let map = day3::read_map(".#\n#.\n".as_bytes()).unwrap();
    assert_eq!(map.row_n(), 2);
    assert_eq!(map.count_trees(&Slope::new(1, 1)), 0);
    // Column 2 wraps around to column 0.
    assert_eq!(map.count_trees(&Slope::new(2, 1)), 1);
    assert_eq!(map.count_trees(&Slope::new(1, 0)), 0);
}

#[test]
fn invalid_tile_is_error() {
    assert!(matches!(
        day3::read_map("..\n.o\n".as_bytes()),
        Err(day3::Error::InvalidTileCharacter('o'))
    ));
}
