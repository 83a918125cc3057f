#[test]
fn parse_rules_with_long_qualifiers() {
    let rules = day7::read_br(
        "very light red bags contain 1 bright white bag, 12 pale muted yellow bags.\n\
         bright white bags contain no other bags.\n"
            .as_bytes(),
    )
    .unwrap();
    assert_eq!(rules.bag_kinds_n(), 3);
    assert_eq!(rules.container_kinds_n("bright white"), Some(1));
    assert_eq!(rules.container_kinds_n("very light red"), Some(0));
    assert_eq!(rules.contained_bags_n("very light red").unwrap().unwrap(), 13);
    assert!(rules.contained_bags_n("dull grey").is_none());
}

#[test]
fn repeated_rule_is_error() {
    let res = day7::read_br(
        "faded blue bags contain no other bags.\nfaded blue bags contain 1 red bag.\n".as_bytes(),
    );
    assert!(matches!(res, Err(day7::Error::RepeatedBagRule(s)) if s == "faded blue"));
}
