use super::*;

fn hidden(len: usize) -> RevealSet {
    RevealSet::from_flags(vec![false; len])
}

#[test]
fn first_positive_ratio_shows_target() {
    let mut set = hidden(2);
    assert!(set.observe(1, 0.1));
    assert!(!set.observe(1, 0.1));
    assert!(set.observe(0, 0.1));
}

#[test]
fn zero_ratio_does_not_show() {
    let mut set = hidden(1);
    assert!(!set.observe(0, 0.0));
    assert!(set.observe(0, 0.3));
}

#[test]
fn shown_targets_never_revert() {
    let mut set = hidden(1);
    assert!(set.observe(0, 0.5));
    for ratio in [0.0, 0.25, 0.0, 1.0, f64::NAN] {
        assert!(!set.observe(0, ratio), "ratio {ratio} should be a no-op");
    }
    assert_eq!(set, RevealSet::from_flags(vec![true]));
}

#[test]
fn out_of_range_index_is_ignored() {
    let mut set = hidden(1);
    assert!(!set.observe(5, 1.0));
    assert_eq!(set, hidden(1));
}

#[test]
fn seeded_flags_are_preserved() {
    let mut set = RevealSet::from_flags(vec![true, false]);
    assert!(!set.observe(0, 1.0));
    assert!(set.observe(1, 1.0));
    assert_eq!(set, RevealSet::from_flags(vec![true, true]));
}
