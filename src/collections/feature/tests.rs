#![cfg(test)]

use super::*;
use crate::collections::traits::Set;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Feature {
    Color,
    Unicode,
    Mouse,
    Bracketed,
}

use Feature::*;

#[test]
fn test_set_and_unset() {
    let mut set = FeatureSet::new();
    set.set(Mouse, true);
    set.set(Color, true);
    set.set(Color, true);

    assert_eq!(set.len(), 2, "Enabling a feature twice should store it once.");
    assert!(set.has(&Color));

    set.set(Color, false);
    set.unset(&Unicode);
    set.erase(&Mouse);
    assert!(set.is_empty(), "Unsetting should disable, and ignore absent features.");
}

#[test]
fn test_operators() {
    let mut set = FeatureSet::new();
    set += Unicode;
    set += Color;
    set += Unicode;
    assert_eq!(set.len(), 2);

    set -= Color;
    assert!(!set.contains(&Color));

    set ^= Mouse;
    assert!(
        !set.contains(&Mouse),
        "Xor-assigning an absent feature should not enable it."
    );
    set ^= Unicode;
    assert!(set.is_empty());
}

#[test]
fn test_iteration_is_sorted() {
    let set = FeatureSet::from([Bracketed, Color, Mouse, Color]);
    assert_eq!(
        set.iter().copied().collect::<Vec<_>>(),
        [Color, Mouse, Bracketed],
        "Features should iterate in Ord order, without duplicates."
    );
}

#[test]
fn test_equality_and_assign() {
    let mut a = FeatureSet::from([Color, Unicode]);
    let b = FeatureSet::from([Unicode, Color]);
    assert_eq!(a, b);

    a.assign([Mouse]);
    assert_ne!(a, b);
    assert_eq!(a, FeatureSet::from([Mouse]));

    a.clear();
    assert_eq!(a, FeatureSet::default());
}

#[test]
fn test_set_algebra() {
    let a = FeatureSet::from([Color, Unicode, Mouse]);
    let b = FeatureSet::from([Mouse, Bracketed]);

    assert_eq!(a.difference(&b).copied().collect::<Vec<_>>(), [Color, Unicode]);
    assert_eq!(a.intersection(&b).copied().collect::<Vec<_>>(), [Mouse]);
    assert_eq!(
        a.symmetric_difference(&b).copied().collect::<Vec<_>>(),
        [Color, Unicode, Bracketed]
    );
    assert_eq!(
        a.union(&b).copied().collect::<Vec<_>>(),
        [Color, Unicode, Mouse, Bracketed]
    );
    assert!(!a.is_disjoint(&b));
    assert!(FeatureSet::from([Mouse]).is_subset(&a));
    assert!(a.is_superset(&FeatureSet::from([Color, Mouse])));

    assert_eq!(
        a.clone().into_intersection(b.clone()).collect::<Vec<_>>(),
        [Mouse]
    );
    assert_eq!(a.into_difference(b).collect::<Vec<_>>(), [Color, Unicode]);
}

#[test]
fn test_display() {
    let set = FeatureSet::from([3, 1, 2]);
    assert_eq!(set.to_string(), "#{1, 2, 3}");
}

const fn summary(set: &FeatureSet<Feature>) -> (usize, bool) {
    (set.len(), set.is_empty())
}

#[test]
fn test_len_is_const() {
    assert_eq!(summary(&FeatureSet::new()), (0, true));
    assert_eq!(summary(&FeatureSet::from([Color, Mouse])), (2, false));
}
