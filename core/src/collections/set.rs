use std::collections::HashSet;
use std::hash::Hash;

pub fn contains<T: PartialEq>(items: &[T], value: &T) -> bool {
    items.contains(value)
}

pub fn contains_by<T>(items: &[T], mut predicate: impl FnMut(&T) -> bool) -> bool {
    items.iter().any(|item| predicate(item))
}

/// Every element of `subset` is present in `items`.
pub fn every<T: PartialEq>(items: &[T], subset: &[T]) -> bool {
    subset.iter().all(|v| items.contains(v))
}

/// At least one element of `subset` is present in `items`.
pub fn some<T: PartialEq>(items: &[T], subset: &[T]) -> bool {
    subset.iter().any(|v| items.contains(v))
}

/// No element of `subset` is present in `items`.
pub fn none<T: PartialEq>(items: &[T], subset: &[T]) -> bool {
    !some(items, subset)
}

pub fn is_subset<T: Eq + Hash>(subset: &[T], items: &[T]) -> bool {
    let set: HashSet<&T> = items.iter().collect();
    subset.iter().all(|v| set.contains(v))
}

/// Elements of `left` also found in `right`, in `left` order, deduplicated.
pub fn intersect<T: Clone + Eq + Hash>(left: &[T], right: &[T]) -> Vec<T> {
    let right: HashSet<&T> = right.iter().collect();
    let mut seen = HashSet::new();
    left.iter()
        .filter(|v| right.contains(v) && seen.insert(*v))
        .cloned()
        .collect()
}

/// `(in left only, in right only)`, each keeping its input order.
pub fn difference<T: Clone + Eq + Hash>(left: &[T], right: &[T]) -> (Vec<T>, Vec<T>) {
    let left_set: HashSet<&T> = left.iter().collect();
    let right_set: HashSet<&T> = right.iter().collect();
    let left_only = left
        .iter()
        .filter(|v| !right_set.contains(v))
        .cloned()
        .collect();
    let right_only = right
        .iter()
        .filter(|v| !left_set.contains(v))
        .cloned()
        .collect();
    (left_only, right_only)
}

/// Distinct elements of all inputs in order of first appearance.
pub fn union<T: Clone + Eq + Hash>(lists: &[&[T]]) -> Vec<T> {
    let mut seen = HashSet::new();
    lists
        .iter()
        .flat_map(|list| list.iter())
        .filter(|v| seen.insert(*v))
        .cloned()
        .collect()
}

pub fn without<T: Clone + Eq + Hash>(items: &[T], exclude: &[T]) -> Vec<T> {
    let exclude: HashSet<&T> = exclude.iter().collect();
    items
        .iter()
        .filter(|v| !exclude.contains(v))
        .cloned()
        .collect()
}

pub fn without_empty<T: Clone + Default + PartialEq>(items: &[T]) -> Vec<T> {
    super::slice::compact(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn membership() {
        let xs = [1, 2, 3];
        assert!(contains(&xs, &2));
        assert!(!contains(&xs, &9));
        assert!(contains_by(&xs, |x| *x > 2));
        assert!(every(&xs, &[1, 3]));
        assert!(every(&xs, &[]));
        assert!(!every(&xs, &[1, 4]));
        assert!(some(&xs, &[4, 3]));
        assert!(!some(&xs, &[]));
        assert!(none(&xs, &[7, 8]));
        assert!(is_subset(&[3, 1], &xs));
        assert!(!is_subset(&[3, 5], &xs));
    }

    #[test]
    fn intersect_dedups_in_left_order() {
        assert_eq!(intersect(&[3, 1, 2, 3], &[3, 2, 9]), vec![3, 2]);
        assert!(intersect(&[1], &[2]).is_empty());
    }

    #[test]
    fn difference_both_sides() {
        let (l, r) = difference(&[1, 2, 3, 4], &[0, 2, 4, 6]);
        assert_eq!(l, vec![1, 3]);
        assert_eq!(r, vec![0, 6]);
    }

    #[test]
    fn union_first_appearance() {
        let a = [1, 2];
        let b = [2, 3, 1, 4];
        assert_eq!(union(&[&a[..], &b[..]]), vec![1, 2, 3, 4]);
        assert!(union::<i32>(&[]).is_empty());
    }

    #[test]
    fn without_values() {
        assert_eq!(without(&[1, 2, 3, 2], &[2]), vec![1, 3]);
        assert_eq!(without_empty(&[0, 1, 0, 2]), vec![1, 2]);
    }
}
