use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::error::{ChunkSizeError, EmptyError};

pub fn filter<T: Clone>(items: &[T], mut predicate: impl FnMut(&T, usize) -> bool) -> Vec<T> {
    items
        .iter()
        .enumerate()
        .filter(|(i, item)| predicate(item, *i))
        .map(|(_, item)| item.clone())
        .collect()
}

/// Opposite of [`filter`].
pub fn reject<T: Clone>(items: &[T], mut predicate: impl FnMut(&T, usize) -> bool) -> Vec<T> {
    filter(items, |item, i| !predicate(item, i))
}

pub fn map<T, U>(items: &[T], mut f: impl FnMut(&T, usize) -> U) -> Vec<U> {
    items.iter().enumerate().map(|(i, item)| f(item, i)).collect()
}

pub fn filter_map<T, U>(items: &[T], mut f: impl FnMut(&T, usize) -> Option<U>) -> Vec<U> {
    items
        .iter()
        .enumerate()
        .filter_map(|(i, item)| f(item, i))
        .collect()
}

pub fn flat_map<T, U>(items: &[T], mut f: impl FnMut(&T, usize) -> Vec<U>) -> Vec<U> {
    items
        .iter()
        .enumerate()
        .flat_map(|(i, item)| f(item, i))
        .collect()
}

pub fn reduce<T, A>(items: &[T], mut f: impl FnMut(A, &T, usize) -> A, initial: A) -> A {
    items
        .iter()
        .enumerate()
        .fold(initial, |acc, (i, item)| f(acc, item, i))
}

pub fn for_each_indexed<T>(items: &[T], mut f: impl FnMut(&T, usize)) {
    for (i, item) in items.iter().enumerate() {
        f(item, i);
    }
}

/// `[f(0), f(1), .., f(count - 1)]`
pub fn times<U>(count: usize, f: impl FnMut(usize) -> U) -> Vec<U> {
    (0..count).map(f).collect()
}

/// Deduplicate, keeping first occurrences in order.
pub fn uniq<T: Clone + Eq + Hash>(items: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

pub fn uniq_by<T: Clone, K: Eq + Hash>(items: &[T], mut key: impl FnMut(&T) -> K) -> Vec<T> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(key(item)))
        .cloned()
        .collect()
}

pub fn group_by<T: Clone, K: Eq + Hash>(
    items: &[T],
    mut key: impl FnMut(&T) -> K,
) -> HashMap<K, Vec<T>> {
    let mut groups: HashMap<K, Vec<T>> = HashMap::new();
    for item in items {
        groups.entry(key(item)).or_default().push(item.clone());
    }
    groups
}

/// Split into groups of `size`; the last group may be shorter.
pub fn chunk<T: Clone>(items: &[T], size: usize) -> Result<Vec<Vec<T>>, ChunkSizeError> {
    if size == 0 {
        return Err(ChunkSizeError);
    }
    Ok(items.chunks(size).map(<[T]>::to_vec).collect())
}

/// Like [`group_by`] but returns the groups in order of each key's first appearance.
pub fn partition_by<T: Clone, K: Eq + Hash>(
    items: &[T],
    mut key: impl FnMut(&T) -> K,
) -> Vec<Vec<T>> {
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<Vec<T>> = Vec::new();
    for item in items {
        let slot = *positions.entry(key(item)).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(item.clone());
    }
    groups
}

pub fn flatten<T: Clone>(groups: &[Vec<T>]) -> Vec<T> {
    groups.iter().flatten().cloned().collect()
}

pub fn reverse<T>(items: &mut [T]) {
    items.reverse();
}

pub fn fill<T: Clone>(items: &mut [T], value: T) {
    items.fill(value);
}

pub fn repeat<T: Clone>(count: usize, value: &T) -> Vec<T> {
    vec![value.clone(); count]
}

pub fn repeat_by<T>(count: usize, f: impl FnMut(usize) -> T) -> Vec<T> {
    times(count, f)
}

/// Later items overwrite earlier ones with the same key.
pub fn key_by<T: Clone, K: Eq + Hash>(items: &[T], mut key: impl FnMut(&T) -> K) -> HashMap<K, T> {
    items.iter().map(|item| (key(item), item.clone())).collect()
}

pub fn associate<T, K: Eq + Hash, V>(items: &[T], f: impl FnMut(&T) -> (K, V)) -> HashMap<K, V> {
    items.iter().map(f).collect()
}

pub fn drop_left<T: Clone>(items: &[T], n: usize) -> Vec<T> {
    items.get(n..).map(<[T]>::to_vec).unwrap_or_default()
}

pub fn drop_right<T: Clone>(items: &[T], n: usize) -> Vec<T> {
    items[..items.len().saturating_sub(n)].to_vec()
}

pub fn drop_while<T: Clone>(items: &[T], mut predicate: impl FnMut(&T) -> bool) -> Vec<T> {
    items
        .iter()
        .skip_while(|item| predicate(item))
        .cloned()
        .collect()
}

pub fn drop_right_while<T: Clone>(items: &[T], mut predicate: impl FnMut(&T) -> bool) -> Vec<T> {
    let keep = items
        .iter()
        .rposition(|item| !predicate(item))
        .map_or(0, |i| i + 1);
    items[..keep].to_vec()
}

/// Remove default ("zero") values.
pub fn compact<T: Clone + Default + PartialEq>(items: &[T]) -> Vec<T> {
    let zero = T::default();
    items.iter().filter(|item| **item != zero).cloned().collect()
}

pub fn count<T: PartialEq>(items: &[T], value: &T) -> usize {
    items.iter().filter(|item| *item == value).count()
}

pub fn count_by<T>(items: &[T], mut predicate: impl FnMut(&T) -> bool) -> usize {
    items.iter().filter(|item| predicate(item)).count()
}

pub fn count_values<T: Clone + Eq + Hash>(items: &[T]) -> HashMap<T, usize> {
    let mut counts = HashMap::new();
    for item in items {
        *counts.entry(item.clone()).or_insert(0) += 1;
    }
    counts
}

pub fn is_sorted<T: PartialOrd>(items: &[T]) -> bool {
    items.windows(2).all(|w| w[0] <= w[1])
}

pub fn is_sorted_by_key<T, K: PartialOrd>(items: &[T], mut key: impl FnMut(&T) -> K) -> bool {
    items.windows(2).all(|w| key(&w[0]) <= key(&w[1]))
}

/// Replace the first `n` occurrences of `old`.
pub fn replace<T: Clone + PartialEq>(items: &[T], old: &T, new: &T, n: usize) -> Vec<T> {
    let mut left = n;
    items
        .iter()
        .map(|item| {
            if left > 0 && item == old {
                left -= 1;
                new.clone()
            } else {
                item.clone()
            }
        })
        .collect()
}

pub fn replace_all<T: Clone + PartialEq>(items: &[T], old: &T, new: &T) -> Vec<T> {
    replace(items, old, new, usize::MAX)
}

/// `items[start..end]` with both bounds clamped; never panics.
pub fn slice_range<T: Clone>(items: &[T], start: usize, end: usize) -> Vec<T> {
    let end = end.min(items.len());
    let start = start.min(end);
    items[start..end].to_vec()
}

pub fn index_of<T: PartialEq>(items: &[T], value: &T) -> Option<usize> {
    items.iter().position(|item| item == value)
}

pub fn last_index_of<T: PartialEq>(items: &[T], value: &T) -> Option<usize> {
    items.iter().rposition(|item| item == value)
}

pub fn find<T>(items: &[T], mut predicate: impl FnMut(&T) -> bool) -> Option<&T> {
    items.iter().find(|item| predicate(item))
}

pub fn find_index<T>(items: &[T], mut predicate: impl FnMut(&T) -> bool) -> Option<usize> {
    items.iter().position(|item| predicate(item))
}

pub fn find_last_index<T>(items: &[T], mut predicate: impl FnMut(&T) -> bool) -> Option<usize> {
    items.iter().rposition(|item| predicate(item))
}

pub fn find_or_else<T: Clone>(items: &[T], fallback: T, predicate: impl FnMut(&T) -> bool) -> T {
    find(items, predicate).cloned().unwrap_or(fallback)
}

/// Smallest element; the first one wins on ties.
pub fn min<T: PartialOrd + Clone>(items: &[T]) -> Result<T, EmptyError> {
    min_by(items, |a, b| a < b)
}

/// Largest element; the first one wins on ties.
pub fn max<T: PartialOrd + Clone>(items: &[T]) -> Result<T, EmptyError> {
    max_by(items, |a, b| a > b)
}

/// `less(a, b)` reports whether `a` should replace the current minimum `b`.
pub fn min_by<T: Clone>(items: &[T], mut less: impl FnMut(&T, &T) -> bool) -> Result<T, EmptyError> {
    let (first, rest) = items.split_first().ok_or(EmptyError)?;
    let mut best = first;
    for item in rest {
        if less(item, best) {
            best = item;
        }
    }
    Ok(best.clone())
}

pub fn max_by<T: Clone>(
    items: &[T],
    mut greater: impl FnMut(&T, &T) -> bool,
) -> Result<T, EmptyError> {
    min_by(items, |a, b| greater(a, b))
}

pub fn first<T: Clone>(items: &[T]) -> Result<T, EmptyError> {
    items.first().cloned().ok_or(EmptyError)
}

pub fn last<T: Clone>(items: &[T]) -> Result<T, EmptyError> {
    items.last().cloned().ok_or(EmptyError)
}

/// Element at `index`; negative indexes count back from the end.
pub fn nth<T>(items: &[T], index: isize) -> Option<&T> {
    let len = items.len() as isize;
    let i = if index < 0 { len + index } else { index };
    if (0..len).contains(&i) {
        items.get(i as usize)
    } else {
        None
    }
}
