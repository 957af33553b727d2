use crate::error::EmptyError;

use super::source::{RandomSource, ThreadSource};

/// Draws the elements of a slice in random order, each exactly once.
///
/// The slice is only borrowed. Bookkeeping lives in an index arena: the first
/// `live` slots hold the indexes not drawn yet, and a draw swaps the chosen
/// slot with the last live one before shrinking `live`.
#[derive(Debug, Clone)]
pub struct Picker<'a, T, R = ThreadSource> {
    items: &'a [T],
    slots: Vec<usize>,
    live: usize,
    source: R,
}

impl<'a, T> Picker<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Self::with_source(items, ThreadSource)
    }
}

impl<'a, T, R: RandomSource> Picker<'a, T, R> {
    pub fn with_source(items: &'a [T], source: R) -> Self {
        Self {
            items,
            slots: (0..items.len()).collect(),
            live: items.len(),
            source,
        }
    }

    pub fn has_next(&self) -> bool {
        self.live > 0
    }

    pub fn remaining(&self) -> usize {
        self.live
    }
}

impl<'a, T, R: RandomSource> Iterator for Picker<'a, T, R> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.live == 0 {
            return None;
        }
        let pick = self.source.intn(self.live).min(self.live - 1);
        let index = self.slots[pick];
        self.live -= 1;
        self.slots.swap(pick, self.live);
        Some(&self.items[index])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.live, Some(self.live))
    }
}

impl<T, R: RandomSource> ExactSizeIterator for Picker<'_, T, R> {}

/// Copy of `items` in random order.
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    shuffle_with(items, ThreadSource)
}

pub fn shuffle_with<T: Clone, R: RandomSource>(items: &[T], source: R) -> Vec<T> {
    Picker::with_source(items, source).cloned().collect()
}

/// One random element.
pub fn sample<T: Clone>(items: &[T]) -> Result<T, EmptyError> {
    sample_with(items, ThreadSource)
}

pub fn sample_with<T: Clone, R: RandomSource>(items: &[T], mut source: R) -> Result<T, EmptyError> {
    if items.is_empty() {
        return Err(EmptyError);
    }
    let index = source.intn(items.len()).min(items.len() - 1);
    Ok(items[index].clone())
}

/// Up to `count` distinct elements (by position), in draw order.
pub fn samples<T: Clone>(items: &[T], count: usize) -> Vec<T> {
    samples_with(items, count, ThreadSource)
}

pub fn samples_with<T: Clone, R: RandomSource>(items: &[T], count: usize, source: R) -> Vec<T> {
    Picker::with_source(items, source).take(count).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::RngSource;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn draws_every_element_once() {
        let items: Vec<u32> = (0..100).collect();
        let mut picker = Picker::new(&items);
        let mut seen = HashSet::new();
        for _ in 0..items.len() {
            assert!(picker.has_next());
            let v = picker.next().unwrap();
            assert!(seen.insert(*v), "drew {v} twice");
        }
        assert!(!picker.has_next());
        assert_eq!(picker.next(), None);
        assert_eq!(seen.len(), items.len());
    }

    #[test]
    fn empty_source_is_exhausted() {
        let items: Vec<String> = Vec::new();
        let mut picker = Picker::new(&items);
        assert!(!picker.has_next());
        assert_eq!(picker.next(), None);
    }

    #[test]
    fn swap_remove_order_with_scripted_source() {
        let items = ["a", "b", "c", "d"];
        let first: Vec<_> = Picker::with_source(&items, |_: usize| -> usize { 0 }).copied().collect();
        assert_eq!(first, vec!["a", "d", "c", "b"]);

        let last: Vec<_> = Picker::with_source(&items, |n: usize| n - 1).copied().collect();
        assert_eq!(last, vec!["d", "c", "b", "a"]);
    }

    #[test]
    fn caller_slice_is_untouched() {
        let items = vec![1, 2, 3, 4, 5];
        let drawn: Vec<_> = Picker::new(&items).copied().collect();
        assert_eq!(items, vec![1, 2, 3, 4, 5]);
        assert_eq!(drawn.len(), 5);
    }

    #[test]
    fn size_hint_tracks_remaining() {
        let items = [1, 2, 3];
        let mut picker = Picker::new(&items);
        assert_eq!(picker.len(), 3);
        picker.next();
        assert_eq!(picker.remaining(), 2);
        assert_eq!(picker.len(), 2);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let items: Vec<i32> = (0..50).collect();
        let mut shuffled = shuffle_with(&items, RngSource(StdRng::seed_from_u64(3)));
        assert_eq!(shuffled.len(), items.len());
        shuffled.sort();
        assert_eq!(shuffled, items);
    }

    #[test]
    fn sample_from_empty_fails() {
        let items: [u8; 0] = [];
        assert_eq!(sample(&items), Err(EmptyError));
        assert_eq!(sample(&[9]), Ok(9));
        assert_eq!(sample_with(&[1, 2, 3], |_: usize| -> usize { 2 }), Ok(3));
    }

    #[test]
    fn samples_are_distinct_and_capped() {
        let items = ["x", "y", "z"];
        let picked = samples(&items, 2);
        assert_eq!(picked.len(), 2);
        assert_ne!(picked[0], picked[1]);

        assert_eq!(samples(&items, 10).len(), 3);
        assert!(samples(&items, 0).is_empty());
    }
}
