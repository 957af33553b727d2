//! Key/value pairs and zipping helpers.

/// A key/value pair, as produced by [`crate::collections::map::entries`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Entry<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> Entry<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Entry<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self { key, value }
    }
}

/// Pair up elements; the shorter input is padded with `Default` values.
pub fn zip2<A: Clone + Default, B: Clone + Default>(a: &[A], b: &[B]) -> Vec<(A, B)> {
    zip_by2(a, b, |x, y| (x, y))
}

pub fn zip3<A, B, C>(a: &[A], b: &[B], c: &[C]) -> Vec<(A, B, C)>
where
    A: Clone + Default,
    B: Clone + Default,
    C: Clone + Default,
{
    let len = a.len().max(b.len()).max(c.len());
    (0..len)
        .map(|i| (at_or_default(a, i), at_or_default(b, i), at_or_default(c, i)))
        .collect()
}

/// [`zip2`] with a custom combiner.
pub fn zip_by2<A, B, R>(a: &[A], b: &[B], mut f: impl FnMut(A, B) -> R) -> Vec<R>
where
    A: Clone + Default,
    B: Clone + Default,
{
    let len = a.len().max(b.len());
    (0..len)
        .map(|i| f(at_or_default(a, i), at_or_default(b, i)))
        .collect()
}

pub fn unzip2<A: Clone, B: Clone>(pairs: &[(A, B)]) -> (Vec<A>, Vec<B>) {
    pairs.iter().cloned().unzip()
}

pub fn unzip3<A: Clone, B: Clone, C: Clone>(triples: &[(A, B, C)]) -> (Vec<A>, Vec<B>, Vec<C>) {
    let mut a = Vec::with_capacity(triples.len());
    let mut b = Vec::with_capacity(triples.len());
    let mut c = Vec::with_capacity(triples.len());
    for (x, y, z) in triples.iter().cloned() {
        a.push(x);
        b.push(y);
        c.push(z);
    }
    (a, b, c)
}

fn at_or_default<T: Clone + Default>(items: &[T], i: usize) -> T {
    items.get(i).cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn zip_pads_shorter_side() {
        assert_eq!(zip2(&[1, 2, 3], &["a"]), vec![(1, "a"), (2, ""), (3, "")]);
        assert_eq!(
            zip3(&[1], &[true, true], &['x']),
            vec![(1, true, 'x'), (0, true, '\0')]
        );
        assert!(zip2::<u8, u8>(&[], &[]).is_empty());
    }

    #[test]
    fn zip_by_combines() {
        assert_eq!(zip_by2(&[1, 2], &[10, 20, 30], |x, y| x + y), vec![11, 22, 30]);
    }

    #[test]
    fn unzip_splits() {
        let (a, b) = unzip2(&[(1, 'a'), (2, 'b')]);
        assert_eq!(a, vec![1, 2]);
        assert_eq!(b, vec!['a', 'b']);

        let (x, y, z) = unzip3(&[(1, "one", 1.0), (2, "two", 2.0)]);
        assert_eq!(x, vec![1, 2]);
        assert_eq!(y, vec!["one", "two"]);
        assert_eq!(z, vec![1.0, 2.0]);
    }

    #[test]
    fn entry_conversions() {
        let e: Entry<&str, i32> = ("k", 1).into();
        assert_eq!(e, Entry::new("k", 1));
        assert_eq!(e.into_pair(), ("k", 1));
    }
}
