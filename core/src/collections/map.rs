use std::collections::HashMap;
use std::hash::Hash;

use crate::tuple::Entry;

/// Keys in unspecified order; sort the result if order matters.
pub fn keys<K: Clone, V>(map: &HashMap<K, V>) -> Vec<K> {
    map.keys().cloned().collect()
}

pub fn values<K, V: Clone>(map: &HashMap<K, V>) -> Vec<V> {
    map.values().cloned().collect()
}

pub fn has_key<K: Eq + Hash, V>(map: &HashMap<K, V>, key: &K) -> bool {
    map.contains_key(key)
}

pub fn value_or<K: Eq + Hash, V: Clone>(map: &HashMap<K, V>, key: &K, fallback: V) -> V {
    map.get(key).cloned().unwrap_or(fallback)
}

pub fn pick_by<K: Clone + Eq + Hash, V: Clone>(
    map: &HashMap<K, V>,
    mut predicate: impl FnMut(&K, &V) -> bool,
) -> HashMap<K, V> {
    map.iter()
        .filter(|(k, v)| predicate(k, v))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

pub fn pick_by_keys<K: Clone + Eq + Hash, V: Clone>(map: &HashMap<K, V>, keys: &[K]) -> HashMap<K, V> {
    pick_by(map, |k, _| keys.contains(k))
}

pub fn pick_by_values<K: Clone + Eq + Hash, V: Clone + PartialEq>(
    map: &HashMap<K, V>,
    values: &[V],
) -> HashMap<K, V> {
    pick_by(map, |_, v| values.contains(v))
}

pub fn omit_by<K: Clone + Eq + Hash, V: Clone>(
    map: &HashMap<K, V>,
    mut predicate: impl FnMut(&K, &V) -> bool,
) -> HashMap<K, V> {
    pick_by(map, |k, v| !predicate(k, v))
}

pub fn omit_by_keys<K: Clone + Eq + Hash, V: Clone>(map: &HashMap<K, V>, keys: &[K]) -> HashMap<K, V> {
    omit_by(map, |k, _| keys.contains(k))
}

pub fn omit_by_values<K: Clone + Eq + Hash, V: Clone + PartialEq>(
    map: &HashMap<K, V>,
    values: &[V],
) -> HashMap<K, V> {
    omit_by(map, |_, v| values.contains(v))
}

pub fn entries<K: Clone, V: Clone>(map: &HashMap<K, V>) -> Vec<Entry<K, V>> {
    map.iter()
        .map(|(k, v)| Entry::new(k.clone(), v.clone()))
        .collect()
}

/// Later entries overwrite earlier ones with the same key.
pub fn from_entries<K: Eq + Hash, V>(entries: impl IntoIterator<Item = Entry<K, V>>) -> HashMap<K, V> {
    entries.into_iter().map(|e| (e.key, e.value)).collect()
}

/// Swap keys and values. With duplicate values, which key survives is unspecified.
pub fn invert<K: Clone, V: Clone + Eq + Hash>(map: &HashMap<K, V>) -> HashMap<V, K> {
    map.iter().map(|(k, v)| (v.clone(), k.clone())).collect()
}

/// Merge left to right; later maps win on conflicting keys.
pub fn assign<K: Clone + Eq + Hash, V: Clone>(maps: &[&HashMap<K, V>]) -> HashMap<K, V> {
    let mut out = HashMap::new();
    for map in maps {
        out.extend(map.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
    out
}

pub fn map_keys<K, V: Clone, R: Eq + Hash>(
    map: &HashMap<K, V>,
    mut f: impl FnMut(&K, &V) -> R,
) -> HashMap<R, V> {
    map.iter().map(|(k, v)| (f(k, v), v.clone())).collect()
}

pub fn map_values<K: Clone + Eq + Hash, V, R>(
    map: &HashMap<K, V>,
    mut f: impl FnMut(&K, &V) -> R,
) -> HashMap<K, R> {
    map.iter().map(|(k, v)| (k.clone(), f(k, v))).collect()
}

pub fn map_to_vec<K, V, R>(map: &HashMap<K, V>, mut f: impl FnMut(&K, &V) -> R) -> Vec<R> {
    map.iter().map(|(k, v)| f(k, v)).collect()
}
