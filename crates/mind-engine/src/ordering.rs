//! Ordering helpers shared by the ranking code.
//!
//! Several outcomes depend on ties keeping their input order, so every sort
//! here goes through a stable algorithm.

use std::cmp::Reverse;
use std::collections::HashSet;
use std::hash::Hash;

/// Sort descending by `key`. Equal keys keep their relative order.
pub fn stable_sort_desc_by_key<T, K, F>(items: &mut [T], mut key: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    // slice::sort_by_key is a stable merge sort
    items.sort_by_key(|item| Reverse(key(item)));
}

/// Distinct values in first-seen order.
pub fn first_seen<T, I>(values: I) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|v| seen.insert(v.clone()))
        .collect()
}
