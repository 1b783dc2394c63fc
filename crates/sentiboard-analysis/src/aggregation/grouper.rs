//! Group-by-key counting and normalization.
//!
//! Cells are accumulated in an `FxHashMap` keyed by `(group, category)` and
//! then ordered through `BTreeMap`s, so output order depends only on the
//! `Ord` of the key and category types, never on input order.

use std::collections::BTreeMap;
use std::hash::Hash;

use sentiboard_core::types::collections::FxHashMap;

pub use sentiboard_core::types::Granularity;

/// Raw category counts for one group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCounts<K, C> {
    pub key: K,
    /// Non-zero counts, ordered by category.
    pub counts: Vec<(C, u64)>,
    pub total: u64,
}

/// Category shares for one group, scaled so they sum to `scale`.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedGroup<K, C> {
    pub key: K,
    pub total: u64,
    pub shares: Vec<(C, f64)>,
}

/// Count items per `(key, category)`; groups come out ordered by key.
pub fn group_counts<T, K, C>(
    items: &[T],
    key_fn: impl Fn(&T) -> K,
    category_fn: impl Fn(&T) -> C,
) -> Vec<GroupCounts<K, C>>
where
    K: Ord + Hash + Copy,
    C: Ord + Hash + Copy,
{
    let mut cells: FxHashMap<(K, C), u64> = FxHashMap::default();
    for item in items {
        *cells.entry((key_fn(item), category_fn(item))).or_insert(0) += 1;
    }

    let mut grouped: BTreeMap<K, BTreeMap<C, u64>> = BTreeMap::new();
    for ((key, category), count) in cells {
        grouped.entry(key).or_default().insert(category, count);
    }

    grouped
        .into_iter()
        .map(|(key, counts)| {
            let total = counts.values().sum();
            GroupCounts {
                key,
                counts: counts.into_iter().collect(),
                total,
            }
        })
        .collect()
}

/// Divide each category count by its group total and multiply by `scale`.
///
/// Returns `None` for a zero-total group instead of producing NaN.
pub fn normalize_group<K, C>(group: GroupCounts<K, C>, scale: f64) -> Option<NormalizedGroup<K, C>> {
    if group.total == 0 {
        return None;
    }
    let total = group.total as f64;
    let shares = group
        .counts
        .into_iter()
        .map(|(category, count)| (category, count as f64 / total * scale))
        .collect();
    Some(NormalizedGroup {
        key: group.key,
        total: group.total,
        shares,
    })
}

/// [`group_counts`] followed by [`normalize_group`] on every group.
pub fn group_normalize<T, K, C>(
    items: &[T],
    key_fn: impl Fn(&T) -> K,
    category_fn: impl Fn(&T) -> C,
    scale: f64,
) -> Vec<NormalizedGroup<K, C>>
where
    K: Ord + Hash + Copy,
    C: Ord + Hash + Copy,
{
    group_counts(items, key_fn, category_fn)
        .into_iter()
        .filter_map(|group| normalize_group(group, scale))
        .collect()
}
