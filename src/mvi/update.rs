//! Copy-on-write helpers for `Arc`-shared state.
//!
//! Each helper leaves its input untouched and returns a new `Arc`. Entries
//! are cloned shallowly: values are expected to be `Arc`s themselves, so
//! only the container is rebuilt and every untouched element is shared
//! with the previous snapshot.

use std::collections::BTreeMap;
use std::sync::Arc;

/// Map with `key` set to `value`.
///
/// Returns the same `Arc` when the entry already holds an equal value.
pub fn with_entry<K, V>(map: &Arc<BTreeMap<K, V>>, key: K, value: V) -> Arc<BTreeMap<K, V>>
where
    K: Ord + Clone,
    V: Clone + PartialEq,
{
    if map.get(&key) == Some(&value) {
        return Arc::clone(map);
    }
    let mut next = BTreeMap::clone(map);
    next.insert(key, value);
    Arc::new(next)
}

/// Slice with `item` appended.
pub fn with_appended<T: Clone>(items: &Arc<[T]>, item: T) -> Arc<[T]> {
    items.iter().cloned().chain(std::iter::once(item)).collect()
}

/// Slice with the first element matching `pred` replaced by `item`.
///
/// Returns `None` when nothing matches.
pub fn with_replaced<T, F>(items: &Arc<[T]>, pred: F, item: T) -> Option<Arc<[T]>>
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    let index = items.iter().position(pred)?;
    let mut next = items.to_vec();
    next[index] = item;
    Some(next.into())
}

/// Slice without the elements matching `pred`.
///
/// Returns `None` when nothing matches.
pub fn without<T, F>(items: &Arc<[T]>, pred: F) -> Option<Arc<[T]>>
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    if !items.iter().any(&pred) {
        return None;
    }
    Some(items.iter().filter(|item| !pred(*item)).cloned().collect())
}
