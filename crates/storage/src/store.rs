//! Ordered key/value store
//!
//! Holds the current state of every key. Reads are plain lookups. Writes are
//! crate-private: outside this crate the store changes only through
//! [`crate::apply`].
//!
//! # Complexity
//!
//! - get(), put(), delete(): O(log n)
//! - count_equal(): O(n) full scan

use nestkv_core::{Key, Value};
use std::collections::BTreeMap;

/// BTreeMap-backed store
///
/// Keys are unique and iterate in lexicographic order, so full scans are
/// deterministic.
///
/// Other crates write through [`crate::apply`]; `put` and `delete` are not
/// reachable from outside:
///
/// ```compile_fail
/// use nestkv_core::Key;
/// use nestkv_storage::Store;
///
/// let mut store = Store::new();
/// store.put(Key::new("a").unwrap(), 1);
/// ```
///
/// ```
/// use nestkv_core::Key;
/// use nestkv_storage::{apply, Store};
///
/// let mut store = Store::new();
/// apply(&mut store, &Key::new("a").unwrap(), Some(1));
/// assert_eq!(store.get("a"), Some(1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Store {
    data: BTreeMap<Key, Value>,
}

impl Store {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            data: BTreeMap::new(),
        }
    }

    /// Get the current value of `key`, or `None` if absent
    pub fn get(&self, key: &str) -> Option<Value> {
        self.data.get(key).copied()
    }

    /// Check whether `key` is present
    pub fn contains(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Insert or overwrite `key`
    pub(crate) fn put(&mut self, key: Key, value: Value) {
        self.data.insert(key, value);
    }

    /// Remove `key`, returning its value if it was present
    pub(crate) fn delete(&mut self, key: &str) -> Option<Value> {
        self.data.remove(key)
    }

    /// Count the entries whose value equals `value`
    pub fn count_equal(&self, value: Value) -> usize {
        self.data.values().filter(|v| **v == value).count()
    }

    /// Iterate over entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&Key, Value)> + '_ {
        self.data.iter().map(|(k, v)| (k, *v))
    }

    /// Get number of entries
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if store is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
