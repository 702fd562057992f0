//! Single-write executor
//!
//! `apply` is the one primitive that mutates a [`Store`]: a present value is
//! written, an absent value deletes the key. It knows nothing about the
//! transaction log, so replaying undo records through it never produces new
//! undo records.

use nestkv_core::{Key, Value};

use crate::store::Store;

/// Apply a single write to the store.
///
/// * `Some(value)` - insert or overwrite `key`
/// * `None` - remove `key` (no-op if absent)
pub fn apply(store: &mut Store, key: &Key, value: Option<Value>) {
    match value {
        Some(value) => {
            tracing::trace!(key = %key, value, "apply put");
            store.put(key.clone(), value);
        }
        None => {
            tracing::trace!(key = %key, "apply delete");
            store.delete(key.as_str());
        }
    }
}
