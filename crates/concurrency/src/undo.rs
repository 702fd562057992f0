//! Undo records and frames
//!
//! An [`UndoRecord`] captures what a key held immediately before one write.
//! A [`Frame`] collects the records of one transaction scope in application
//! order and replays them newest first.

use nestkv_core::{Key, Value};
use nestkv_storage::{apply, Store};

/// How to reverse one write.
///
/// `prior == None` means the key did not exist before the write, so undoing
/// it removes the key again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoRecord {
    /// Key that was written
    pub key: Key,
    /// Value before the write
    pub prior: Option<Value>,
}

impl UndoRecord {
    /// Capture the current state of `key` before it is written.
    pub fn capture(store: &Store, key: &Key) -> Self {
        Self {
            key: key.clone(),
            prior: store.get(key.as_str()),
        }
    }

    /// Restore the captured state through the executor.
    pub fn replay(self, store: &mut Store) {
        apply(store, &self.key, self.prior);
    }
}

/// Undo records of one transaction scope, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    records: Vec<UndoRecord>,
}

impl Frame {
    /// Create an empty frame
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record
    pub fn push(&mut self, record: UndoRecord) {
        self.records.push(record);
    }

    /// Records in application order
    pub fn records(&self) -> &[UndoRecord] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the frame recorded nothing
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Undo every write of this frame, newest first.
    ///
    /// Returns the number of records replayed.
    pub fn undo(self, store: &mut Store) -> usize {
        let count = self.records.len();
        // Reverse order so repeated writes to one key end at the oldest prior value.
        for record in self.records.into_iter().rev() {
            tracing::trace!(key = %record.key, prior = ?record.prior, "undo");
            record.replay(store);
        }
        count
    }
}
