//! Transaction log: the stack of open frames
//!
//! ## State machine
//!
//! ```text
//! depth d = number of open frames
//!
//! begin()              d -> d + 1
//! rollback_innermost() d -> d - 1   (d >= 1, undoes the top frame only)
//!                      d = 0        -> NoTransaction
//! commit_all()         d -> 0       (d >= 1, discards every frame)
//!                      d = 0        -> NoTransaction
//! ```
//!
//! Commit does not touch the store: writes are applied eagerly, so
//! committing only forgets how to undo them.

use nestkv_core::{Error, Key, Result};
use nestkv_storage::Store;

use crate::outcome::{CommitOutcome, RollbackOutcome};
use crate::undo::{Frame, UndoRecord};

/// Ordered stack of frames, innermost last.
///
/// An empty log means no transaction is open.
#[derive(Debug, Clone, Default)]
pub struct TransactionLog {
    frames: Vec<Frame>,
}

impl TransactionLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of open frames
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Check if any transaction is open
    pub fn is_active(&self) -> bool {
        !self.frames.is_empty()
    }

    /// Innermost open frame, if any
    pub fn top(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Open a new, empty frame on top of the stack.
    pub fn begin(&mut self) {
        self.frames.push(Frame::new());
        tracing::debug!(depth = self.frames.len(), "begin");
    }

    /// Record the current value of `key` on the innermost frame.
    ///
    /// Must be called before the write is applied. Records always go to the
    /// innermost frame, whatever the depth.
    ///
    /// # Errors
    ///
    /// Returns `Error::Internal` if no frame is open; the caller is expected
    /// to have opened one.
    pub fn record_before_mutation(&mut self, store: &Store, key: &Key) -> Result<()> {
        let frame = self.frames.last_mut().ok_or_else(|| {
            tracing::warn!(key = %key, "undo record requested with no open frame");
            Error::Internal(format!("no open frame to record write of key {}", key))
        })?;
        frame.push(UndoRecord::capture(store, key));
        Ok(())
    }

    /// Pop the innermost frame and undo its writes, newest first.
    pub fn rollback_innermost(&mut self, store: &mut Store) -> RollbackOutcome {
        let Some(frame) = self.frames.pop() else {
            return RollbackOutcome::NoTransaction;
        };
        let undone = frame.undo(store);
        tracing::debug!(depth = self.frames.len(), undone, "rollback");
        RollbackOutcome::Reverted
    }

    /// Discard every open frame.
    ///
    /// Nothing committed here can be rolled back afterwards.
    pub fn commit_all(&mut self) -> CommitOutcome {
        if self.frames.is_empty() {
            return CommitOutcome::NoTransaction;
        }
        let closed = self.frames.len();
        self.frames.clear();
        tracing::debug!(closed, "commit");
        CommitOutcome::Committed
    }
}
