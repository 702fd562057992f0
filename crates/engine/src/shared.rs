//! Lock-guarded engine handle
//!
//! Every call takes the lock once and holds it for the whole operation,
//! including the implicit begin/commit around a bare write. The check for an
//! open transaction and the commit that depends on it therefore always see
//! the same state.

use std::sync::Arc;

use parking_lot::Mutex;

use nestkv_concurrency::{CommitOutcome, RollbackOutcome};
use nestkv_core::{Key, Result, Value};

use crate::engine::TransactionEngine;

/// Cloneable, thread-safe handle to one [`TransactionEngine`].
///
/// Clones share the same store and the same undo log.
#[derive(Debug, Clone, Default)]
pub struct SharedEngine {
    inner: Arc<Mutex<TransactionEngine>>,
}

impl SharedEngine {
    /// Create a handle over a fresh engine
    pub fn new() -> Self {
        Self::default()
    }

    /// Run several operations under a single lock hold.
    ///
    /// # Example
    ///
    /// ```
    /// use nestkv_engine::{Key, SharedEngine};
    ///
    /// let shared = SharedEngine::new();
    /// let depth = shared.with(|engine| {
    ///     engine.begin();
    ///     engine.set(Key::new("a")?, 1)?;
    ///     Ok::<_, nestkv_engine::Error>(engine.depth())
    /// });
    /// assert_eq!(depth.unwrap(), 1);
    /// ```
    pub fn with<T>(&self, f: impl FnOnce(&mut TransactionEngine) -> T) -> T {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }

    /// See [`TransactionEngine::get`]
    pub fn get(&self, key: &str) -> Option<Value> {
        self.inner.lock().get(key)
    }

    /// See [`TransactionEngine::count_equal`]
    pub fn count_equal(&self, value: Value) -> usize {
        self.inner.lock().count_equal(value)
    }

    /// See [`TransactionEngine::set`]
    pub fn set(&self, key: Key, value: Value) -> Result<()> {
        self.inner.lock().set(key, value)
    }

    /// See [`TransactionEngine::unset`]
    pub fn unset(&self, key: &Key) -> Result<Option<Value>> {
        self.inner.lock().unset(key)
    }

    /// See [`TransactionEngine::begin`]
    pub fn begin(&self) {
        self.inner.lock().begin();
    }

    /// See [`TransactionEngine::rollback`]
    pub fn rollback(&self) -> RollbackOutcome {
        self.inner.lock().rollback()
    }

    /// See [`TransactionEngine::commit`]
    pub fn commit(&self) -> CommitOutcome {
        self.inner.lock().commit()
    }

    /// See [`TransactionEngine::depth`]
    pub fn depth(&self) -> usize {
        self.inner.lock().depth()
    }
}
