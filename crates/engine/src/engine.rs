//! Store plus undo log behind the public operations.

use nestkv_concurrency::{CommitOutcome, RollbackOutcome, TransactionLog};
use nestkv_core::{Key, Result, Value};
use nestkv_storage::{apply, Store};

/// In-memory key-value store with nested transactions.
///
/// # Example
///
/// ```
/// use nestkv_engine::{Key, RollbackOutcome, TransactionEngine};
///
/// let mut engine = TransactionEngine::new();
/// let a = Key::new("a").unwrap();
///
/// engine.set(a.clone(), 10).unwrap();
/// engine.begin();
/// engine.set(a, 20).unwrap();
/// assert_eq!(engine.rollback(), RollbackOutcome::Reverted);
/// assert_eq!(engine.get("a"), Some(10));
/// ```
#[derive(Debug, Default)]
pub struct TransactionEngine {
    store: Store,
    log: TransactionLog,
}

impl TransactionEngine {
    /// Create an engine with an empty store and no open transaction
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Current value of `key`, or `None` if absent
    pub fn get(&self, key: &str) -> Option<Value> {
        self.store.get(key)
    }

    /// Number of keys whose current value equals `value`
    pub fn count_equal(&self, value: Value) -> usize {
        self.store.count_equal(value)
    }

    /// Entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&Key, Value)> + '_ {
        self.store.iter()
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Check if the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Number of open transactions
    pub fn depth(&self) -> usize {
        self.log.depth()
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Set `key` to `value`.
    pub fn set(&mut self, key: Key, value: Value) -> Result<()> {
        self.with_implicit_transaction(|engine| engine.write(&key, Some(value)))
    }

    /// Remove `key`, returning the value it held.
    ///
    /// An absent key is a no-op: no frame is opened and nothing is recorded.
    pub fn unset(&mut self, key: &Key) -> Result<Option<Value>> {
        let Some(prior) = self.store.get(key.as_str()) else {
            return Ok(None);
        };
        self.with_implicit_transaction(|engine| engine.write(key, None))?;
        Ok(Some(prior))
    }

    // =========================================================================
    // Transactions
    // =========================================================================

    /// Open a nested transaction
    pub fn begin(&mut self) {
        self.log.begin();
    }

    /// Undo the innermost open transaction
    pub fn rollback(&mut self) -> RollbackOutcome {
        self.log.rollback_innermost(&mut self.store)
    }

    /// Commit every open transaction at once
    pub fn commit(&mut self) -> CommitOutcome {
        self.log.commit_all()
    }

    /// Record the prior value, then apply the write.
    fn write(&mut self, key: &Key, value: Option<Value>) -> Result<()> {
        self.log.record_before_mutation(&self.store, key)?;
        apply(&mut self.store, key, value);
        Ok(())
    }

    /// Run `op` inside a transaction, opening and closing one if none is open.
    ///
    /// When the implicit frame is ours and `op` fails, the frame is rolled
    /// back so the store is left as it was.
    fn with_implicit_transaction<T>(
        &mut self,
        op: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        let implicit = !self.log.is_active();
        if implicit {
            self.log.begin();
        }

        let result = op(self);

        if implicit {
            match &result {
                Ok(_) => {
                    self.log.commit_all();
                }
                Err(e) => {
                    tracing::warn!(error = %e, "implicit transaction failed, rolling back");
                    self.log.rollback_innermost(&mut self.store);
                }
            }
        }
        result
    }
}
