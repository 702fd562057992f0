//! Structured results returned by the executor.

use serde::Serialize;

use nestkv_core::Value;
use nestkv_engine::{CommitOutcome, RollbackOutcome};

/// Result of executing one [`crate::Command`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Output {
    /// Nothing to report (`Set`, `Begin`)
    Unit,
    /// Value of a key, `None` if absent (`Get`)
    MaybeValue(Option<Value>),
    /// Value the key held before removal, `None` if it was absent (`Unset`)
    Unset(Option<Value>),
    /// Number of matching keys (`NumEqualTo`)
    Count(usize),
    /// Result of `Rollback`
    Rollback(RollbackOutcome),
    /// Result of `Commit`
    Commit(CommitOutcome),
}
