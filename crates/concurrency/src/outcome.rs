//! Outcomes of closing transaction scopes.
//!
//! Closing a scope when none is open is an ordinary result, not an error,
//! so both operations report it as a variant.

use serde::Serialize;

/// Result of rolling back the innermost transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RollbackOutcome {
    /// The innermost frame was popped and its writes undone
    Reverted,
    /// No transaction was open
    NoTransaction,
}

/// Result of committing all open transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CommitOutcome {
    /// Every open frame was discarded
    Committed,
    /// No transaction was open
    NoTransaction,
}

impl RollbackOutcome {
    /// Check if there was no transaction to roll back
    pub fn is_no_transaction(&self) -> bool {
        matches!(self, RollbackOutcome::NoTransaction)
    }
}

impl CommitOutcome {
    /// Check if there was no transaction to commit
    pub fn is_no_transaction(&self) -> bool {
        matches!(self, CommitOutcome::NoTransaction)
    }
}
