//! Commands accepted by the executor.

use nestkv_core::{Key, Value};

/// One operation against the engine.
///
/// Arguments are already validated: a `Key` is never empty and a `Value` is
/// always in range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set `key` to `value`
    Set {
        /// Key to write
        key: Key,
        /// New value
        value: Value,
    },
    /// Read `key`
    Get {
        /// Key to read
        key: Key,
    },
    /// Remove `key`
    Unset {
        /// Key to remove
        key: Key,
    },
    /// Count keys whose value equals `value`
    NumEqualTo {
        /// Value to match
        value: Value,
    },
    /// Open a nested transaction
    Begin,
    /// Undo the innermost transaction
    Rollback,
    /// Commit all open transactions
    Commit,
}

impl Command {
    /// Protocol keyword for this command
    pub fn name(&self) -> &'static str {
        match self {
            Command::Set { .. } => "SET",
            Command::Get { .. } => "GET",
            Command::Unset { .. } => "UNSET",
            Command::NumEqualTo { .. } => "NUMEQUALTO",
            Command::Begin => "BEGIN",
            Command::Rollback => "ROLLBACK",
            Command::Commit => "COMMIT",
        }
    }

    /// Check if the command can change the store or the log
    pub fn is_write(&self) -> bool {
        !matches!(self, Command::Get { .. } | Command::NumEqualTo { .. })
    }
}
