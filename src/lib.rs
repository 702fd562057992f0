//! # nestkv
//!
//! In-memory key-value store with nested transactions.
//!
//! Values are integers. Transactions nest: `rollback` undoes only the
//! innermost open transaction, while `commit` makes every open level
//! permanent at once. Writes made outside a transaction are committed
//! immediately.
//!
//! ## Quick Start
//!
//! ```
//! use nestkv::prelude::*;
//!
//! let mut db = TransactionEngine::new();
//! let a = Key::new("a")?;
//!
//! db.set(a.clone(), 10)?;
//! db.begin();
//! db.set(a.clone(), 20)?;
//! db.begin();
//! db.unset(&a)?;
//!
//! db.rollback();
//! assert_eq!(db.get("a"), Some(20));
//!
//! db.commit();
//! assert_eq!(db.rollback(), RollbackOutcome::NoTransaction);
//! assert_eq!(db.count_equal(20), 1);
//! # Ok::<(), nestkv::Error>(())
//! ```
//!
//! ## Layers
//!
//! - [`TransactionEngine`] - store plus undo log, the public operations
//! - [`SharedEngine`] - lock-guarded handle for multi-threaded use
//! - [`Executor`] - [`Command`] in, [`Output`] out, for front ends

#![warn(missing_docs)]

pub mod prelude;

// Re-export main entry points
pub use nestkv_engine::{SharedEngine, TransactionEngine};
pub use nestkv_executor::{Command, Executor, Output};

// Re-export types
pub use nestkv_concurrency::{CommitOutcome, Frame, RollbackOutcome, TransactionLog, UndoRecord};
pub use nestkv_core::{parse_value, Error, Key, Result, Value};
pub use nestkv_storage::{apply, Store};
