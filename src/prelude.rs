//! Convenient imports for nestkv.
//!
//! ```
//! use nestkv::prelude::*;
//!
//! let db = SharedEngine::new();
//! db.set(Key::new("a").unwrap(), 1).unwrap();
//! ```

// Main entry points
pub use crate::{Executor, SharedEngine, TransactionEngine};

// Error handling
pub use crate::{Error, Result};

// Core types
pub use crate::{CommitOutcome, Key, RollbackOutcome, Value};

// Commands
pub use crate::{Command, Output};
