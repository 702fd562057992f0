//! Transaction engine for nestkv
//!
//! [`TransactionEngine`] owns the store and the undo log and exposes the
//! public operations. Writes made with no transaction open are wrapped in an
//! implicit one-frame transaction that commits before the call returns.
//!
//! [`SharedEngine`] is a cloneable handle that serializes every call behind
//! one lock, for use from more than one thread.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod engine;
mod shared;

pub use engine::TransactionEngine;
pub use shared::SharedEngine;

pub use nestkv_concurrency::{CommitOutcome, RollbackOutcome};
pub use nestkv_core::{Error, Key, Result, Value};
