//! Transaction layer for nestkv
//!
//! This crate implements nested transactions with an undo log:
//! - UndoRecord: the value a key held before one write
//! - Frame: the undo records of one open transaction scope
//! - TransactionLog: the stack of open frames
//!
//! Rollback reverses only the innermost frame. Commit discards every frame
//! at once and leaves the store as it is.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod log;
pub mod outcome;
pub mod undo;

pub use log::TransactionLog;
pub use outcome::{CommitOutcome, RollbackOutcome};
pub use undo::{Frame, UndoRecord};
