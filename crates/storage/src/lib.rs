//! Storage layer for nestkv
//!
//! This crate holds the committed state and the only code that writes it:
//! - Store: BTreeMap-based ordered key/value map
//! - apply: set-or-delete primitive shared by forward writes and undo replay

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod apply;
pub mod store;

pub use apply::apply;
pub use store::Store;
