//! Core types for nestkv
//!
//! This crate defines the fundamental types shared by every layer:
//! - [`Key`]: validated, non-empty key
//! - [`Value`]: the bounded integer stored under a key
//! - [`Error`]: the error type for invalid input and invariant violations

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{parse_value, Key, Value};
