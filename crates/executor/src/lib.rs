//! Command execution layer for nestkv
//!
//! Front ends build a [`Command`], hand it to an [`Executor`], and render
//! the [`Output`] it returns. No formatting or I/O happens here.
//!
//! # Example
//!
//! ```
//! use nestkv_executor::{Command, Executor, Output};
//! use nestkv_core::Key;
//!
//! let executor = Executor::default();
//! executor.execute(Command::Set { key: Key::new("a").unwrap(), value: 10 }).unwrap();
//!
//! let output = executor.execute(Command::Get { key: Key::new("a").unwrap() }).unwrap();
//! assert_eq!(output, Output::MaybeValue(Some(10)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod command;
mod executor;
mod output;


pub use command::Command;
pub use executor::Executor;
pub use output::Output;

pub use nestkv_core::{Error, Result};
pub use nestkv_engine::{CommitOutcome, RollbackOutcome};
