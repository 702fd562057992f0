//! Dispatch of commands to the engine.

use nestkv_core::Result;
use nestkv_engine::SharedEngine;

use crate::command::Command;
use crate::output::Output;

/// Executes [`Command`]s against a shared engine.
///
/// Each command runs under a single engine lock hold.
#[derive(Debug, Clone, Default)]
pub struct Executor {
    engine: SharedEngine,
}

impl Executor {
    /// Create an executor over `engine`
    pub fn new(engine: SharedEngine) -> Self {
        Self { engine }
    }

    /// Get the underlying engine handle
    pub fn engine(&self) -> &SharedEngine {
        &self.engine
    }

    /// Execute one command.
    pub fn execute(&self, command: Command) -> Result<Output> {
        tracing::debug!(command = command.name(), write = command.is_write(), "execute");
        self.engine.with(|engine| match command {
            Command::Set { key, value } => {
                engine.set(key, value)?;
                Ok(Output::Unit)
            }
            Command::Get { key } => Ok(Output::MaybeValue(engine.get(key.as_str()))),
            Command::Unset { key } => Ok(Output::Unset(engine.unset(&key)?)),
            Command::NumEqualTo { value } => Ok(Output::Count(engine.count_equal(value))),
            Command::Begin => {
                engine.begin();
                Ok(Output::Unit)
            }
            Command::Rollback => Ok(Output::Rollback(engine.rollback())),
            Command::Commit => Ok(Output::Commit(engine.commit())),
        })
    }
}
