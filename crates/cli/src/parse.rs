//! Input line → Command conversion.
//!
//! Translates one protocol line into the action to take:
//! - Store and transaction commands → `CliAction::Execute(Command)`
//! - `END` → `CliAction::End`
//! - Anything else → `CliAction::Unknown`
//!
//! Command words are case-sensitive. Tokens after the expected arguments are
//! ignored.

use nestkv_core::{parse_value, Key};
use nestkv_executor::Command;
use thiserror::Error;

/// The result of parsing one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    /// A command to execute
    Execute(Command),
    /// Stop reading input
    End,
    /// Unrecognized command word
    Unknown(String),
    /// Nothing on the line
    Blank,
}

/// Input that names a known command but cannot be executed.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A required argument is missing
    #[error("{command} requires <{argument}>")]
    MissingArgument {
        /// Command word
        command: &'static str,
        /// Name of the missing argument
        argument: &'static str,
    },

    /// Key or value rejected by the core types
    #[error(transparent)]
    Invalid(#[from] nestkv_core::Error),
}

/// Parse one protocol line.
pub fn parse_line(line: &str) -> Result<CliAction, ParseError> {
    let mut parts = line.split_whitespace();
    let Some(word) = parts.next() else {
        return Ok(CliAction::Blank);
    };

    let command = match word {
        "SET" => {
            let key = key_arg(&mut parts, "SET")?;
            let value = value_arg(&mut parts, "SET")?;
            Command::Set { key, value }
        }
        "GET" => Command::Get {
            key: key_arg(&mut parts, "GET")?,
        },
        "UNSET" => Command::Unset {
            key: key_arg(&mut parts, "UNSET")?,
        },
        "NUMEQUALTO" => Command::NumEqualTo {
            value: value_arg(&mut parts, "NUMEQUALTO")?,
        },
        "BEGIN" => Command::Begin,
        "ROLLBACK" => Command::Rollback,
        "COMMIT" => Command::Commit,
        "END" => return Ok(CliAction::End),
        other => return Ok(CliAction::Unknown(other.to_string())),
    };
    Ok(CliAction::Execute(command))
}

fn key_arg<'a>(
    parts: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
) -> Result<Key, ParseError> {
    let raw = parts.next().ok_or(ParseError::MissingArgument {
        command,
        argument: "key",
    })?;
    Ok(Key::new(raw)?)
}

fn value_arg<'a>(
    parts: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
) -> Result<i32, ParseError> {
    let raw = parts.next().ok_or(ParseError::MissingArgument {
        command,
        argument: "value",
    })?;
    Ok(parse_value(raw)?)
}
