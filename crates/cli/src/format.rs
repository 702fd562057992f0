//! Output rendering.
//!
//! Human mode prints the line protocol exactly; results with nothing to say
//! print nothing. JSON mode prints every result as one object per line.

use nestkv_executor::{CommitOutcome, Output, RollbackOutcome};

/// Reply to an unrecognized command word
pub const INVALID_COMMAND: &str = "Invalid Commands";

/// How results are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Line protocol text
    Human,
    /// One JSON object per result
    Json,
}

/// Render `output`, or `None` if nothing should be printed.
pub fn format_output(output: &Output, mode: OutputMode) -> Option<String> {
    match mode {
        OutputMode::Human => format_human(output),
        OutputMode::Json => Some(serde_json::to_string(output).unwrap_or_else(|e| {
            serde_json::json!({ "type": "error", "value": e.to_string() }).to_string()
        })),
    }
}

/// Render the reply to an unrecognized command.
pub fn format_unknown(word: &str, mode: OutputMode) -> String {
    match mode {
        OutputMode::Human => INVALID_COMMAND.to_string(),
        OutputMode::Json => {
            serde_json::json!({ "type": "invalid_command", "value": word }).to_string()
        }
    }
}

fn format_human(output: &Output) -> Option<String> {
    match output {
        Output::Unit => None,
        Output::MaybeValue(Some(value)) => Some(value.to_string()),
        Output::MaybeValue(None) => Some("NULL".to_string()),
        Output::Unset(Some(prior)) => Some(format!("VALUE= {}", prior)),
        Output::Unset(None) => None,
        Output::Count(count) => Some(count.to_string()),
        Output::Rollback(RollbackOutcome::Reverted) => None,
        Output::Rollback(RollbackOutcome::NoTransaction) => Some("NO TRANSACTION".to_string()),
        Output::Commit(CommitOutcome::Committed) => None,
        Output::Commit(CommitOutcome::NoTransaction) => Some("NO TRANSACTION".to_string()),
    }
}
