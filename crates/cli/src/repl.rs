//! Input loops: pipe/script mode and the interactive REPL.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use nestkv_executor::Executor;
use rustyline::error::ReadlineError;
use thiserror::Error;

use crate::format::{format_output, format_unknown, OutputMode};
use crate::parse::{parse_line, CliAction, ParseError};

const PROMPT: &str = "> ";

/// Failure that ends a pipe-mode session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Malformed input line
    #[error("line {line}: {source}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// What was wrong with it
        source: ParseError,
    },

    /// Engine rejected a command
    #[error(transparent)]
    Engine(#[from] nestkv_core::Error),

    /// Script file could not be opened
    #[error("failed to open {}: {source}", path.display())]
    Open {
        /// Path given on the command line
        path: PathBuf,
        /// Underlying failure
        source: io::Error,
    },

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// What to do after handling one line
enum Flow {
    Continue,
    Stop,
}

/// Run commands from `input` until `END` or end of input.
///
/// Results are written to `out`. A malformed line stops the session with
/// an error; unknown command words do not. Input is split on `\n` and each
/// line decoded lossily, so stray non-UTF-8 bytes only affect their own line.
pub fn run_session<R: BufRead, W: Write>(
    executor: &Executor,
    input: R,
    out: &mut W,
    mode: OutputMode,
) -> Result<(), SessionError> {
    for (index, bytes) in input.split(b'\n').enumerate() {
        let bytes = bytes?;
        let line = String::from_utf8_lossy(&bytes);
        let action = parse_line(&line).map_err(|source| SessionError::Parse {
            line: index + 1,
            source,
        })?;
        if let Flow::Stop = handle(executor, action, out, mode)? {
            return Ok(());
        }
    }
    tracing::debug!("end of input");
    Ok(())
}

/// Interactive prompt with line editing and history.
///
/// Malformed lines are reported and the session continues. Returns the
/// process exit code.
pub fn run_repl(executor: &Executor, mode: OutputMode) -> i32 {
    let mut editor = match rustyline::DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("(error) failed to start line editor: {}", e);
            return 1;
        }
    };
    let stdout = io::stdout();

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = editor.add_history_entry(line.as_str());
                }
                let action = match parse_line(&line) {
                    Ok(action) => action,
                    Err(e) => {
                        eprintln!("(error) {}", e);
                        continue;
                    }
                };
                match handle(executor, action, &mut stdout.lock(), mode) {
                    Ok(Flow::Continue) => {}
                    Ok(Flow::Stop) => return 0,
                    Err(e) => {
                        eprintln!("(error) {}", e);
                        if let SessionError::Io(_) = e {
                            return 1;
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => return 0,
            Err(e) => {
                eprintln!("(error) {}", e);
                return 1;
            }
        }
    }
}

fn handle<W: Write>(
    executor: &Executor,
    action: CliAction,
    out: &mut W,
    mode: OutputMode,
) -> Result<Flow, SessionError> {
    match action {
        CliAction::Execute(command) => {
            let output = executor.execute(command)?;
            if let Some(text) = format_output(&output, mode) {
                writeln!(out, "{}", text)?;
            }
        }
        CliAction::Unknown(word) => {
            tracing::debug!(word = %word, "unknown command");
            writeln!(out, "{}", format_unknown(&word, mode))?;
        }
        CliAction::Blank => {}
        CliAction::End => return Ok(Flow::Stop),
    }
    Ok(Flow::Continue)
}
