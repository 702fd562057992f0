//! nestkv CLI — line-oriented front end for the nestkv store.
//!
//! Three modes:
//! - **Script mode**: `nestkv commands.txt` — run a file, exit
//! - **REPL mode**: `nestkv` — interactive prompt (if stdin is TTY)
//! - **Pipe mode**: `echo "SET a 1" | nestkv` — line-by-line from stdin

mod commands;
mod format;
mod parse;
mod repl;

use std::fs::File;
use std::io::{self, BufReader, IsTerminal, Write};
use std::path::Path;
use std::process;

use nestkv_executor::Executor;
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use format::OutputMode;
use repl::{run_repl, run_session, SessionError};

fn main() {
    let matches = build_cli().get_matches();

    init_logging(matches.get_count("verbose"));

    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let executor = Executor::default();

    let result = if let Some(path) = matches.get_one::<String>("script") {
        // Script mode
        run_script(
            &executor,
            Path::new(path),
            &mut io::stdout().lock(),
            output_mode,
        )
    } else if io::stdin().is_terminal() {
        // REPL mode
        process::exit(run_repl(&executor, output_mode));
    } else {
        // Pipe mode
        run_session(
            &executor,
            io::stdin().lock(),
            &mut io::stdout().lock(),
            output_mode,
        )
    };

    process::exit(exit_code(result));
}

/// Install the stderr subscriber; `RUST_LOG` wins over `-v`.
fn init_logging(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Run the commands in the file at `path`.
fn run_script<W: Write>(
    executor: &Executor,
    path: &Path,
    out: &mut W,
    mode: OutputMode,
) -> Result<(), SessionError> {
    let file = File::open(path).map_err(|source| SessionError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    run_session(executor, BufReader::new(file), out, mode)
}

/// Map a session result to the process exit code, reporting failures on stderr.
fn exit_code(result: Result<(), SessionError>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            tracing::debug!(error = %e, "session aborted");
            eprintln!("(error) {}", e);
            1
        }
    }
}
