//! clap command definition.

use clap::{Arg, ArgAction, Command};

/// Build the top-level `nestkv` command.
pub fn build_cli() -> Command {
    Command::new("nestkv")
        .version(env!("CARGO_PKG_VERSION"))
        .about("In-memory key-value store with nested transactions")
        .long_about(
            "Reads SET, GET, UNSET, NUMEQUALTO, BEGIN, ROLLBACK, COMMIT and END \
             commands, one per line, from SCRIPT, from a pipe, or interactively.",
        )
        .arg(
            Arg::new("script")
                .value_name("SCRIPT")
                .help("Read commands from this file instead of stdin"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print one JSON object per result"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Log to stderr (-v debug, -vv trace); RUST_LOG overrides"),
        )
}
