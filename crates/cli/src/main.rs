//! nestkv CLI — Redis-inspired CLI for the nestkv store.
//!
//! Three modes:
//! - **Shell mode**: `nestkv [flags] COMMAND` — single command, exit
//! - **REPL mode**: `nestkv [flags]` — interactive prompt (if stdin is a TTY)
//! - **Pipe mode**: `echo "set k v" | nestkv` — line-by-line from stdin
//!
//! The store is in-memory and lives for the process, so transactions are
//! meaningful in REPL and pipe mode; shell mode executes one command
//! against a fresh store.

mod commands;
mod format;
mod parse;
mod repl;
mod state;

use std::io::IsTerminal;
use std::process;

use nestkv_executor::Executor;
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use format::{format_error, format_output, OutputMode};
use state::SessionState;

fn main() {
    // Diagnostics go to stderr so they never mix with command output;
    // enable with e.g. RUST_LOG=nestkv_engine=debug.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = build_cli();
    let matches = cli.get_matches();

    // Determine output mode
    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else if matches.get_flag("raw") {
        OutputMode::Raw
    } else {
        OutputMode::Human
    };

    let state = SessionState::new(Executor::new(), matches.get_flag("yes"));

    // Dispatch mode
    if matches.subcommand().is_some() {
        // Shell mode: parse, execute, format, exit
        let exit_code = run_shell_mode(&matches, &state, output_mode);
        process::exit(exit_code);
    } else if std::io::stdin().is_terminal() {
        // REPL mode
        repl::run_repl(&state, output_mode);
    } else {
        // Pipe mode
        let exit_code = repl::run_pipe(&state, output_mode);
        process::exit(exit_code);
    }
}

fn run_shell_mode(matches: &clap::ArgMatches, state: &SessionState, mode: OutputMode) -> i32 {
    match parse::matches_to_command(matches) {
        Ok(cmd) => match state.execute(cmd) {
            Ok(output) => {
                let formatted = format_output(&output, mode);
                if !formatted.is_empty() {
                    println!("{}", formatted);
                }
                0
            }
            Err(e) => {
                eprintln!("{}", format_error(&e, mode));
                1
            }
        },
        Err(e) => {
            eprintln!("(error) {}", e);
            1
        }
    }
}
