//! Interactive REPL and pipe-mode execution.
//!
//! Both modes feed lines through the same path: meta-command check, shlex
//! tokenizing, clap parse, then dispatch. The only differences are the
//! prompt and that confirmations exist only where a human is attached.

use std::io::BufRead;
use std::path::PathBuf;

use nestkv_executor::Command;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::commands::build_cli;
use crate::format::{format_error, format_output, OutputMode};
use crate::parse::{check_meta_command, describe, matches_to_command, MetaCommand};
use crate::state::SessionState;

enum LineResult {
    Continue,
    Quit,
}

/// Run the interactive REPL until quit or EOF.
pub fn run_repl(state: &SessionState, mode: OutputMode) {
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("(error) Failed to initialize line editor: {}", e);
            return;
        }
    };
    let history = history_path();
    if let Some(path) = &history {
        // Missing history is the normal first-run case
        let _ = rl.load_history(path);
    }

    println!("nestkv — type 'help' for commands, 'quit' to exit");
    loop {
        match rl.readline(&prompt(state.depth())) {
            Ok(line) => {
                let line = line.trim().to_string();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);
                match handle_line(&line, state, mode, Some(&mut rl)) {
                    LineResult::Continue => {}
                    LineResult::Quit => break,
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("(error) {}", e);
                break;
            }
        }
    }

    if let Some(path) = &history {
        let _ = rl.save_history(path);
    }
}

/// Execute stdin line by line. Returns the process exit code: 1 if any
/// line failed, 0 otherwise.
pub fn run_pipe(state: &SessionState, mode: OutputMode) -> i32 {
    let stdin = std::io::stdin();
    let mut exit_code = 0;
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("(error) {}", e);
                return 1;
            }
        };
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match execute_line(line, state, mode, None) {
            Ok(LineResult::Quit) => break,
            Ok(LineResult::Continue) => {}
            Err(()) => exit_code = 1,
        }
    }
    exit_code
}

/// The REPL prompt; shows nesting when a transaction is open.
fn prompt(depth: usize) -> String {
    if depth > 1 {
        format!("nestkv(txn:{})> ", depth - 1)
    } else {
        "nestkv> ".to_string()
    }
}

fn handle_line(
    line: &str,
    state: &SessionState,
    mode: OutputMode,
    editor: Option<&mut DefaultEditor>,
) -> LineResult {
    match execute_line(line, state, mode, editor) {
        Ok(result) => result,
        Err(()) => LineResult::Continue,
    }
}

/// One line through the full path. `Err(())` means the line failed in a way
/// pipe mode should report through the exit code.
fn execute_line(
    line: &str,
    state: &SessionState,
    mode: OutputMode,
    editor: Option<&mut DefaultEditor>,
) -> Result<LineResult, ()> {
    if let Some(meta) = check_meta_command(line) {
        match meta {
            MetaCommand::Quit => return Ok(LineResult::Quit),
            MetaCommand::Clear => print!("\x1b[2J\x1b[1;1H"),
            MetaCommand::Help { command } => print_help(command.as_deref()),
        }
        return Ok(LineResult::Continue);
    }

    let tokens = match shlex::split(line) {
        Some(tokens) if !tokens.is_empty() => tokens,
        Some(_) => return Ok(LineResult::Continue),
        None => {
            eprintln!("(error) Unbalanced quotes");
            return Err(());
        }
    };

    let matches = match build_cli()
        .no_binary_name(true)
        .try_get_matches_from(tokens)
    {
        Ok(matches) => matches,
        Err(e) => {
            // clap errors carry their own "error:" prefix and usage
            eprintln!("{}", e);
            return Err(());
        }
    };

    let command = match matches_to_command(&matches) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("(error) {}", e);
            return Err(());
        }
    };

    // Confirmation is a UI policy, not a store rule: only when interactive
    // and not waived with --yes.
    if command.is_destructive() && !state.assume_yes {
        if let Some(rl) = editor {
            if !confirm(rl, &command) {
                println!("(cancelled)");
                return Ok(LineResult::Continue);
            }
        }
    }

    match state.execute(command) {
        Ok(output) => {
            let formatted = format_output(&output, mode);
            if !formatted.is_empty() {
                println!("{}", formatted);
            }
            Ok(LineResult::Continue)
        }
        Err(e) => {
            eprintln!("{}", format_error(&e, mode));
            Err(())
        }
    }
}

fn confirm(rl: &mut DefaultEditor, command: &Command) -> bool {
    match rl.readline(&format!("confirm {}? [y/N] ", describe(command))) {
        Ok(answer) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
        Err(_) => false,
    }
}

fn print_help(topic: Option<&str>) {
    let mut cli = build_cli().no_binary_name(true);
    match topic {
        Some(name) => match cli.find_subcommand_mut(name) {
            Some(sub) => println!("{}", sub.render_long_help()),
            None => println!("(error) Unknown command: {}", name),
        },
        None => {
            println!("{}", cli.render_help());
            println!("Meta-commands: help [command], clear, quit");
        }
    }
}

fn history_path() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".nestkv_history"))
}
