//! ArgMatches → Command conversion and REPL meta-commands.

use clap::ArgMatches;
use nestkv_executor::Command;

/// REPL meta-commands, handled before the line reaches clap.
pub enum MetaCommand {
    /// `help [command]`
    Help { command: Option<String> },
    /// `quit` / `exit`
    Quit,
    /// `clear`
    Clear,
}

/// Check for REPL meta-commands before delegating to clap.
///
/// Returns `Some(MetaCommand)` if the line is a meta-command, `None`
/// otherwise.
pub fn check_meta_command(line: &str) -> Option<MetaCommand> {
    let trimmed = line.trim();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let cmd = parts.next()?;

    match cmd {
        "quit" | "exit" => Some(MetaCommand::Quit),
        "clear" => Some(MetaCommand::Clear),
        "help" => {
            let command = parts.next().map(|s| s.trim().to_string());
            Some(MetaCommand::Help { command })
        }
        _ => None,
    }
}

/// Convert clap ArgMatches into a store Command.
pub fn matches_to_command(matches: &ArgMatches) -> Result<Command, String> {
    let (sub_name, m) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    match sub_name {
        "set" => Ok(Command::Set {
            key: required(m, "key"),
            value: required(m, "value"),
        }),
        "get" => Ok(Command::Get {
            key: required(m, "key"),
        }),
        "del" => Ok(Command::Delete {
            key: required(m, "key"),
        }),
        "count" => Ok(Command::Count {
            value: required(m, "value"),
        }),
        "begin" => Ok(Command::Begin),
        "commit" => Ok(Command::Commit),
        "rollback" => Ok(Command::Rollback),
        other => Err(format!("Unknown command: {}", other)),
    }
}

/// A one-line rendering of a command, for confirmation prompts.
pub fn describe(command: &Command) -> String {
    match command {
        Command::Set { key, value } => format!("set {} {}", key, value),
        Command::Get { key } => format!("get {}", key),
        Command::Delete { key } => format!("del {}", key),
        Command::Count { value } => format!("count {}", value),
        Command::Begin | Command::Commit | Command::Rollback => command.name().to_string(),
    }
}

fn required(m: &ArgMatches, name: &str) -> String {
    // clap enforces .required(true) before we get here
    m.get_one::<String>(name).cloned().unwrap_or_default()
}
