//! clap command tree.

use clap::{Arg, ArgAction, Command};

/// Build the CLI command tree.
///
/// The same tree serves shell mode (`nestkv set k v`) and the REPL, which
/// re-parses each input line against it with `no_binary_name`.
pub fn build_cli() -> Command {
    Command::new("nestkv")
        .about("Transactional in-memory key-value store")
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print results as JSON"),
        )
        .arg(
            Arg::new("raw")
                .long("raw")
                .action(ArgAction::SetTrue)
                .help("Print bare values with no decoration"),
        )
        .arg(
            Arg::new("yes")
                .long("yes")
                .short('y')
                .action(ArgAction::SetTrue)
                .help("Skip confirmation prompts for destructive commands"),
        )
        .subcommand(
            Command::new("set")
                .about("Set a key to a value, overwriting any previous value")
                .arg(Arg::new("key").required(true))
                .arg(Arg::new("value").required(true)),
        )
        .subcommand(
            Command::new("get")
                .about("Get the value for a key; prints (nil) if absent")
                .arg(Arg::new("key").required(true)),
        )
        .subcommand(
            Command::new("del")
                .alias("delete")
                .about("Delete a key; deleting an absent key is a no-op")
                .arg(Arg::new("key").required(true)),
        )
        .subcommand(
            Command::new("count")
                .about("Count the keys currently mapped to a value")
                .arg(Arg::new("value").required(true)),
        )
        .subcommand(
            Command::new("begin").about("Open a transaction (transactions nest arbitrarily deep)"),
        )
        .subcommand(
            Command::new("commit")
                .about("Merge the innermost transaction into its parent and close it"),
        )
        .subcommand(
            Command::new("rollback").about("Discard the innermost transaction and close it"),
        )
}
