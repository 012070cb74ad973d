//! Command and output types for the dispatch surface.
//!
//! Serde derives give both enums a stable JSON shape (`{"op": "set", ...}`)
//! so commands can cross a text boundary — the CLI's `--json` mode prints
//! outputs in exactly this framing.

use serde::{Deserialize, Serialize};

/// One request against the store.
///
/// The seven operations, as data. `Set`/`Delete`/`Count` carry their
/// operands; the transaction commands carry nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    /// Map `key` to `value` in the active frame, overwriting.
    Set {
        /// Key to write.
        key: String,
        /// Value to store.
        value: String,
    },
    /// Look up `key` in the active frame.
    Get {
        /// Key to read.
        key: String,
    },
    /// Remove `key` from the active frame; no-op if absent.
    Delete {
        /// Key to remove.
        key: String,
    },
    /// Count entries in the active frame whose value equals `value`.
    Count {
        /// Value to match.
        value: String,
    },
    /// Open a transaction (push a copy of the active frame).
    Begin,
    /// Merge the active frame into its parent and close the transaction.
    Commit,
    /// Discard the active frame and close the transaction.
    Rollback,
}

impl Command {
    /// Stable lowercase name of the operation, for logs and prompts.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Set { .. } => "set",
            Command::Get { .. } => "get",
            Command::Delete { .. } => "delete",
            Command::Count { .. } => "count",
            Command::Begin => "begin",
            Command::Commit => "commit",
            Command::Rollback => "rollback",
        }
    }

    /// Whether the command destroys state the caller might want to keep.
    ///
    /// Collaborators use this to decide on confirmation prompts; the store
    /// itself attaches no meaning to it.
    pub fn is_destructive(&self) -> bool {
        matches!(
            self,
            Command::Delete { .. } | Command::Commit | Command::Rollback
        )
    }
}

/// Successful result of one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", content = "data", rename_all = "snake_case")]
pub enum Output {
    /// The command succeeded and yields nothing
    /// (`Set`/`Delete`/`Begin`/`Commit`/`Rollback`).
    Unit,
    /// A `Get` result; `None` means the key is absent, which is a normal
    /// outcome and distinct from a present empty string.
    Maybe(Option<String>),
    /// A `Count` result.
    Count(u64),
}
