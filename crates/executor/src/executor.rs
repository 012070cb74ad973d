//! The command executor.

use nestkv_engine::TransactionalStore;
use parking_lot::Mutex;
use tracing::trace;

use crate::{Command, Output, Result};

/// Executes [`Command`]s against an owned [`TransactionalStore`].
///
/// The store itself is single-threaded by design and holds no lock; the
/// executor is the serialization point. Each `execute` call takes one
/// exclusive lock for the duration of one synchronous state transition,
/// so an `Executor` behind an `Arc` is safe to share across threads.
pub struct Executor {
    store: Mutex<TransactionalStore>,
}

impl Executor {
    /// Create an executor over a fresh, empty store.
    pub fn new() -> Self {
        Self::with_store(TransactionalStore::new())
    }

    /// Create an executor over an existing store.
    pub fn with_store(store: TransactionalStore) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    /// Execute one command and return its output.
    ///
    /// This is the single dispatch entry point: every operation in the
    /// store's contract flows through here, and this is the one place the
    /// error taxonomy is enforced.
    pub fn execute(&self, command: Command) -> Result<Output> {
        trace!(op = command.name(), "dispatch");
        let mut store = self.store.lock();
        match command {
            Command::Set { key, value } => {
                store.set(key, value);
                Ok(Output::Unit)
            }
            Command::Get { key } => Ok(Output::Maybe(store.get(&key).map(str::to_string))),
            Command::Delete { key } => {
                store.delete(&key);
                Ok(Output::Unit)
            }
            Command::Count { value } => Ok(Output::Count(store.count(&value) as u64)),
            Command::Begin => {
                store.begin();
                Ok(Output::Unit)
            }
            Command::Commit => {
                store.commit()?;
                Ok(Output::Unit)
            }
            Command::Rollback => {
                store.rollback()?;
                Ok(Output::Unit)
            }
        }
    }

    /// Current transaction nesting depth (1 = no open transaction).
    pub fn depth(&self) -> usize {
        self.store.lock().depth()
    }

    /// Whether a transaction is currently open.
    pub fn in_transaction(&self) -> bool {
        self.store.lock().in_transaction()
    }
}

impl Default for Executor {
    fn default() -> Self {
        Self::new()
    }
}
