//! Typed facade over the command executor.

use crate::error::{Error, Result};
use nestkv_executor::{Command, Executor, Output};

/// The nestkv store.
///
/// A typed wrapper over the command-based dispatch surface. Each method:
///
/// 1. Builds the appropriate [`Command`]
/// 2. Executes it via the [`Executor`]
/// 3. Extracts and returns the typed result
///
/// The instance is explicitly owned — construct it where the application is
/// composed and pass it to whatever needs it. There is no global store.
///
/// # Example
///
/// ```
/// use nestkv::NestKv;
///
/// let db = NestKv::new();
/// db.set("name", "alice")?;
/// assert_eq!(db.get("name")?, Some("alice".to_string()));
/// assert_eq!(db.get("missing")?, None);
/// # Ok::<(), nestkv::Error>(())
/// ```
pub struct NestKv {
    executor: Executor,
}

impl NestKv {
    /// Create a store with an empty root frame and no open transaction.
    pub fn new() -> Self {
        Self {
            executor: Executor::new(),
        }
    }

    /// Get the underlying executor, for command-based dispatch.
    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    /// Execute a raw [`Command`].
    ///
    /// The typed methods below are sugar over this entry point, never a
    /// second semantics.
    pub fn execute(&self, command: Command) -> Result<Output> {
        self.executor.execute(command)
    }

    // =========================================================================
    // Data operations
    // =========================================================================

    /// Set a key to a value, overwriting any previous value.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        match self.executor.execute(Command::Set {
            key: key.to_string(),
            value: value.to_string(),
        })? {
            Output::Unit => Ok(()),
            _ => Err(Error::Internal {
                reason: "Unexpected output for Set".into(),
            }),
        }
    }

    /// Get the value for a key.
    ///
    /// Returns `None` if the key is absent — a normal outcome, not an
    /// error.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        match self.executor.execute(Command::Get {
            key: key.to_string(),
        })? {
            Output::Maybe(value) => Ok(value),
            _ => Err(Error::Internal {
                reason: "Unexpected output for Get".into(),
            }),
        }
    }

    /// Delete a key. Deleting an absent key is a no-op.
    pub fn delete(&self, key: &str) -> Result<()> {
        match self.executor.execute(Command::Delete {
            key: key.to_string(),
        })? {
            Output::Unit => Ok(()),
            _ => Err(Error::Internal {
                reason: "Unexpected output for Delete".into(),
            }),
        }
    }

    /// Count the entries whose value equals `value`.
    pub fn count(&self, value: &str) -> Result<u64> {
        match self.executor.execute(Command::Count {
            value: value.to_string(),
        })? {
            Output::Count(n) => Ok(n),
            _ => Err(Error::Internal {
                reason: "Unexpected output for Count".into(),
            }),
        }
    }

    // =========================================================================
    // Transactions
    // =========================================================================

    /// Open a transaction. Nesting is unbounded.
    pub fn begin(&self) -> Result<()> {
        match self.executor.execute(Command::Begin)? {
            Output::Unit => Ok(()),
            _ => Err(Error::Internal {
                reason: "Unexpected output for Begin".into(),
            }),
        }
    }

    /// Commit the innermost transaction, merging its entries into the
    /// parent frame.
    ///
    /// Fails with [`Error::NoActiveTransaction`] if no transaction is open.
    pub fn commit(&self) -> Result<()> {
        match self.executor.execute(Command::Commit)? {
            Output::Unit => Ok(()),
            _ => Err(Error::Internal {
                reason: "Unexpected output for Commit".into(),
            }),
        }
    }

    /// Roll back the innermost transaction, discarding its changes.
    ///
    /// Fails with [`Error::NoActiveTransaction`] if no transaction is open.
    pub fn rollback(&self) -> Result<()> {
        match self.executor.execute(Command::Rollback)? {
            Output::Unit => Ok(()),
            _ => Err(Error::Internal {
                reason: "Unexpected output for Rollback".into(),
            }),
        }
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    /// Current transaction nesting depth (1 = no open transaction).
    pub fn depth(&self) -> usize {
        self.executor.depth()
    }

    /// Whether a transaction is currently open.
    pub fn in_transaction(&self) -> bool {
        self.executor.in_transaction()
    }
}

impl Default for NestKv {
    fn default() -> Self {
        Self::new()
    }
}
