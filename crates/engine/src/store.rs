//! The transactional key-value store.
//!
//! # Design
//!
//! State is an ordered stack of frames. The bottom (root) frame is created
//! at construction and is never popped; the top frame is the view every
//! operation acts on. `begin` pushes a full copy of the top frame, `commit`
//! pops the top and merges its entries into the new top (overwrite by key),
//! `rollback` pops and discards. The stack depth IS the state machine:
//! `begin` is the only depth-increasing transition, `commit`/`rollback` the
//! only depth-decreasing ones, and depth 1 is both the initial and the
//! recurring idle state.
//!
//! # Trade-off
//!
//! Copying the whole frame on `begin` makes `get`/`set`/`delete`/`count`
//! single-frame operations with no fallthrough chain to walk, at the cost
//! of O(frame) time and space per open transaction. An overlay chain would
//! invert that trade; the benchmarks in the root crate track the cost of
//! the chosen one.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::{Result, StoreError};

/// One mapping snapshot, corresponding to one transaction nesting level.
///
/// FxHashMap over the default hasher: keys are short user strings, lookups
/// are the hot path, and nothing here needs DoS-resistant hashing.
pub type Frame = FxHashMap<String, String>;

/// In-memory key-value store with nested transactions.
///
/// Keys and values are opaque strings. Reads and writes always reflect the
/// innermost open transaction; `commit` and `rollback` fail with
/// [`StoreError::NoActiveTransaction`] when no transaction is open.
///
/// The store is an explicitly owned value with no interior locking — a
/// single logical thread of control is assumed. Callers that need to share
/// it across threads serialize access themselves (the executor crate wraps
/// it in one mutex).
///
/// # Example
///
/// ```
/// use nestkv_engine::TransactionalStore;
///
/// let mut store = TransactionalStore::new();
/// store.set("a", "1");
/// store.begin();
/// store.set("a", "2");
/// assert_eq!(store.get("a"), Some("2"));
/// store.rollback()?;
/// assert_eq!(store.get("a"), Some("1"));
/// # Ok::<(), nestkv_engine::StoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TransactionalStore {
    /// Frame stack; index 0 is the root frame, last is the active frame.
    /// Invariant: never empty.
    frames: Vec<Frame>,
}

impl TransactionalStore {
    /// Create a store with an empty root frame and no open transaction.
    pub fn new() -> Self {
        Self {
            frames: vec![Frame::default()],
        }
    }

    // =========================================================================
    // Data operations (active frame only)
    // =========================================================================

    /// Set a key to a value in the active frame, overwriting any previous
    /// value. Never fails.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.top_mut().insert(key.into(), value.into());
    }

    /// Look up a key in the active frame.
    ///
    /// Returns `None` if the key is not present. Absence is a normal
    /// outcome, observably distinct from a present empty-string value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.top().get(key).map(String::as_str)
    }

    /// Remove a key from the active frame, returning the value it held.
    ///
    /// Deleting an absent key is a no-op and returns `None`; it is not an
    /// error, so `delete` composes with `get`'s absence-as-value contract.
    pub fn delete(&mut self, key: &str) -> Option<String> {
        self.top_mut().remove(key)
    }

    /// Count the entries in the active frame whose value equals `value`.
    ///
    /// A full scan of the active frame; 0 if no entry matches.
    pub fn count(&self, value: &str) -> usize {
        self.top().values().filter(|v| *v == value).count()
    }

    // =========================================================================
    // Transaction lifecycle
    // =========================================================================

    /// Open a transaction: push a full copy of the active frame.
    ///
    /// O(frame) time and space. Never fails; nesting is unbounded.
    pub fn begin(&mut self) {
        let snapshot = self.top().clone();
        self.frames.push(snapshot);
        debug!(depth = self.depth(), "transaction opened");
    }

    /// Commit the innermost transaction: pop the active frame and merge its
    /// entries into the parent, overwriting by key.
    ///
    /// Note the merge is entry-wise: a key deleted inside the transaction
    /// that still exists in the parent survives the commit. Fails with
    /// [`StoreError::NoActiveTransaction`] at depth 1, leaving the root
    /// frame untouched.
    pub fn commit(&mut self) -> Result<()> {
        if !self.in_transaction() {
            return Err(StoreError::NoActiveTransaction);
        }
        let committed = self.frames.pop().expect("depth checked above");
        self.top_mut().extend(committed);
        debug!(depth = self.depth(), "transaction committed");
        Ok(())
    }

    /// Roll back the innermost transaction: pop and discard the active
    /// frame, restoring the parent exactly as it was at `begin`.
    ///
    /// Fails with [`StoreError::NoActiveTransaction`] at depth 1, leaving
    /// the root frame untouched.
    pub fn rollback(&mut self) -> Result<()> {
        if !self.in_transaction() {
            return Err(StoreError::NoActiveTransaction);
        }
        self.frames.pop();
        debug!(depth = self.depth(), "transaction rolled back");
        Ok(())
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    /// Number of frames on the stack. Depth 1 means no transaction is open.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Whether a transaction is currently open.
    pub fn in_transaction(&self) -> bool {
        self.frames.len() > 1
    }

    /// Number of entries in the active frame.
    pub fn len(&self) -> usize {
        self.top().len()
    }

    /// Whether the active frame holds no entries.
    pub fn is_empty(&self) -> bool {
        self.top().is_empty()
    }

    fn top(&self) -> &Frame {
        self.frames.last().expect("root frame is never popped")
    }

    fn top_mut(&mut self) -> &mut Frame {
        self.frames.last_mut().expect("root frame is never popped")
    }
}

impl Default for TransactionalStore {
    fn default() -> Self {
        Self::new()
    }
}
