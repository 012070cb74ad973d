//! Engine error types.

use thiserror::Error;

/// Errors raised by [`crate::TransactionalStore`].
///
/// The store has exactly one failure mode: closing a transaction that was
/// never opened. Every other operation succeeds unconditionally — key
/// absence is a normal result, not an error.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// `commit` or `rollback` was called with only the root frame on the
    /// stack. The store state is left unchanged.
    #[error("no active transaction")]
    NoActiveTransaction,
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, StoreError>;
