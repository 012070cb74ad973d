//! Dispatch error types.

use nestkv_engine::StoreError;
use thiserror::Error;

/// Errors surfaced by command dispatch.
///
/// Key absence is never an error: `Get` of a missing key yields
/// `Output::Maybe(None)` and `Delete` of a missing key is a no-op.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// `Commit` or `Rollback` was dispatched with no open transaction.
    /// The store is left unchanged; retrying without a `Begin` first will
    /// fail again.
    #[error("no active transaction")]
    NoActiveTransaction,

    /// A command produced an output shape it never should have. Indicates
    /// a bug in the dispatch layer, not bad input.
    #[error("internal error: {reason}")]
    Internal {
        /// What went wrong.
        reason: String,
    },
}

/// Result type for dispatch operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<StoreError> for Error {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NoActiveTransaction => Error::NoActiveTransaction,
        }
    }
}
