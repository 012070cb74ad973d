//! Transactional frame-stack engine.
//!
//! This crate holds the one real component of nestkv: [`TransactionalStore`],
//! an in-memory string-to-string map with arbitrarily nested transactions.
//! Everything else in the workspace (command dispatch, facade, CLI) is a
//! consumer of this type.

#![warn(missing_docs)]

mod error;
mod store;

pub use error::{Result, StoreError};
pub use store::{Frame, TransactionalStore};
