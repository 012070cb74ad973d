//! # nestkv
//!
//! Embedded in-memory key-value store with nested transactions.
//!
//! Transactions stack arbitrarily deep: `begin` opens a new level, `commit`
//! folds the innermost level into its parent, `rollback` discards it. Reads
//! and writes always see the innermost open transaction. Keys and values
//! are opaque strings.
//!
//! ## Quick Start
//!
//! ```
//! use nestkv::prelude::*;
//!
//! let db = NestKv::new();
//!
//! db.set("a", "1")?;
//! db.begin()?;
//! db.set("a", "2")?;
//! assert_eq!(db.get("a")?, Some("2".to_string()));
//!
//! db.rollback()?;
//! assert_eq!(db.get("a")?, Some("1".to_string()));
//! # Ok::<(), nestkv::Error>(())
//! ```
//!
//! ## Layers
//!
//! - [`NestKv`] — typed facade; the API most callers want.
//! - [`Command`] / [`Output`] / [`Executor`] — the tagged dispatch surface
//!   underneath it, for callers that route operations as data (the CLI
//!   does).
//! - `nestkv-engine` — the frame-stack store itself.

#![warn(missing_docs)]

mod error;
mod store;

pub mod prelude;

// Re-export main entry points
pub use error::{Error, Result};
pub use store::NestKv;

// Re-export the dispatch surface
pub use nestkv_executor::{Command, Executor, Output};

// Re-export the engine for callers that want the bare store
pub use nestkv_engine::{StoreError, TransactionalStore};
