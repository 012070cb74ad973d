//! Unified error types for nestkv.
//!
//! The facade and the dispatch layer share one error type: there are only
//! two failure kinds in the whole system, and hiding one enum behind
//! another would add mapping code with nothing to map.
//!
//! - [`Error::NoActiveTransaction`] — `commit`/`rollback` with only the
//!   root frame on the stack; the store is left unchanged.
//! - [`Error::Internal`] — a command produced an impossible output shape;
//!   a bug, never user input.
//!
//! Key absence on `get`/`delete` is NOT an error: `get` returns
//! `Ok(None)` and `delete` of an absent key is a no-op.

pub use nestkv_executor::{Error, Result};
