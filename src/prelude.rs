//! Convenient imports for nestkv.
//!
//! ```
//! use nestkv::prelude::*;
//!
//! let db = NestKv::new();
//! db.set("key", "value")?;
//! # Ok::<(), nestkv::Error>(())
//! ```

// Main entry point
pub use crate::store::NestKv;

// Error handling
pub use crate::error::{Error, Result};

// Dispatch surface
pub use nestkv_executor::{Command, Executor, Output};
