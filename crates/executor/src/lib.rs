//! Command execution layer for nestkv.
//!
//! This crate is the store's single dispatch surface: a tagged [`Command`]
//! goes in, an [`Output`] or an [`Error`] comes out. Collaborator layers
//! (the facade, the CLI) build commands and interpret outputs; they never
//! touch frames directly.

#![warn(missing_docs)]

mod command;
mod error;
mod executor;

pub use command::{Command, Output};
pub use error::{Error, Result};
pub use executor::Executor;
