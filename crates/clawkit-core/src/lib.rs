//! # clawkit-core
//!
//! Core types and errors shared by the clawkit crates. This crate defines the
//! vocabulary used by the scanner, the remote lookup, the ledger and the CLI.

pub mod error;
pub mod types;

pub use error::{KitError, Result};
pub use types::*;
