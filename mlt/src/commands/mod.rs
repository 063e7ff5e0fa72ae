//! Command modules for the mlt CLI.
//!
//! Each subcommand is implemented in its own file and exposes an args struct
//! plus a `run_*` entry point that writes its report to a caller-supplied
//! writer.

pub mod common;

pub mod check;
pub mod tokens;

// Re-export command types and functions
pub use check::{run_check, CheckArgs};
pub use tokens::{run_tokens, TokensArgs};
