//! CLI subcommand implementations.
//!
//! Each module exposes a `run_*` function returning data (used by tests)
//! and an `execute` function that prints it in the requested format.

pub mod plan;
pub mod script;
pub mod totals;
