//! # qa-cli
//!
//! Command-line front end for qa-core.
//!
//! ```text
//! qa-agent totals --item 20.00:2 --code SAVE15 --shipping express
//! qa-agent parse-plan plan.md
//! qa-agent scenario plan.md --id TC-001
//! qa-agent clean-script generated.py
//! ```
//!
//! The library target exists so integration tests can call the `run_*`
//! functions directly.

pub mod commands;
pub mod config;
pub mod output;

pub use config::{CliConfig, ConfigError};
pub use output::OutputFormat;
