//! CLI command handlers for `Nissaga`.
//!
//! Each subcommand is implemented in its own submodule.

pub mod config;
pub mod draw;
