//! Shared library for `Nissaga`
//! Turns a YAML family tree into a Graphviz document, used by the CLI binary

pub mod config;
pub mod core;
pub mod logger;

pub use core::get_version;
