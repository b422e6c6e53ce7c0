//! Core genealogy-to-graph functionality

pub mod loader;
pub mod locale;
pub mod models;
pub mod render;
pub mod styles;

/// Returns the current version of the `Nissaga` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
