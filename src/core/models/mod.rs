//! Data models for `Nissaga`

pub mod event;
pub mod family;
pub mod person;
pub mod tree;

pub use event::Event;
pub use family::{nullable_families, Family};
pub use person::Person;
pub use tree::Tree;
