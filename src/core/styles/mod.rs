//! Style classes for graph elements
//!
//! A style class is a named set of Graphviz attributes. Classes come from a
//! built-in catalog and may be overridden per document; the resolver merges
//! several of them into the attribute lines of one element.

pub mod catalog;
pub mod resolver;
pub mod value;

pub use catalog::StyleCatalog;
pub use resolver::{serialize, StyleResolver};
pub use value::StyleValue;

use indexmap::IndexMap;

/// Attribute name to value, in insertion order
pub type StyleSet = IndexMap<String, StyleValue>;

/// Build a style set from literal pairs
#[must_use]
pub fn style_set<const N: usize>(pairs: [(&str, StyleValue); N]) -> StyleSet {
    pairs
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}
