//! Built-in style classes

use super::StyleSet;
use indexmap::IndexMap;
use std::sync::LazyLock;

/// Default style classes compiled into the binary
const DEFAULT_STYLES: &str = include_str!("../../../assets/DefaultStyles.yaml");

static BUILTIN: LazyLock<StyleCatalog> = LazyLock::new(StyleCatalog::from_defaults);

/// Named attribute sets, keyed by class name (e.g. ":node")
#[derive(Debug, Clone, Default)]
pub struct StyleCatalog {
    classes: IndexMap<String, StyleSet>,
}

impl StyleCatalog {
    /// Shared catalog of built-in classes
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Parse a catalog from YAML text
    ///
    /// # Errors
    /// Returns an error if the YAML is not a mapping of class name to attributes
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        Ok(Self {
            classes: serde_yaml::from_str(yaml)?,
        })
    }

    /// Build the catalog from the compiled-in defaults
    ///
    /// # Panics
    /// Panics if the compiled-in default styles cannot be parsed
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_yaml(DEFAULT_STYLES).expect("Failed to parse compiled-in default styles")
    }

    /// Attributes for a class, if the catalog defines it
    #[must_use]
    pub fn get(&self, class: &str) -> Option<&StyleSet> {
        self.classes.get(class)
    }

    /// Class names in definition order
    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::styles::StyleValue;

    #[test]
    fn test_defaults_parse() {
        let catalog = StyleCatalog::from_defaults();
        for class in [
            ":edge",
            ":house",
            ":house-2",
            ":family",
            ":node",
            ":digraph",
            ":union",
            ":children",
            ":parent-link",
            ":parent2-link",
            ":parent-child-link",
            ":child-link",
            ":child2-link",
        ] {
            assert!(catalog.get(class).is_some(), "missing builtin class {class}");
        }
        assert_eq!(catalog.class_names().count(), 13);
    }

    #[test]
    fn test_default_values() {
        let node = StyleCatalog::builtin().get(":node").unwrap();
        assert_eq!(node.get("shape"), Some(&StyleValue::from("box")));
        assert_eq!(node.get("width"), Some(&StyleValue::Integer(0)));

        let edge = StyleCatalog::builtin().get(":edge").unwrap();
        assert_eq!(edge.get("dir"), Some(&StyleValue::from("none")));
    }

    #[test]
    fn test_unknown_class() {
        assert!(StyleCatalog::builtin().get(":nope").is_none());
    }
}
