//! Style cascade: merges catalog, document and computed attributes

use super::{StyleCatalog, StyleSet};
use crate::core::models::Tree;

/// Resolves style classes for one document
///
/// Later sources win per attribute: `pre`, then for each class in order the
/// catalog entry followed by the document's own override, then `post`.
/// Unknown classes contribute nothing.
#[derive(Debug, Clone, Copy)]
pub struct StyleResolver<'a> {
    tree: &'a Tree,
    catalog: &'a StyleCatalog,
}

impl<'a> StyleResolver<'a> {
    /// Resolver over the built-in catalog
    #[must_use]
    pub fn new(tree: &'a Tree) -> Self {
        Self::with_catalog(tree, StyleCatalog::builtin())
    }

    /// Resolver over a custom catalog
    #[must_use]
    pub const fn with_catalog(tree: &'a Tree, catalog: &'a StyleCatalog) -> Self {
        Self { tree, catalog }
    }

    /// Merge the given classes into one attribute set
    #[must_use]
    pub fn resolve(&self, classes: &[&str], pre: &StyleSet, post: &StyleSet) -> StyleSet {
        let mut result = pre.clone();
        for class in classes {
            if let Some(defaults) = self.catalog.get(class) {
                merge(&mut result, defaults);
            }
            if let Some(overrides) = self.tree.styles.get(*class) {
                merge(&mut result, overrides);
            }
        }
        merge(&mut result, post);
        result
    }

    /// Resolve classes without computed attributes and serialize them
    #[must_use]
    pub fn apply(&self, classes: &[&str]) -> Vec<String> {
        serialize(&self.resolve(classes, &StyleSet::new(), &StyleSet::new()))
    }

    /// Resolve classes on top of computed defaults and serialize them
    #[must_use]
    pub fn apply_pre(&self, classes: &[&str], pre: &StyleSet) -> Vec<String> {
        serialize(&self.resolve(classes, pre, &StyleSet::new()))
    }

    /// Resolve classes under computed overrides and serialize them
    #[must_use]
    pub fn apply_post(&self, classes: &[&str], post: &StyleSet) -> Vec<String> {
        serialize(&self.resolve(classes, &StyleSet::new(), post))
    }
}

fn merge(target: &mut StyleSet, source: &StyleSet) {
    for (name, value) in source {
        target.insert(name.clone(), value.clone());
    }
}

/// One `name=value` line per attribute, skipping omitted ones
#[must_use]
pub fn serialize(styles: &StyleSet) -> Vec<String> {
    styles
        .iter()
        .filter(|(_, value)| !value.is_omit())
        .map(|(name, value)| format!("{name}={}", value.escape()))
        .collect()
}
