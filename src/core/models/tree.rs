//! Family tree model (the whole document)

use super::{nullable_families, Family, Person};
use crate::core::styles::StyleSet;
use indexmap::{IndexMap, IndexSet};
use serde::Deserialize;

/// A complete genealogy document
///
/// Owns every person and family. Families refer to people by identifier only,
/// so a tree may reference people it never describes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Tree {
    /// People keyed by identifier; a `null` entry is declared but undescribed
    pub people: IndexMap<String, Option<Person>>,

    /// Top-level families
    #[serde(deserialize_with = "nullable_families")]
    pub families: Vec<Family>,

    /// Style overrides keyed by class name (e.g. ":node", "adopted")
    pub styles: IndexMap<String, StyleSet>,
}

impl Tree {
    /// Create a new empty tree
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a tree from YAML text and assign person identifiers from their keys
    ///
    /// A document that is empty or holds only comments is an empty tree.
    ///
    /// # Errors
    /// Returns an error if the text is not a valid genealogy document
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        let value: serde_yaml::Value = serde_yaml::from_str(yaml)?;
        let mut tree: Self = if value.is_null() {
            Self::default()
        } else {
            serde_yaml::from_value(value)?
        };
        for (id, person) in &mut tree.people {
            if let Some(person) = person {
                person.id.clone_from(id);
            }
        }
        Ok(tree)
    }

    /// Add a person, keyed by their identifier
    pub fn add_person(&mut self, person: Person) {
        self.people.insert(person.id.clone(), Some(person));
    }

    /// Add a top-level family
    pub fn add_family(&mut self, family: Family) {
        self.families.push(family);
    }

    /// Look up a described person by identifier
    #[must_use]
    pub fn get_person(&self, id: &str) -> Option<&Person> {
        self.people.get(id).and_then(Option::as_ref)
    }

    /// Identifiers referenced by some family but missing from `people`,
    /// deduplicated in first-reference order
    #[must_use]
    pub fn dangling_ids(&self) -> Vec<&str> {
        let mut seen = IndexSet::new();
        for family in &self.families {
            for id in family.referenced_ids() {
                if !id.is_empty() && !self.people.contains_key(id) {
                    seen.insert(id);
                }
            }
        }
        seen.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_yaml_assigns_ids() {
        let tree = Tree::from_yaml_str(
            "people:\n  alice:\n    fullname: Liddell, Alice\n  bob:\n  carol: {}\n",
        )
        .unwrap();

        assert_eq!(tree.people.len(), 3);
        assert_eq!(tree.get_person("alice").unwrap().id, "alice");
        assert!(tree.get_person("bob").is_none());
        assert_eq!(tree.get_person("carol").unwrap().display_name(), "carol");
    }

    #[test]
    fn test_empty_document() {
        for yaml in ["{}", "# nothing yet\n"] {
            let tree = Tree::from_yaml_str(yaml).unwrap();
            assert!(tree.people.is_empty());
            assert!(tree.families.is_empty());
            assert!(tree.styles.is_empty());
        }
    }

    #[test]
    fn test_dangling_ids() {
        let mut tree = Tree::new();
        tree.add_person(Person::new("mom".to_string()));
        let mut family = Family::new(vec!["mom".into(), "dad".into()], vec!["kid".into()]);
        family.add_family(Family::new(vec!["kid".into()], vec![]));
        tree.add_family(family);

        assert_eq!(tree.dangling_ids(), vec!["kid", "dad"]);
    }
}
