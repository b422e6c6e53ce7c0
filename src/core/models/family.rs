//! Family model

use super::Event;
use serde::{Deserialize, Deserializer};

/// A couple (or single parent) with their children and descendant branches
///
/// Parents and children are person identifiers; they are not checked against
/// the tree's `people` when loading.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Family {
    /// Parent identifiers, usually zero to two
    pub parents: Vec<String>,

    /// Child identifiers
    pub children: Vec<String>,

    /// Marriage
    pub married: Event,

    /// Divorce
    pub divorced: Event,

    /// Name of the house, drawn as a banner around the family
    pub house: Option<String>,

    /// Descendant families nested under this one
    #[serde(deserialize_with = "nullable_families")]
    pub families: Vec<Self>,
}

impl Family {
    /// Create a family from parent and child identifiers
    #[must_use]
    pub const fn new(parents: Vec<String>, children: Vec<String>) -> Self {
        Self {
            parents,
            children,
            married: Event::Absent,
            divorced: Event::Absent,
            house: None,
            families: Vec::new(),
        }
    }

    /// Add a nested family
    pub fn add_family(&mut self, family: Self) {
        self.families.push(family);
    }

    /// All person identifiers referenced by this family and its descendants,
    /// in document order (may repeat)
    #[must_use]
    pub fn referenced_ids(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        self.collect_ids(&mut ids);
        ids
    }

    fn collect_ids<'a>(&'a self, ids: &mut Vec<&'a str>) {
        for family in &self.families {
            family.collect_ids(ids);
        }
        ids.extend(self.parents.iter().map(String::as_str));
        ids.extend(self.children.iter().map(String::as_str));
    }
}

/// Load a list of families where `null` entries stand for empty families
///
/// # Errors
/// Returns an error if an entry is neither null nor a family mapping
pub fn nullable_families<'de, D>(deserializer: D) -> Result<Vec<Family>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries: Option<Vec<Option<Family>>> = Option::deserialize(deserializer)?;
    Ok(entries
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_referenced_ids_follow_render_order() {
        let mut family = Family::new(vec!["mom".into(), "dad".into()], vec!["kid".into()]);
        family.add_family(Family::new(vec!["kid".into()], vec!["grandkid".into()]));

        assert_eq!(
            family.referenced_ids(),
            vec!["kid", "grandkid", "mom", "dad", "kid"]
        );
    }

    #[test]
    fn test_null_subfamily_becomes_empty() {
        let family: Family = serde_yaml::from_str("parents: [a]\nfamilies:\n  - ~\n").unwrap();
        assert_eq!(family.families, vec![Family::default()]);
    }

    #[test]
    fn test_marriage_parses_as_event() {
        let family: Family = serde_yaml::from_str("married: 1990-06-01\ndivorced: 0\n").unwrap();
        assert!(matches!(family.married, Event::On(_)));
        assert_eq!(family.divorced, Event::DidNotHappen);
    }
}
