//! Person model

use super::Event;
use serde::Deserialize;

/// Represents a person in a family tree
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Person {
    /// Identifier, taken from the key under `people` (e.g. "alice")
    #[serde(skip)]
    pub id: String,

    /// Full name; Western names are written "Surname, Given"
    pub fullname: Option<String>,

    /// Short name, used when no full name is given
    pub name: Option<String>,

    /// Birth
    pub born: Event,

    /// Death
    pub died: Event,

    /// Related URLs; the first one makes the node clickable
    pub links: Vec<String>,

    /// Picture filenames; the first one is shown in the node
    pub pics: Vec<String>,

    /// Extra style classes applied to this person's node
    #[serde(rename = "class")]
    pub class_: Vec<String>,
}

impl Person {
    /// Create a person with only an identifier
    #[must_use]
    pub fn new(id: String) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Substitute for a person that is referenced but never described
    ///
    /// The identifier doubles as the display name; no dates, links or pictures.
    #[must_use]
    pub fn placeholder(id: &str) -> Self {
        Self {
            id: id.to_string(),
            fullname: Some(id.to_string()),
            ..Self::default()
        }
    }

    /// Full name, else short name; empty strings count as missing
    #[must_use]
    pub fn stated_name(&self) -> Option<&str> {
        fn non_empty(name: &Option<String>) -> Option<&str> {
            name.as_deref().filter(|name| !name.is_empty())
        }
        non_empty(&self.fullname).or_else(|| non_empty(&self.name))
    }

    /// Name to show: full name, else short name, else the identifier
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.stated_name().unwrap_or(&self.id)
    }

    /// First link, if any
    #[must_use]
    pub fn href(&self) -> Option<&str> {
        self.links.first().map(String::as_str)
    }

    /// First picture, if any
    #[must_use]
    pub fn picture(&self) -> Option<&str> {
        self.pics.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_precedence() {
        let mut person = Person::new("p1".to_string());
        assert_eq!(person.display_name(), "p1");

        person.name = Some("Ann".to_string());
        assert_eq!(person.display_name(), "Ann");

        person.fullname = Some("Smith, Ann".to_string());
        assert_eq!(person.display_name(), "Smith, Ann");
    }

    #[test]
    fn test_empty_fullname_falls_back_to_name() {
        let mut person = Person::new("p1".to_string());
        person.fullname = Some(String::new());
        assert_eq!(person.stated_name(), None);
        assert_eq!(person.display_name(), "p1");

        person.name = Some("Ann".to_string());
        assert_eq!(person.stated_name(), Some("Ann"));
        assert_eq!(person.display_name(), "Ann");
    }

    #[test]
    fn test_placeholder() {
        let person = Person::placeholder("ghost");
        assert_eq!(person.display_name(), "ghost");
        assert!(person.born.is_absent());
        assert!(person.died.is_absent());
        assert!(person.href().is_none());
        assert!(person.picture().is_none());
    }

    #[test]
    fn test_parse_class_key() {
        let person: Person = serde_yaml::from_str(
            "fullname: Doe, Jane\nclass: [adopted, notable]\npics: [jane.jpg]\n",
        )
        .unwrap();
        assert_eq!(person.class_, vec!["adopted", "notable"]);
        assert_eq!(person.picture(), Some("jane.jpg"));
    }
}
