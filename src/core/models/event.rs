//! Life events (birth, death, marriage, divorce)
//!
//! Source documents mark events loosely: a date, a bare `true`/`false`, a
//! legacy `1`/`0`, free text, or nothing at all. `Event` keeps those cases
//! apart so the renderer never compares booleans against integers.

use chrono::NaiveDate;
use serde::de::{self, Deserialize, Deserializer};
use std::fmt;

/// Date format accepted for exact dates in source documents
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A tri-state event field with an optional date
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Event {
    /// Not mentioned in the source
    #[default]
    Absent,
    /// Happened, date unknown (`true` or `1`)
    Happened,
    /// Explicitly did not happen (`false` or `0`)
    DidNotHappen,
    /// Happened on a known calendar date
    On(NaiveDate),
    /// Happened, described by text that is not a calendar date (e.g. "circa 1890")
    Text(String),
}

impl Event {
    /// Create an event from raw text, recognizing ISO dates
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let trimmed = text.trim();
        NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
            .map_or_else(|_| Self::Text(trimmed.to_string()), Self::On)
    }

    /// Whether the source said nothing about this event
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    fn from_integer(value: i128) -> Self {
        match value {
            0 => Self::DidNotHappen,
            1 => Self::Happened,
            other => Self::Text(other.to_string()),
        }
    }
}

impl From<bool> for Event {
    fn from(happened: bool) -> Self {
        if happened {
            Self::Happened
        } else {
            Self::DidNotHappen
        }
    }
}

impl From<NaiveDate> for Event {
    fn from(date: NaiveDate) -> Self {
        Self::On(date)
    }
}

impl<'de> Deserialize<'de> for Event {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EventVisitor;
        impl<'de> de::Visitor<'de> for EventVisitor {
            type Value = Event;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a date like '1926-12-25', a boolean, 0/1, text or null")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Event, E>
            where
                E: de::Error,
            {
                Ok(Event::from(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Event, E>
            where
                E: de::Error,
            {
                Ok(Event::from_integer(i128::from(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Event, E>
            where
                E: de::Error,
            {
                Ok(Event::from_integer(i128::from(value)))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Event, E>
            where
                E: de::Error,
            {
                Ok(Event::Text(value.to_string()))
            }

            fn visit_str<E>(self, value: &str) -> Result<Event, E>
            where
                E: de::Error,
            {
                Ok(Event::from_text(value))
            }

            fn visit_unit<E>(self) -> Result<Event, E>
            where
                E: de::Error,
            {
                Ok(Event::Absent)
            }

            fn visit_none<E>(self) -> Result<Event, E>
            where
                E: de::Error,
            {
                Ok(Event::Absent)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Event, D::Error>
            where
                D: Deserializer<'de>,
            {
                Event::deserialize(deserializer)
            }
        }
        deserializer.deserialize_any(EventVisitor)
    }
}
