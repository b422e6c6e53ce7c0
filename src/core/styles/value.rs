//! Graphviz attribute values

use serde::de::{self, Deserialize, Deserializer};
use std::fmt;

/// A single attribute value in a style class
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// Text, quoted on output
    Text(String),
    /// Whole number, written verbatim
    Integer(i64),
    /// Decimal number, written verbatim
    Float(f64),
    /// Boolean, written as `true`/`false`
    Bool(bool),
    /// Remove the attribute from the output (`null` in YAML)
    Omit,
}

impl StyleValue {
    /// Whether this value suppresses its attribute
    #[must_use]
    pub const fn is_omit(&self) -> bool {
        matches!(self, Self::Omit)
    }

    /// Graphviz source form: text is double-quoted, everything else is verbatim
    #[must_use]
    pub fn escape(&self) -> String {
        match self {
            Self::Text(text) => format!("\"{text}\""),
            Self::Integer(value) => value.to_string(),
            Self::Float(value) => value.to_string(),
            Self::Bool(value) => value.to_string(),
            Self::Omit => String::new(),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<i64> for StyleValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for StyleValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.escape())
    }
}

impl<'de> Deserialize<'de> for StyleValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StyleValueVisitor;
        impl<'de> de::Visitor<'de> for StyleValueVisitor {
            type Value = StyleValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string, number, boolean or null")
            }

            fn visit_bool<E>(self, value: bool) -> Result<StyleValue, E>
            where
                E: de::Error,
            {
                Ok(StyleValue::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<StyleValue, E>
            where
                E: de::Error,
            {
                Ok(StyleValue::Integer(value))
            }

            #[allow(clippy::cast_precision_loss)]
            fn visit_u64<E>(self, value: u64) -> Result<StyleValue, E>
            where
                E: de::Error,
            {
                Ok(i64::try_from(value)
                    .map_or(StyleValue::Float(value as f64), StyleValue::Integer))
            }

            fn visit_f64<E>(self, value: f64) -> Result<StyleValue, E>
            where
                E: de::Error,
            {
                Ok(StyleValue::Float(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<StyleValue, E>
            where
                E: de::Error,
            {
                Ok(StyleValue::Text(value.to_string()))
            }

            fn visit_unit<E>(self) -> Result<StyleValue, E>
            where
                E: de::Error,
            {
                Ok(StyleValue::Omit)
            }

            fn visit_none<E>(self) -> Result<StyleValue, E>
            where
                E: de::Error,
            {
                Ok(StyleValue::Omit)
            }
        }
        deserializer.deserialize_any(StyleValueVisitor)
    }
}
