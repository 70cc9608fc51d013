//! Typed configuration values.

use std::collections::BTreeMap;

use serde::Serialize;

/// A named configuration mapping. Also used for merged render contexts.
pub type Section = BTreeMap<String, Value>;

/// A single configuration value.
///
/// Serializes untagged, so a [`Section`] maps onto a plain template
/// context object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Array(Vec<Value>),
    Table(Section),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&Section> {
        match self {
            Value::Table(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<toml::Value> for Value {
    fn from(value: toml::Value) -> Self {
        match value {
            toml::Value::String(s) => Value::String(s),
            toml::Value::Integer(i) => Value::Integer(i),
            toml::Value::Float(f) => Value::Float(f),
            toml::Value::Boolean(b) => Value::Boolean(b),
            toml::Value::Datetime(dt) => Value::String(dt.to_string()),
            toml::Value::Array(arr) => Value::Array(arr.into_iter().map(Value::from).collect()),
            toml::Value::Table(table) => Value::Table(section_from_toml(table)),
        }
    }
}

/// Converts a parsed TOML table into a [`Section`].
pub fn section_from_toml(table: toml::Table) -> Section {
    table
        .into_iter()
        .map(|(key, value)| (key, Value::from(value)))
        .collect()
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<Section> for Value {
    fn from(t: Section) -> Self {
        Value::Table(t)
    }
}

impl From<Vec<Value>> for Value {
    fn from(arr: Vec<Value>) -> Self {
        Value::Array(arr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_toml_keeps_nesting() {
        let table: toml::Table = toml::from_str(
            r#"
            [game]
            name = "Pong"
            lives = 3
            speed = 1.5
            debug = false
            levels = ["a", "b"]
            "#,
        )
        .unwrap();

        let section = section_from_toml(table);
        let game = section["game"].as_table().unwrap();
        assert_eq!(game["name"], Value::String("Pong".into()));
        assert_eq!(game["lives"], Value::Integer(3));
        assert_eq!(game["speed"], Value::Float(1.5));
        assert_eq!(game["debug"], Value::Boolean(false));
        assert_eq!(
            game["levels"],
            Value::Array(vec![Value::from("a"), Value::from("b")])
        );
    }

    #[test]
    fn test_datetime_becomes_string() {
        let table: toml::Table = toml::from_str("built = 1979-05-27T07:32:00Z").unwrap();
        let section = section_from_toml(table);
        assert_eq!(section["built"].as_str(), Some("1979-05-27T07:32:00Z"));
    }
}
