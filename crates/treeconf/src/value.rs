//! Configuration value types
//!
//! A configuration tree is composed of ordered mappings (string key to
//! value) and sequences, with scalar leaves. `Null` doubles as the absent
//! result of a failed read.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single value in a configuration tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
#[derive(Default)]
pub enum Value {
    /// Null value, also used for absent entries
    #[default]
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// String value
    String(String),
    /// Sequence of values
    Sequence(Vec<Value>),
    /// Ordered mapping of string keys to values
    Mapping(IndexMap<String, Value>),
}

impl Value {
    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if this value is a sequence
    pub fn is_sequence(&self) -> bool {
        matches!(self, Value::Sequence(_))
    }

    /// Check if this value is a mapping
    pub fn is_mapping(&self) -> bool {
        matches!(self, Value::Mapping(_))
    }

    /// Check if this value is a container (mapping or sequence)
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Mapping(_) | Value::Sequence(_))
    }

    /// Get as boolean if this is a Bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as i64 if this is an Integer
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as f64 if this is a Float or Integer
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Get as str if this is a String
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as slice if this is a Sequence
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(s) => Some(s),
            _ => None,
        }
    }

    /// Get as mapping if this is a Mapping
    pub fn as_mapping(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Mapping(m) => Some(m),
            _ => None,
        }
    }

    /// Returns the type name of this value
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Sequence(_) => "sequence",
            Value::Mapping(_) => "mapping",
        }
    }

    /// Recursively merge another value into this one, in place.
    ///
    /// Merge semantics:
    /// - Recursion happens only where both sides hold mappings at the same
    ///   key; sibling keys in the target are preserved.
    /// - Everything else is overwritten wholesale: scalars, sequences, and
    ///   mapping-vs-scalar conflicts all take the source value. Sequences
    ///   are never concatenated or merged element-wise.
    /// - A null in the source overwrites the target entry; it does not
    ///   remove the key.
    pub fn merge(&mut self, source: Value) {
        match (self, source) {
            (Value::Mapping(target), Value::Mapping(source)) => {
                for (key, value) in source {
                    if let Some(existing) = target.get_mut(&key) {
                        if existing.is_mapping() && value.is_mapping() {
                            existing.merge(value);
                        } else {
                            *existing = value;
                        }
                    } else {
                        target.insert(key, value);
                    }
                }
            }
            (this, source) => {
                *this = source;
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", s),
            Value::Sequence(seq) => {
                write!(f, "[")?;
                for (i, v) in seq.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, "]")
            }
            Value::Mapping(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                write!(f, "}}")
            }
        }
    }
}

// Convenient From implementations
impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Sequence(v.into_iter().map(Into::into).collect())
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(m: IndexMap<String, Value>) -> Self {
        Value::Mapping(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn test_value_type_checks() {
        assert!(Value::Null.is_null());
        assert!(Value::Sequence(vec![]).is_sequence());
        assert!(Value::Mapping(IndexMap::new()).is_mapping());
        assert!(Value::Sequence(vec![]).is_container());
        assert!(!Value::Integer(42).is_container());
    }

    #[test]
    fn test_value_conversions() {
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Integer(42).as_i64(), Some(42));
        assert_eq!(Value::Float(2.5).as_f64(), Some(2.5));
        assert_eq!(Value::Integer(42).as_f64(), Some(42.0));
        assert_eq!(Value::String("hello".into()).as_str(), Some("hello"));
    }

    #[test]
    fn test_merge_scalars() {
        let mut target = Value::String("base".into());
        target.merge(Value::String("overlay".into()));
        assert_eq!(target.as_str(), Some("overlay"));
    }

    #[test]
    fn test_merge_preserves_siblings() {
        let mut target = yaml("x: {a: 1, b: 2}");
        target.merge(yaml("x: {a: 99, c: 3}"));

        assert_eq!(target, yaml("x: {a: 99, b: 2, c: 3}"));
    }

    #[test]
    fn test_merge_recurses_deeply() {
        let mut target = yaml("thing: 123\nthang: {a: 1, b: 2}");
        target.merge(yaml("thang: {a: 666, c: 777}"));

        assert_eq!(target, yaml("thing: 123\nthang: {a: 666, b: 2, c: 777}"));
    }

    #[test]
    fn test_merge_overwrites_sequence_wholesale() {
        let mut target = yaml("servers: [a, b]");
        target.merge(yaml("servers: [c]"));

        assert_eq!(target, yaml("servers: [c]"));
    }

    #[test]
    fn test_merge_mapping_replaced_by_sequence() {
        // Recursion only happens when both sides are mappings; a sequence
        // in the source replaces a mapping in the target wholesale.
        let mut target = yaml("x: {a: 1}");
        target.merge(yaml("x: [1, 2]"));

        assert_eq!(target, yaml("x: [1, 2]"));
    }

    #[test]
    fn test_merge_scalar_replaced_by_mapping() {
        let mut target = yaml("x: 5");
        target.merge(yaml("x: {a: 1}"));

        assert_eq!(target, yaml("x: {a: 1}"));
    }

    #[test]
    fn test_merge_null_overwrites_not_removes() {
        let mut target = yaml("feature: {enabled: true, config: value}");
        target.merge(yaml("feature: {config: null}"));

        let feature = target.as_mapping().unwrap().get("feature").unwrap();
        let feature = feature.as_mapping().unwrap();
        assert!(feature.contains_key("config"));
        assert!(feature.get("config").unwrap().is_null());
        assert_eq!(feature.get("enabled").unwrap().as_bool(), Some(true));
    }

    #[test]
    fn test_merge_adds_new_keys() {
        let mut target = yaml("a: 1");
        target.merge(yaml("b: 2"));

        assert_eq!(target, yaml("a: 1\nb: 2"));
    }

    #[test]
    fn test_display_scalar_and_containers() {
        assert_eq!(Value::Integer(5).to_string(), "5");
        assert_eq!(yaml("[1, 2]").to_string(), "[1, 2]");
        assert_eq!(yaml("{a: 1, b: x}").to_string(), "{a: 1, b: x}");
    }
}
