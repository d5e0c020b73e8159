//! Configuration root
//!
//! A [`Config`] owns exactly one underlying tree plus the defaults tree it
//! was constructed from. All reads and writes go through [`Node`] views;
//! bulk updates go through the deep merge on [`Value`].

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::node::{Entry, Node};
use crate::path::KeyPath;
use crate::value::Value;

/// The main configuration container
///
/// Construction deep-copies the defaults tree into the live tree, then
/// merges the initial data on top. [`reset`](Config::reset) rolls the live
/// tree back to a fresh copy of the defaults, no matter how many updates
/// happened in between.
#[derive(Debug)]
pub struct Config {
    /// The live tree, shared with every view handed out
    tree: Rc<RefCell<Value>>,
    /// Baseline restored wholesale by reset; never mutated
    defaults: Value,
}

impl Config {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::with(Value::default(), Value::default())
    }

    /// Create a configuration from initial data, with empty defaults
    pub fn from_value(data: impl Into<Value>) -> Self {
        Self::with(data, Value::default())
    }

    /// Create a configuration with a defaults tree and no initial data
    pub fn with_defaults(defaults: Value) -> Self {
        Self::with(Value::default(), defaults)
    }

    /// Create a configuration from initial data and a defaults tree
    pub fn with(data: impl Into<Value>, defaults: Value) -> Self {
        let mut tree = ensure_mapping(defaults.clone());
        tree.merge(ensure_mapping(data.into()));
        Config {
            tree: Rc::new(RefCell::new(tree)),
            defaults,
        }
    }

    /// Parse a YAML document into a configuration
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let data: Value = serde_yaml::from_str(yaml).map_err(|e| Error::parse(e.to_string()))?;
        Ok(Self::from_value(data))
    }

    /// Parse a YAML document into a configuration with a defaults tree
    pub fn from_yaml_with_defaults(yaml: &str, defaults: Value) -> Result<Self> {
        let data: Value = serde_yaml::from_str(yaml).map_err(|e| Error::parse(e.to_string()))?;
        Ok(Self::with(data, defaults))
    }

    /// Parse a JSON document into a configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let data: Value = serde_json::from_str(json).map_err(|e| Error::parse(e.to_string()))?;
        Ok(Self::from_value(data))
    }

    /// A view over the root of the tree
    pub fn root(&self) -> Node {
        Node::new(Rc::clone(&self.tree), KeyPath::root())
    }

    /// Read a key or dotted path
    pub fn get(&self, path: &str) -> Entry {
        self.root().get(path)
    }

    /// Write a value at a key or dotted path, creating intermediate
    /// containers as needed
    pub fn set(&self, path: &str, value: impl Into<Value>) -> Result<()> {
        self.root().set(path, value)
    }

    /// The whole resolved tree (the empty-path read)
    pub fn value(&self) -> Value {
        self.tree.borrow().clone()
    }

    /// Deep-merge `data` into the live tree.
    ///
    /// Sibling keys not mentioned by `data` are left untouched. Views and
    /// other configurations convert via their resolved value.
    pub fn update(&self, data: impl Into<Value>) {
        let data = ensure_mapping(data.into());
        log::debug!("merging update into configuration tree");
        self.tree.borrow_mut().merge(data);
    }

    /// Apply a flat list of dotted-path overrides, then deep-merge `data`.
    ///
    /// Each `(path, value)` pair is written through an auto-vivifying set,
    /// so a flat override list can punch values into arbitrary depth:
    /// `[("server.port", 8080)]` is equivalent to merging
    /// `{server: {port: 8080}}`.
    pub fn update_with<K, V, I>(&self, data: impl Into<Value>, options: I) -> Result<()>
    where
        K: AsRef<str>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        for (path, value) in options {
            self.set(path.as_ref(), value)?;
        }
        self.update(data);
        Ok(())
    }

    /// Discard the live tree and restore a fresh deep copy of the defaults
    pub fn reset(&self) {
        log::debug!("resetting configuration to defaults");
        *self.tree.borrow_mut() = ensure_mapping(self.defaults.clone());
    }

    /// Render the whole tree as YAML
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.value()).map_err(|e| Error::parse(e.to_string()))
    }

    /// Render the whole tree as JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.value()).map_err(|e| Error::parse(e.to_string()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Config {
    /// A clone owns its own tree; there is exactly one physical tree per root
    fn clone(&self) -> Self {
        Config {
            tree: Rc::new(RefCell::new(self.value())),
            defaults: self.defaults.clone(),
        }
    }
}

impl From<&Config> for Value {
    fn from(config: &Config) -> Self {
        config.value()
    }
}

/// Null construction inputs stand for an empty mapping, so the root is
/// always a container
fn ensure_mapping(value: Value) -> Value {
    match value {
        Value::Null => Value::Mapping(indexmap::IndexMap::new()),
        other => other,
    }
}
