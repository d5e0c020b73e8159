//! Node views over the configuration tree
//!
//! A [`Node`] is a lightweight cursor: a shared reference back to the root's
//! tree plus a path. It holds no data of its own; every read re-resolves
//! against the live tree, so two nodes over the same path always agree.
//! Nodes are meant to be created per access expression and discarded.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use crate::error::Result;
use crate::path::KeyPath;
use crate::resolve;
use crate::value::Value;

/// A view over a path within a shared configuration tree
#[derive(Debug, Clone)]
pub struct Node {
    root: Rc<RefCell<Value>>,
    path: KeyPath,
}

/// The result of reading a key through a node.
///
/// Containers and absent entries stay live and chainable as a child [`Node`];
/// scalars come back as plain values for natural comparison and printing.
#[derive(Debug, Clone)]
pub enum Entry {
    /// A child view: the resolved value is a container or absent
    Node(Node),
    /// The resolved value is a scalar
    Value(Value),
}

impl Node {
    pub(crate) fn new(root: Rc<RefCell<Value>>, path: KeyPath) -> Self {
        Node { root, path }
    }

    /// The path of this view, relative to the root
    pub fn path(&self) -> &KeyPath {
        &self.path
    }

    /// Read `key` relative to this view.
    ///
    /// `key` may be a single segment or a dotted path. Returns a child view
    /// when the resolved value is a mapping, sequence, or absent, and the
    /// raw scalar otherwise.
    pub fn get(&self, key: &str) -> Entry {
        let child = Node::new(Rc::clone(&self.root), self.path.join(key));
        match child.value() {
            Value::Mapping(_) | Value::Sequence(_) | Value::Null => Entry::Node(child),
            scalar => Entry::Value(scalar),
        }
    }

    /// Write `value` at `key` relative to this view, creating intermediate
    /// containers as needed.
    ///
    /// Fails when the path runs through an existing scalar: auto-vivification
    /// only creates containers, it never overwrites a value.
    pub fn set(&self, key: &str, value: impl Into<Value>) -> Result<()> {
        let path = self.path.join(key);
        let value = value.into();
        log::trace!("set {} = {}", path, value);

        let mut tree = self.root.borrow_mut();
        resolve::slot_mut(&mut tree, &path, true)?.set(value);
        Ok(())
    }

    /// The value this view resolves to against the live tree.
    ///
    /// Missing keys and out-of-range indices collapse to [`Value::Null`];
    /// this is the single point where not-found results become absent.
    pub fn value(&self) -> Value {
        let tree = self.root.borrow();
        match resolve::lookup(&tree, &self.path) {
            Ok(value) => value.clone(),
            Err(_) => Value::Null,
        }
    }

    /// Whether the resolved mapping contains `key`
    pub fn contains(&self, key: &str) -> bool {
        match self.value() {
            Value::Mapping(map) => map.contains_key(key),
            _ => false,
        }
    }

    /// The keys of the resolved mapping, in order
    pub fn keys(&self) -> Vec<String> {
        match self.value() {
            Value::Mapping(map) => map.keys().cloned().collect(),
            _ => Vec::new(),
        }
    }

    /// The entries of the resolved mapping, in order
    pub fn items(&self) -> Vec<(String, Value)> {
        match self.value() {
            Value::Mapping(map) => map.into_iter().collect(),
            _ => Vec::new(),
        }
    }

    /// Whether this view resolves to an absent or null value
    pub fn is_absent(&self) -> bool {
        self.value().is_null()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

// Comparisons operate on the resolved value, never on view identity.

impl PartialEq for Node {
    fn eq(&self, other: &Node) -> bool {
        self.value() == other.value()
    }
}

impl PartialEq<Value> for Node {
    fn eq(&self, other: &Value) -> bool {
        self.value() == *other
    }
}

impl PartialEq<i64> for Node {
    fn eq(&self, other: &i64) -> bool {
        self.value().as_i64() == Some(*other)
    }
}

impl PartialEq<f64> for Node {
    fn eq(&self, other: &f64) -> bool {
        self.value().as_f64() == Some(*other)
    }
}

impl PartialEq<bool> for Node {
    fn eq(&self, other: &bool) -> bool {
        self.value().as_bool() == Some(*other)
    }
}

impl PartialEq<&str> for Node {
    fn eq(&self, other: &&str) -> bool {
        self.value().as_str() == Some(*other)
    }
}

impl PartialOrd<i64> for Node {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        self.value().as_i64().map(|v| v.cmp(other))
    }
}

impl PartialOrd<f64> for Node {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.value().as_f64().and_then(|v| v.partial_cmp(other))
    }
}

impl Entry {
    /// The resolved value behind this entry
    pub fn value(&self) -> Value {
        match self {
            Entry::Node(node) => node.value(),
            Entry::Value(value) => value.clone(),
        }
    }

    /// The child view, if the resolved value was a container or absent
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Entry::Node(node) => Some(node),
            Entry::Value(_) => None,
        }
    }

    /// Whether the entry resolves to an absent or null value
    pub fn is_absent(&self) -> bool {
        self.value().is_null()
    }

    /// Cast to bool if the resolved value is a boolean
    pub fn as_bool(&self) -> Option<bool> {
        self.value().as_bool()
    }

    /// Cast to i64: integers directly, strings by parsing
    pub fn as_i64(&self) -> Option<i64> {
        match self.value() {
            Value::Integer(i) => Some(i),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Cast to f64: floats and integers directly, strings by parsing
    pub fn as_f64(&self) -> Option<f64> {
        match self.value() {
            Value::Float(f) => Some(f),
            Value::Integer(i) => Some(i as f64),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Cast to a string: any scalar renders, containers do not
    pub fn as_string(&self) -> Option<String> {
        match self.value() {
            Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
            scalar => Some(scalar.to_string()),
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Entry) -> bool {
        self.value() == other.value()
    }
}

impl PartialEq<Value> for Entry {
    fn eq(&self, other: &Value) -> bool {
        self.value() == *other
    }
}

impl PartialEq<i64> for Entry {
    fn eq(&self, other: &i64) -> bool {
        self.value().as_i64() == Some(*other)
    }
}

impl PartialEq<f64> for Entry {
    fn eq(&self, other: &f64) -> bool {
        self.value().as_f64() == Some(*other)
    }
}

impl PartialEq<bool> for Entry {
    fn eq(&self, other: &bool) -> bool {
        self.value().as_bool() == Some(*other)
    }
}

impl PartialEq<&str> for Entry {
    fn eq(&self, other: &&str) -> bool {
        self.value().as_str() == Some(*other)
    }
}

impl From<&Node> for Value {
    fn from(node: &Node) -> Self {
        node.value()
    }
}

impl From<&Entry> for Value {
    fn from(entry: &Entry) -> Self {
        entry.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn root(yaml: &str) -> Node {
        let tree: Value = serde_yaml::from_str(yaml).unwrap();
        Node::new(Rc::new(RefCell::new(tree)), KeyPath::root())
    }

    #[test]
    fn test_get_scalar_returns_value() {
        let node = root("port: 8080");
        match node.get("port") {
            Entry::Value(v) => assert_eq!(v.as_i64(), Some(8080)),
            Entry::Node(_) => panic!("scalar should come back as a plain value"),
        }
    }

    #[test]
    fn test_get_container_returns_node() {
        let node = root("server: {port: 8080}");
        let server = node.get("server");
        assert!(server.as_node().is_some());
        assert_eq!(server.as_node().unwrap().get("port"), 8080);
    }

    #[test]
    fn test_get_absent_returns_node() {
        // An absent entry stays chainable so it can be written through
        let node = root("a: 1");
        let missing = node.get("nope");
        assert!(missing.as_node().is_some());
        assert!(missing.is_absent());
    }

    #[test]
    fn test_get_with_dotted_key() {
        let node = root("server: {tls: {cert: /tmp/cert}}");
        assert_eq!(node.get("server.tls.cert"), "/tmp/cert");
    }

    #[test]
    fn test_set_then_get() {
        let node = root("{}");
        node.set("server.port", 8080).unwrap();
        assert_eq!(node.get("server.port"), 8080);
    }

    #[test]
    fn test_set_through_scalar_fails() {
        let node = root("port: 8080");
        assert!(node.set("port.nested", 1).is_err());
    }

    #[test]
    fn test_value_reads_live_tree() {
        // Two views over the same path observe each other's writes
        let node = root("a: 1");
        let first = node.get("a");
        node.set("a", 2).unwrap();
        assert_eq!(node.get("a"), 2);
        assert_eq!(first.value().as_i64(), Some(1)); // captured scalar copy
    }

    #[test]
    fn test_sibling_views_share_tree() {
        let node = root("server: {}");
        let server = node.get("server");
        node.set("server.port", 9000).unwrap();
        assert_eq!(server.as_node().unwrap().get("port"), 9000);
    }

    #[test]
    fn test_equality_is_value_equality() {
        let node = root("a: 5\nb: 5");
        let a = Node::new(Rc::clone(&node.root), KeyPath::parse("a"));
        let b = Node::new(Rc::clone(&node.root), KeyPath::parse("b"));

        // Distinct views over equal resolved values compare equal
        assert_eq!(a, b);
        assert!(a == 5);
        assert!(b == 5);
    }

    #[test]
    fn test_ordering_on_resolved_value() {
        let node = root("count: 3");
        let count = Node::new(Rc::clone(&node.root), KeyPath::parse("count"));
        assert!(count < 5);
        assert!(count > 1);
        assert!(count < 3.5);
    }

    #[test]
    fn test_contains_keys_items() {
        let node = root("server: {host: localhost, port: 80}");
        let server = node.get("server");
        let server = server.as_node().unwrap();

        assert!(server.contains("host"));
        assert!(!server.contains("user"));
        assert_eq!(server.keys(), ["host", "port"]);

        let items = server.items();
        assert_eq!(items[0].0, "host");
        assert_eq!(items[1].1.as_i64(), Some(80));
    }

    #[test]
    fn test_contains_on_scalar_is_false() {
        let node = root("port: 8080");
        let port = Node::new(Rc::clone(&node.root), KeyPath::parse("port"));
        assert!(!port.contains("x"));
        assert!(port.keys().is_empty());
    }

    #[test]
    fn test_display_renders_resolved_value() {
        let node = root("server: {port: 80}");
        assert_eq!(node.get("server").to_string(), "{port: 80}");
        assert_eq!(node.get("server.port").to_string(), "80");
    }

    #[test]
    fn test_entry_casts() {
        let node = root("port: '8080'\nratio: 0.5\nflag: true");
        assert_eq!(node.get("port").as_i64(), Some(8080));
        assert_eq!(node.get("ratio").as_f64(), Some(0.5));
        assert_eq!(node.get("flag").as_bool(), Some(true));
        assert_eq!(node.get("port").as_string(), Some("8080".to_string()));
        assert_eq!(node.get("missing").as_string(), None);
    }
}
