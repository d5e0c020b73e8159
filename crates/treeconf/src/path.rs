//! Key-path type for navigating the configuration tree
//!
//! A `KeyPath` is an ordered sequence of string segments, normally written
//! as a dot-separated string like `database.host` or `servers.0.name`.
//! Segments are kept as plain strings: whether a numeric-looking segment is
//! a sequence index or a mapping key is decided at resolution time, based on
//! the container actually encountered at that position.

use std::fmt;

/// An ordered sequence of path segments into a configuration tree.
///
/// The empty path denotes the root container itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyPath(Vec<String>);

impl KeyPath {
    /// The empty path, denoting the root container
    pub fn root() -> Self {
        KeyPath(Vec::new())
    }

    /// Parse a dotted path string into segments
    pub fn parse(path: &str) -> Self {
        if path.is_empty() {
            return Self::root();
        }
        KeyPath(path.split('.').map(str::to_string).collect())
    }

    /// Whether this path denotes the root container
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// The segments of this path, in order
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Append a key (which may itself be a dotted path) to this path
    pub fn join(&self, key: &str) -> KeyPath {
        if key.is_empty() {
            return self.clone();
        }
        let mut segments = self.0.clone();
        segments.extend(key.split('.').map(str::to_string));
        KeyPath(segments)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

impl From<&str> for KeyPath {
    fn from(path: &str) -> Self {
        KeyPath::parse(path)
    }
}

impl From<String> for KeyPath {
    fn from(path: String) -> Self {
        KeyPath::parse(&path)
    }
}
