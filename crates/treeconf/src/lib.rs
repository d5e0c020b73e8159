//! treeconf: hierarchical configuration container
//!
//! A [`Config`] owns a single nested tree of mappings, sequences, and
//! scalars. Reads and writes address it by dotted key-paths; intermediate
//! containers are created on write. Bulk updates deep-merge into the tree
//! without destroying sibling keys, and [`Config::reset`] rolls back to the
//! defaults captured at construction.
//!
//! # Example
//!
//! ```rust
//! use treeconf::Config;
//!
//! let config = Config::from_yaml(r#"
//! database:
//!   host: localhost
//!   port: 5432
//! "#).unwrap();
//!
//! assert_eq!(config.get("database.host"), "localhost");
//!
//! // Writes auto-create intermediate containers
//! config.set("database.replica.host", "replica-1").unwrap();
//! assert_eq!(config.get("database.replica.host"), "replica-1");
//!
//! // Missing paths read back as absent, never as an error
//! assert!(config.get("database.missing").is_absent());
//! ```

pub mod error;
pub mod path;
pub mod value;

mod config;
mod node;
mod resolve;

pub use config::Config;
pub use error::{Error, Result};
pub use node::{Entry, Node};
pub use path::KeyPath;
pub use value::Value;
