//! Key-path resolution over a value tree
//!
//! Two entry points: [`lookup`] walks a path for reading, and [`slot_mut`]
//! walks it for writing, returning the parent container paired with the
//! final segment so the caller can assign exactly at that position.
//!
//! Whether a segment addresses a sequence index or a mapping key is decided
//! per segment against the container actually encountered: a numeric segment
//! is an index only when the container at that position is a sequence.

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::path::KeyPath;
use crate::value::Value;

/// Walk `path` through `tree` for reading.
///
/// The empty path resolves to the tree itself. Every failure is one of the
/// two not-found kinds: a missing mapping key or an out-of-range sequence
/// index. Walking into a scalar is classified the same way, by segment kind,
/// so the read path stays benign throughout.
pub(crate) fn lookup<'a>(tree: &'a Value, path: &KeyPath) -> Result<&'a Value> {
    let mut current = tree;
    for segment in path.segments() {
        current = match current {
            Value::Mapping(map) => map
                .get(segment.as_str())
                .ok_or_else(|| Error::key_not_found(path, segment))?,
            Value::Sequence(seq) => match segment.parse::<usize>() {
                Ok(index) => seq
                    .get(index)
                    .ok_or_else(|| Error::index_out_of_range(path, index))?,
                Err(_) => return Err(Error::key_not_found(path, segment)),
            },
            _ => {
                return Err(match segment.parse::<usize>() {
                    Ok(index) => Error::index_out_of_range(path, index),
                    Err(_) => Error::key_not_found(path, segment),
                })
            }
        };
    }
    Ok(current)
}

/// The parent container and final segment a path resolves to.
///
/// Returning the slot rather than the value at it lets the caller assign
/// into a position that doesn't hold a value yet.
#[derive(Debug)]
pub(crate) enum Slot<'a> {
    /// The empty path: the whole tree is the slot
    Root(&'a mut Value),
    /// A mapping entry, present or not
    Entry(&'a mut IndexMap<String, Value>, String),
    /// A sequence position
    Item(&'a mut Vec<Value>, usize),
}

impl Slot<'_> {
    /// Assign a value exactly at this slot
    pub(crate) fn set(self, value: Value) {
        match self {
            Slot::Root(slot) => *slot = value,
            Slot::Entry(map, key) => {
                map.insert(key, value);
            }
            Slot::Item(seq, index) => {
                if index >= seq.len() {
                    seq.resize(index + 1, Value::Null);
                }
                seq[index] = value;
            }
        }
    }
}

/// Walk `path` through `tree` for writing, returning the slot at its end.
///
/// With `create` set, missing mapping keys get an empty mapping inserted and
/// sequence indices beyond the current length extend the sequence with null
/// placeholders. Auto-vivification never overwrites an existing value:
/// advancing through a scalar fails with [`Error::NotIndexable`].
pub(crate) fn slot_mut<'a>(tree: &'a mut Value, path: &KeyPath, create: bool) -> Result<Slot<'a>> {
    let Some((last, parents)) = path.segments().split_last() else {
        return Ok(Slot::Root(tree));
    };

    let mut current = tree;
    for segment in parents {
        if create {
            vivify(current, segment);
        }
        current = step_mut(current, segment, path)?;
    }
    if create {
        vivify(current, last);
    }

    match current {
        Value::Mapping(map) => Ok(Slot::Entry(map, last.clone())),
        Value::Sequence(seq) => match last.parse::<usize>() {
            Ok(index) => Ok(Slot::Item(seq, index)),
            Err(_) => Err(Error::key_not_found(path, last)),
        },
        other => Err(Error::not_indexable(path, last, other.type_name())),
    }
}

/// Create the container entry a segment addresses, if it is missing
fn vivify(container: &mut Value, segment: &str) {
    match container {
        Value::Mapping(map) => {
            if !map.contains_key(segment) {
                map.insert(segment.to_string(), Value::Mapping(IndexMap::new()));
            }
        }
        Value::Sequence(seq) => {
            if let Ok(index) = segment.parse::<usize>() {
                if index >= seq.len() {
                    seq.resize(index + 1, Value::Null);
                }
            }
        }
        _ => {}
    }
}

/// Advance one segment into a container, mutably
fn step_mut<'a>(current: &'a mut Value, segment: &str, path: &KeyPath) -> Result<&'a mut Value> {
    match current {
        Value::Mapping(map) => map
            .get_mut(segment)
            .ok_or_else(|| Error::key_not_found(path, segment)),
        Value::Sequence(seq) => {
            let index = segment
                .parse::<usize>()
                .map_err(|_| Error::key_not_found(path, segment))?;
            seq.get_mut(index)
                .ok_or_else(|| Error::index_out_of_range(path, index))
        }
        other => Err(Error::not_indexable(path, segment, other.type_name())),
    }
}
