//! Node identifiers and collision-free allocation.
//!
//! Ids are human-readable slugs derived from a node's name, e.g. the first
//! node named "Red Room" becomes `Red_Room_1`, the second `Red_Room_2`.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unique identifier of a node within a world.
///
/// Unlike a numeric handle, a `NodeId` is stable across save/load and
/// meaningful to a human reading a serialized world.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NodeId(String);

impl NodeId {
    /// Creates an id from an existing string (e.g. loaded from storage).
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Allocates an id for a node named `base_name` that is not yet taken.
///
/// The first candidate is `slugify(base_name) + "_1"`. While `taken` reports
/// a collision, the trailing `_`-separated segment is parsed as an integer,
/// incremented, and rejoined. A non-numeric trailing segment is normalized
/// to 0 before incrementing so the loop always terminates.
///
/// Allocation is deterministic: the lowest free suffix wins.
pub fn allocate<F>(base_name: &str, mut taken: F) -> NodeId
where
    F: FnMut(&str) -> bool,
{
    let mut candidate = format!("{}_1", slugify(base_name));
    while taken(&candidate) {
        candidate = bump_suffix(&candidate);
    }
    NodeId(candidate)
}

fn slugify(name: &str) -> String {
    name.trim().replace(' ', "_")
}

fn bump_suffix(id: &str) -> String {
    match id.rfind('_') {
        Some(pos) => {
            let head = &id[..pos];
            let tail = &id[pos + 1..];
            let n: u64 = tail.parse().unwrap_or(0);
            format!("{head}_{}", n + 1)
        }
        // Externally supplied ids may carry no suffix at all.
        None => format!("{id}_1"),
    }
}
