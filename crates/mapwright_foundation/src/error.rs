//! Error types for graph mutations.
//!
//! Uses `thiserror` for ergonomic error definition. Every error is local to
//! a single mutation call: a failed mutation leaves the world unchanged.

use thiserror::Error;

use crate::id::NodeId;

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by world mutations.
#[derive(Debug, Error)]
pub enum Error {
    /// A mutation referenced an id with no entry in the node map.
    /// The mutation is rejected; a placeholder node is never created.
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),

    /// A node with the supplied id already exists in the world.
    #[error("duplicate node id: {0}")]
    DuplicateNode(NodeId),

    /// A node was added without any class tag, so it cannot join a class
    /// collection.
    #[error("node {0} has no class tag")]
    MissingClass(NodeId),

    /// An adjacency mutation targeted a node whose class is not `room`.
    #[error("node {0} is not a room")]
    NotARoom(NodeId),

    /// A room cannot be connected to itself.
    #[error("cannot connect room {0} to itself")]
    SelfConnection(NodeId),

    /// Placing the node inside the given container would make it contain
    /// itself, directly or transitively.
    #[error("containment cycle through {0}")]
    ContainmentCycle(NodeId),

    /// A class tag string was not one of `room`, `agent`, `object`.
    #[error("unknown class tag: {0}")]
    UnknownClass(String),
}
