//! Immutable world graph for Mapwright.
//!
//! This crate provides:
//! - [`Node`] - Rooms, agents, and objects with their relation edges
//! - [`World`] - Immutable world state with structural sharing
//! - [`classify`] - Per-class projections for the UI and layout engine
//! - [`Session`] - Draft/commit editing over one authoritative world

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod classify;
mod delete;
mod node;
#[cfg(feature = "serde")]
mod persist;
mod session;
mod world;

pub use classify::{Classified, classify};
pub use node::{
    Alignment, ContainerRef, ContainmentEdge, GridLocation, NeighborEdge, Node, NodeDraft,
    NodePatch,
};
#[cfg(feature = "serde")]
pub use persist::{PersistError, from_bytes, to_bytes};
pub use session::Session;
pub use world::World;
