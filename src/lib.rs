//! Mapwright - World-builder graph and layout core
//!
//! This crate re-exports all layers of the Mapwright system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: mapwright_layout     — Borders and multi-floor render grid
//! Layer 1: mapwright_graph      — Immutable world, mutators, classifier
//! Layer 0: mapwright_foundation — Node ids, class tags, errors
//! ```

pub use mapwright_foundation as foundation;
pub use mapwright_graph as graph;
pub use mapwright_layout as layout;
