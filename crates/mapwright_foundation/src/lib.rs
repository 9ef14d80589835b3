//! Core types for Mapwright.
//!
//! This crate provides:
//! - [`NodeId`] - Human-readable node identifiers
//! - [`allocate`] - Collision-free id allocation
//! - [`ClassTag`] - Room / agent / object class tags
//! - [`Error`] - Error types for graph mutations

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod class;
mod error;
mod id;

pub use class::ClassTag;
pub use error::{Error, Result};
pub use id::{NodeId, allocate};
