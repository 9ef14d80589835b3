//! Save/load boundary.
//!
//! A world is serialized verbatim with MessagePack; the history chain is
//! never part of the payload, and no schema versioning is defined here —
//! the surrounding persistence layer owns those concerns.

use thiserror::Error;

use crate::world::World;

/// Errors crossing the save/load boundary.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Serialization failed.
    #[error("encode: {0}")]
    Encode(#[from] rmp_serde::encode::Error),
    /// Deserialization failed.
    #[error("decode: {0}")]
    Decode(#[from] rmp_serde::decode::Error),
}

/// Serializes a world to MessagePack bytes.
///
/// # Errors
///
/// Returns [`PersistError::Encode`] if serialization fails.
pub fn to_bytes(world: &World) -> Result<Vec<u8>, PersistError> {
    Ok(rmp_serde::to_vec(world)?)
}

/// Deserializes a world from MessagePack bytes.
///
/// The loaded world starts with an empty history chain.
///
/// # Errors
///
/// Returns [`PersistError::Decode`] on malformed input.
pub fn from_bytes(bytes: &[u8]) -> Result<World, PersistError> {
    Ok(rmp_serde::from_slice(bytes)?)
}
