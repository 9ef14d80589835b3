//! Node class tags.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The class of a node. The first tag in a node's class list determines
/// which collection the node belongs to and how the UI dispatches on it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ClassTag {
    /// A location that can contain other nodes and connect to other rooms.
    Room,
    /// A character.
    Agent,
    /// An inanimate object.
    Object,
}

impl ClassTag {
    /// Returns the canonical lowercase name of the tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Room => "room",
            Self::Agent => "agent",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ClassTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClassTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "room" => Ok(Self::Room),
            "agent" => Ok(Self::Agent),
            "object" => Ok(Self::Object),
            other => Err(Error::UnknownClass(other.to_string())),
        }
    }
}
