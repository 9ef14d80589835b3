//! World graph nodes and their relation edges.

use im::HashMap;
use mapwright_foundation::{ClassTag, NodeId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Planar coordinate of a room on its floor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridLocation {
    /// Column coordinate, growing to the east.
    pub x: i32,
    /// Row coordinate, growing to the north.
    pub y: i32,
}

impl GridLocation {
    /// Creates a location at the given coordinates.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Records that `target_id` is physically inside the node holding this edge.
///
/// The world's node map owns the target record; this edge is a non-owning
/// reference kept in sync with the target's [`ContainerRef`] by the mutators.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContainmentEdge {
    /// Id of the contained node.
    pub target_id: NodeId,
}

/// Back-reference from a contained node to its container.
///
/// Weak: lookup only, never ownership.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContainerRef {
    /// Id of the containing node.
    pub target_id: NodeId,
}

/// A directed description of a path between two rooms.
///
/// Edges are always written in symmetric pairs with geometrically opposite
/// labels; a lone edge indicates a prior mutator bug.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NeighborEdge {
    /// Id of the room this path leads to.
    pub target_id: NodeId,
    /// Direction label, e.g. "a path to the east".
    pub label: String,
    /// Player-facing description shown on examine, if any.
    pub examine_desc: Option<String>,
    /// Opaque lock payload preserved for the surrounding app.
    pub locked_edge: Option<String>,
}

/// Relative placement of two rooms being connected.
///
/// `Vertical` means the secondary room sits south of the primary on the same
/// floor; `Horizontal` means it sits east. `Above`/`Below` connect rooms on
/// adjacent floors.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Alignment {
    /// Secondary is south of primary.
    Vertical,
    /// Secondary is east of primary.
    Horizontal,
    /// Secondary is on the floor above primary.
    Above,
    /// Secondary is on the floor below primary.
    Below,
}

impl Alignment {
    /// Path labels for this alignment as `(primary, secondary)`: the label
    /// written into the primary room's edge and the reciprocal one.
    #[must_use]
    pub const fn labels(self) -> (&'static str, &'static str) {
        match self {
            Self::Vertical => ("a path to the south", "a path to the north"),
            Self::Horizontal => ("a path to the east", "a path to the west"),
            Self::Above => ("a path to the floor beneath", "a path to the floor above"),
            Self::Below => ("a path to the floor above", "a path to the floor beneath"),
        }
    }
}

/// A single entity in the world graph: a room, agent, or object.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Node {
    /// Unique id within the world.
    pub node_id: NodeId,
    /// Class tags; the first one determines dispatch.
    pub classes: Vec<ClassTag>,
    /// Display name.
    pub name: String,
    /// Description text.
    pub desc: String,
    /// Nodes physically inside this one, keyed by their id.
    pub contained_nodes: HashMap<NodeId, ContainmentEdge>,
    /// Back-reference to the containing node, if any.
    pub container_node: Option<ContainerRef>,
    /// Paths to adjacent rooms, keyed by the other room's id. Rooms only.
    pub neighbors: HashMap<NodeId, NeighborEdge>,
    /// Position on the map grid. Rooms only.
    pub grid_location: Option<GridLocation>,
}

impl Node {
    /// The dispatch class of this node, i.e. the first class tag.
    #[must_use]
    pub fn class(&self) -> Option<ClassTag> {
        self.classes.first().copied()
    }

    /// Returns true if this node dispatches as a room.
    #[must_use]
    pub fn is_room(&self) -> bool {
        self.class() == Some(ClassTag::Room)
    }
}

/// Blueprint for a node that has not been inserted into a world yet.
///
/// Drafts come from the editor UI or from the suggestion service; the
/// latter never carries an id, in which case one is allocated on insert.
#[derive(Clone, Debug)]
pub struct NodeDraft {
    /// Explicit id, or `None` to allocate one from the name.
    pub node_id: Option<NodeId>,
    /// Class tags; must be non-empty.
    pub classes: Vec<ClassTag>,
    /// Display name.
    pub name: String,
    /// Description text.
    pub desc: String,
    /// Container to place the node in on insert.
    pub container: Option<NodeId>,
    /// Grid position, for rooms.
    pub grid_location: Option<GridLocation>,
}

impl NodeDraft {
    /// Creates a draft with the given name and class.
    #[must_use]
    pub fn new(name: impl Into<String>, class: ClassTag) -> Self {
        Self {
            node_id: None,
            classes: vec![class],
            name: name.into(),
            desc: String::new(),
            container: None,
            grid_location: None,
        }
    }

    /// Sets an explicit id instead of allocating one.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<NodeId>) -> Self {
        self.node_id = Some(id.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = desc.into();
        self
    }

    /// Places the node inside the given container on insert.
    #[must_use]
    pub fn in_container(mut self, container: impl Into<NodeId>) -> Self {
        self.container = Some(container.into());
        self
    }

    /// Sets the grid position.
    #[must_use]
    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.grid_location = Some(GridLocation::new(x, y));
        self
    }
}

/// Field-level patch for [`World::update_node`](crate::World::update_node).
///
/// `None` fields are left unchanged. Relation edges are never patched here;
/// they are mutated only through the dedicated mutators.
#[derive(Clone, Debug, Default)]
pub struct NodePatch {
    /// New display name.
    pub name: Option<String>,
    /// New description.
    pub desc: Option<String>,
    /// New grid position.
    pub grid_location: Option<GridLocation>,
}

impl NodePatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    /// Sets the grid position.
    #[must_use]
    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.grid_location = Some(GridLocation::new(x, y));
        self
    }
}
