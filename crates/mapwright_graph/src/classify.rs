//! Per-class projections over the flat node map.

use mapwright_foundation::ClassTag;

use crate::node::Node;
use crate::world::World;

/// Render-ready node lists, one per class, sorted by id for stable UI order.
#[derive(Debug)]
pub struct Classified<'a> {
    /// All nodes dispatching as rooms.
    pub rooms: Vec<&'a Node>,
    /// All nodes dispatching as agents.
    pub agents: Vec<&'a Node>,
    /// All nodes dispatching as objects.
    pub objects: Vec<&'a Node>,
}

impl Classified<'_> {
    /// Total number of classified nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len() + self.agents.len() + self.objects.len()
    }

    /// Returns true if no node was classified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partitions the node map by dispatch class (the first class tag).
///
/// Nodes with an empty class list are excluded and flagged; they are simply
/// unreachable from any class-specific view. The result is a projection of
/// one snapshot — re-run it after every mutation instead of caching it
/// across worlds.
#[must_use]
pub fn classify(world: &World) -> Classified<'_> {
    let mut rooms = Vec::new();
    let mut agents = Vec::new();
    let mut objects = Vec::new();

    for node in world.nodes() {
        match node.class() {
            Some(ClassTag::Room) => rooms.push(node),
            Some(ClassTag::Agent) => agents.push(node),
            Some(ClassTag::Object) => objects.push(node),
            None => {
                tracing::warn!(node = %node.node_id, "node has no class tag, excluded from class views");
            }
        }
    }

    rooms.sort_by(|a, b| a.node_id.cmp(&b.node_id));
    agents.sort_by(|a, b| a.node_id.cmp(&b.node_id));
    objects.sort_by(|a, b| a.node_id.cmp(&b.node_id));

    Classified {
        rooms,
        agents,
        objects,
    }
}
