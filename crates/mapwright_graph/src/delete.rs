//! Cascading deletion over the containment tree.
//!
//! Deleting a node removes everything transitively contained in it. The
//! traversal happens up front so the world rebuild in
//! [`World::delete_node`](crate::World::delete_node) works from a complete
//! removal list, mirroring how the store collects victims before destroying.

use std::collections::HashSet;

use mapwright_foundation::NodeId;

use crate::world::World;

/// Collects the root and every transitively contained node, depth first.
///
/// Each id is visited exactly once; the visited set also keeps a malformed
/// containment cycle from looping. Containment edges pointing at ids absent
/// from the node map indicate a prior mutator bug and are flagged, not
/// followed.
pub(crate) fn removal_plan(world: &World, root: &NodeId) -> Vec<NodeId> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut plan = Vec::new();
    let mut stack = vec![root.clone()];

    while let Some(id) = stack.pop() {
        if !visited.insert(id.clone()) {
            continue;
        }
        match world.node(&id) {
            Some(node) => {
                for child in node.contained_nodes.keys() {
                    stack.push(child.clone());
                }
                plan.push(id);
            }
            None => {
                tracing::warn!(node = %id, "containment edge points at a missing node");
            }
        }
    }

    plan
}
