//! World state management with immutable snapshots.
//!
//! The `World` is the canonical representation of one editable map. It uses
//! persistent data structures for O(1) cloning and structural sharing; every
//! mutator takes `&self` and returns a new `World`, never touching its input.

use std::collections::HashSet;
use std::sync::Arc;

use im::{HashMap, Vector};
use mapwright_foundation::{ClassTag, Error, NodeId, Result, allocate};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::delete::removal_plan;
use crate::node::{
    Alignment, ContainerRef, ContainmentEdge, NeighborEdge, Node, NodeDraft, NodePatch,
};

/// Immutable snapshot of one world: class collections plus the flat node map.
///
/// Clone is O(1) due to structural sharing. All mutation methods return a
/// new `World` whose `previous` link points back at the input, so an editing
/// session carries its own undo chain for free.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct World {
    /// Storage-assigned id, if this world has ever been saved.
    id: Option<u64>,
    /// Display name.
    name: String,
    /// Ids of all room nodes, in insertion order.
    rooms: Vector<NodeId>,
    /// Ids of all agent nodes, in insertion order.
    agents: Vector<NodeId>,
    /// Ids of all object nodes, in insertion order.
    objects: Vector<NodeId>,
    /// The owning record for every node, keyed by id.
    nodes: HashMap<NodeId, Node>,
    /// Previous world state (history/undo). Never serialized.
    #[cfg_attr(feature = "serde", serde(skip))]
    previous: Option<Arc<World>>,
}

impl World {
    /// Creates a new empty world with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            rooms: Vector::new(),
            agents: Vector::new(),
            objects: Vector::new(),
            nodes: HashMap::new(),
            previous: None,
        }
    }

    /// Attaches a storage id, e.g. after the persistence layer assigns one.
    #[must_use]
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns the storage id, if any.
    #[must_use]
    pub fn id(&self) -> Option<u64> {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a new world with the display name replaced.
    #[must_use]
    pub fn rename(&self, name: impl Into<String>) -> World {
        let mut next = self.snapshot();
        next.name = name.into();
        next
    }

    /// Gets a node by id.
    #[must_use]
    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Returns true if a node with this id exists.
    #[must_use]
    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Returns the total number of nodes across all classes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the world has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates room ids in insertion order.
    pub fn rooms(&self) -> impl Iterator<Item = &NodeId> {
        self.rooms.iter()
    }

    /// Iterates agent ids in insertion order.
    pub fn agents(&self) -> impl Iterator<Item = &NodeId> {
        self.agents.iter()
    }

    /// Iterates object ids in insertion order.
    pub fn objects(&self) -> impl Iterator<Item = &NodeId> {
        self.objects.iter()
    }

    /// Iterates all node records.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Returns a reference to the previous world state, if any.
    #[must_use]
    pub fn previous(&self) -> Option<&World> {
        self.previous.as_ref().map(Arc::as_ref)
    }

    /// Clone of this world with the history link pointing back here.
    fn snapshot(&self) -> World {
        World {
            previous: Some(Arc::new(self.clone())),
            ..self.clone()
        }
    }

    fn require(&self, id: &NodeId) -> Result<&Node> {
        self.nodes
            .get(id)
            .ok_or_else(|| Error::NodeNotFound(id.clone()))
    }

    fn class_list_mut(&mut self, class: ClassTag) -> &mut Vector<NodeId> {
        match class {
            ClassTag::Room => &mut self.rooms,
            ClassTag::Agent => &mut self.agents,
            ClassTag::Object => &mut self.objects,
        }
    }

    // --- Node Operations ---

    /// Inserts a node built from the draft.
    ///
    /// Allocates an id from the draft's name when it carries none. Returns
    /// the new world and the inserted node's id.
    ///
    /// # Errors
    ///
    /// - [`Error::DuplicateNode`] if the draft supplies an id that is taken.
    /// - [`Error::MissingClass`] if the draft has no class tag.
    /// - [`Error::NodeNotFound`] if the declared container does not exist.
    pub fn add_node(&self, draft: NodeDraft) -> Result<(World, NodeId)> {
        let id = match draft.node_id.clone() {
            Some(id) => {
                if self.nodes.contains_key(&id) {
                    return Err(Error::DuplicateNode(id));
                }
                id
            }
            None => allocate(&draft.name, |candidate| {
                self.nodes.contains_key(&NodeId::from(candidate))
            }),
        };

        if draft.classes.is_empty() {
            return Err(Error::MissingClass(id));
        }
        let class = draft.classes[0];

        let container_id = draft.container.clone();
        if let Some(container) = &container_id {
            self.require(container)?;
        }

        let node = Node {
            node_id: id.clone(),
            classes: draft.classes,
            name: draft.name,
            desc: draft.desc,
            contained_nodes: HashMap::new(),
            container_node: container_id
                .clone()
                .map(|target_id| ContainerRef { target_id }),
            neighbors: HashMap::new(),
            grid_location: draft.grid_location,
        };

        let mut next = self.snapshot();
        next.nodes.insert(id.clone(), node);
        next.class_list_mut(class).push_back(id.clone());

        if let Some(container_id) = container_id {
            if let Some(mut container) = next.nodes.get(&container_id).cloned() {
                container.contained_nodes.insert(
                    id.clone(),
                    ContainmentEdge {
                        target_id: id.clone(),
                    },
                );
                next.nodes.insert(container_id, container);
            }
        }

        Ok((next, id))
    }

    /// Inserts a batch of drafts in order, e.g. nodes proposed by the
    /// suggestion service.
    ///
    /// # Errors
    ///
    /// Fails on the first draft that cannot be inserted; no partial batch is
    /// ever visible to the caller.
    pub fn add_all(
        &self,
        drafts: impl IntoIterator<Item = NodeDraft>,
    ) -> Result<(World, Vec<NodeId>)> {
        let mut world = self.clone();
        let mut ids = Vec::new();
        for draft in drafts {
            let (next, id) = world.add_node(draft)?;
            world = next;
            ids.push(id);
        }
        Ok((world, ids))
    }

    /// Applies a field-level patch to the node with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if the id is absent; the world is
    /// left unchanged.
    pub fn update_node(&self, id: &NodeId, patch: NodePatch) -> Result<World> {
        let mut node = self.require(id)?.clone();
        if let Some(name) = patch.name {
            node.name = name;
        }
        if let Some(desc) = patch.desc {
            node.desc = desc;
        }
        if let Some(location) = patch.grid_location {
            node.grid_location = Some(location);
        }

        let mut next = self.snapshot();
        next.nodes.insert(id.clone(), node);
        Ok(next)
    }

    /// Moves a node into `container`, or out of any container when `None`,
    /// keeping both ends of the containment relation in sync.
    ///
    /// # Errors
    ///
    /// - [`Error::NodeNotFound`] if either id is absent.
    /// - [`Error::ContainmentCycle`] if the move would make the node contain
    ///   itself, directly or transitively.
    pub fn set_container(&self, id: &NodeId, container: Option<NodeId>) -> Result<World> {
        let node = self.require(id)?;

        if let Some(target) = &container {
            self.require(target)?;
            // Walking the ancestor chain catches direct and transitive
            // cycles. The seen set keeps an already-malformed chain from
            // looping forever.
            let mut seen: HashSet<NodeId> = HashSet::new();
            let mut cursor = Some(target.clone());
            while let Some(current) = cursor {
                if current == *id {
                    return Err(Error::ContainmentCycle(id.clone()));
                }
                if !seen.insert(current.clone()) {
                    break;
                }
                cursor = self
                    .nodes
                    .get(&current)
                    .and_then(|n| n.container_node.as_ref())
                    .map(|c| c.target_id.clone());
            }
        }

        let old_container = node.container_node.as_ref().map(|c| c.target_id.clone());

        let mut next = self.snapshot();
        if let Some(old_id) = old_container {
            if let Some(mut old) = next.nodes.get(&old_id).cloned() {
                old.contained_nodes.remove(id);
                next.nodes.insert(old_id, old);
            }
        }

        let mut node = node.clone();
        node.container_node = container
            .clone()
            .map(|target_id| ContainerRef { target_id });
        next.nodes.insert(id.clone(), node);

        if let Some(new_id) = container {
            if let Some(mut new_container) = next.nodes.get(&new_id).cloned() {
                new_container.contained_nodes.insert(
                    id.clone(),
                    ContainmentEdge {
                        target_id: id.clone(),
                    },
                );
                next.nodes.insert(new_id, new_container);
            }
        }

        Ok(next)
    }

    /// Deletes a node and everything transitively contained in it.
    ///
    /// Afterwards no removed id remains reachable from any surviving node:
    /// class collections, the former container's containment edge, and
    /// neighbor edges keyed by a removed id are all cleaned up.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if the id is absent.
    pub fn delete_node(&self, id: &NodeId) -> Result<World> {
        self.require(id)?;

        let plan = removal_plan(self, id);
        let removed: HashSet<NodeId> = plan.iter().cloned().collect();

        let mut next = self.snapshot();
        for removed_id in &plan {
            next.nodes.remove(removed_id);
        }

        next.rooms = filtered(&next.rooms, &removed);
        next.agents = filtered(&next.agents, &removed);
        next.objects = filtered(&next.objects, &removed);

        // Sweep surviving nodes for edges keyed by a removed id. This covers
        // the root's former container as well as any stale references a
        // malformed graph might carry.
        let stale: Vec<NodeId> = next
            .nodes
            .iter()
            .filter(|(_, node)| {
                node.neighbors.keys().any(|k| removed.contains(k))
                    || node.contained_nodes.keys().any(|k| removed.contains(k))
            })
            .map(|(node_id, _)| node_id.clone())
            .collect();
        for node_id in stale {
            if let Some(mut node) = next.nodes.get(&node_id).cloned() {
                node.neighbors = node
                    .neighbors
                    .iter()
                    .filter(|(k, _)| !removed.contains(*k))
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect();
                node.contained_nodes = node
                    .contained_nodes
                    .iter()
                    .filter(|(k, _)| !removed.contains(*k))
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect();
                next.nodes.insert(node_id, node);
            }
        }

        Ok(next)
    }

    // --- Adjacency Operations ---

    /// Connects two rooms with a symmetric pair of neighbor edges whose
    /// labels follow the alignment's direction table.
    ///
    /// New edges carry no examine description and no lock payload.
    ///
    /// # Errors
    ///
    /// - [`Error::SelfConnection`] if both ids are the same room.
    /// - [`Error::NodeNotFound`] if either id is absent.
    /// - [`Error::NotARoom`] if either node is not a room.
    pub fn connect_rooms(
        &self,
        primary: &NodeId,
        secondary: &NodeId,
        alignment: Alignment,
    ) -> Result<World> {
        if primary == secondary {
            return Err(Error::SelfConnection(primary.clone()));
        }
        let a = self.require(primary)?;
        let b = self.require(secondary)?;
        if !a.is_room() {
            return Err(Error::NotARoom(primary.clone()));
        }
        if !b.is_room() {
            return Err(Error::NotARoom(secondary.clone()));
        }

        let (primary_label, secondary_label) = alignment.labels();

        let mut next = self.snapshot();
        let mut a = a.clone();
        a.neighbors.insert(
            secondary.clone(),
            NeighborEdge {
                target_id: secondary.clone(),
                label: primary_label.to_string(),
                examine_desc: None,
                locked_edge: None,
            },
        );
        next.nodes.insert(primary.clone(), a);

        let mut b = b.clone();
        b.neighbors.insert(
            primary.clone(),
            NeighborEdge {
                target_id: primary.clone(),
                label: secondary_label.to_string(),
                examine_desc: None,
                locked_edge: None,
            },
        );
        next.nodes.insert(secondary.clone(), b);

        Ok(next)
    }

    /// Removes both directions of the path between two rooms.
    ///
    /// Absent edges are not an error; the entries are simply gone afterward.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if either id is absent.
    pub fn disconnect_rooms(&self, primary: &NodeId, secondary: &NodeId) -> Result<World> {
        let a = self.require(primary)?.clone();
        let b = self.require(secondary)?.clone();

        let mut next = self.snapshot();
        let mut a = a;
        a.neighbors.remove(secondary);
        next.nodes.insert(primary.clone(), a);

        let mut b = b;
        b.neighbors.remove(primary);
        next.nodes.insert(secondary.clone(), b);

        Ok(next)
    }
}

/// Compares world content, ignoring the history chain.
impl PartialEq for World {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.rooms == other.rooms
            && self.agents == other.agents
            && self.objects == other.objects
            && self.nodes == other.nodes
    }
}

fn filtered(list: &Vector<NodeId>, removed: &HashSet<NodeId>) -> Vector<NodeId> {
    list.iter()
        .filter(|id| !removed.contains(id))
        .cloned()
        .collect()
}
