//! Integration tests for containment relations.

use mapwright_foundation::{ClassTag, Error};
use mapwright_graph::{NodeDraft, World};

// =============================================================================
// Containment Symmetry
// =============================================================================

#[test]
fn both_ends_of_containment_stay_in_sync() {
    let world = World::new("w");
    let (world, cellar) = world
        .add_node(NodeDraft::new("Cellar", ClassTag::Room).at(0, 0))
        .unwrap();
    let (world, rat) = world
        .add_node(NodeDraft::new("rat", ClassTag::Agent).in_container(cellar.clone()))
        .unwrap();

    // parent -> child
    assert!(world.node(&cellar).unwrap().contained_nodes.contains_key(&rat));
    // child -> parent
    assert_eq!(
        world
            .node(&rat)
            .unwrap()
            .container_node
            .as_ref()
            .map(|c| c.target_id.clone()),
        Some(cellar)
    );
}

#[test]
fn symmetry_holds_for_every_contained_pair() {
    let world = World::new("w");
    let (world, room) = world
        .add_node(NodeDraft::new("Vault", ClassTag::Room).at(0, 0))
        .unwrap();
    let (world, chest) = world
        .add_node(NodeDraft::new("chest", ClassTag::Object).in_container(room.clone()))
        .unwrap();
    let (world, _) = world
        .add_node(NodeDraft::new("coin", ClassTag::Object).in_container(chest))
        .unwrap();

    for node in world.nodes() {
        for child_id in node.contained_nodes.keys() {
            let child = world.node(child_id).unwrap();
            assert_eq!(
                child.container_node.as_ref().map(|c| &c.target_id),
                Some(&node.node_id)
            );
        }
        if let Some(container) = &node.container_node {
            let parent = world.node(&container.target_id).unwrap();
            assert!(parent.contained_nodes.contains_key(&node.node_id));
        }
    }
}

// =============================================================================
// Moving Between Containers
// =============================================================================

#[test]
fn set_container_relocates_without_leaks() {
    let world = World::new("w");
    let (world, kitchen) = world
        .add_node(NodeDraft::new("Kitchen", ClassTag::Room).at(0, 0))
        .unwrap();
    let (world, pantry) = world
        .add_node(NodeDraft::new("Pantry", ClassTag::Room).at(1, 0))
        .unwrap();
    let (world, loaf) = world
        .add_node(NodeDraft::new("loaf", ClassTag::Object).in_container(kitchen.clone()))
        .unwrap();

    let world = world.set_container(&loaf, Some(pantry.clone())).unwrap();

    assert!(!world.node(&kitchen).unwrap().contained_nodes.contains_key(&loaf));
    assert!(world.node(&pantry).unwrap().contained_nodes.contains_key(&loaf));
}

#[test]
fn self_containment_is_rejected() {
    let world = World::new("w");
    let (world, chest) = world
        .add_node(NodeDraft::new("chest", ClassTag::Object))
        .unwrap();

    let result = world.set_container(&chest, Some(chest.clone()));
    assert!(matches!(result, Err(Error::ContainmentCycle(_))));
}

#[test]
fn transitive_cycles_are_rejected() {
    let world = World::new("w");
    let (world, a) = world
        .add_node(NodeDraft::new("crate a", ClassTag::Object))
        .unwrap();
    let (world, b) = world
        .add_node(NodeDraft::new("crate b", ClassTag::Object).in_container(a.clone()))
        .unwrap();
    let (world, c) = world
        .add_node(NodeDraft::new("crate c", ClassTag::Object).in_container(b))
        .unwrap();

    let result = world.set_container(&a, Some(c));
    assert!(matches!(result, Err(Error::ContainmentCycle(_))));
}
