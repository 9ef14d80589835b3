//! Integration tests driving the render grid from a live world.

use std::collections::BTreeMap;

use mapwright_foundation::ClassTag;
use mapwright_graph::{Node, NodeDraft, World, classify};
use mapwright_layout::{CELL_SIZE, build_grid, compute_borders};

fn rooms_of(world: &World) -> Vec<Node> {
    classify(world).rooms.into_iter().cloned().collect()
}

// =============================================================================
// End To End
// =============================================================================

#[test]
fn a_built_world_renders_onto_the_grid() {
    let world = World::new("manor");
    let (world, _) = world
        .add_node(NodeDraft::new("Foyer", ClassTag::Room).at(0, 0))
        .unwrap();
    let (world, _) = world
        .add_node(NodeDraft::new("Library", ClassTag::Room).at(1, 0))
        .unwrap();
    let (world, _) = world
        .add_node(NodeDraft::new("Tower", ClassTag::Room).at(1, 2))
        .unwrap();

    let rooms = rooms_of(&world);
    let borders = compute_borders(&rooms).unwrap();
    let grid = build_grid(&borders, &BTreeMap::from([(0, rooms)]), 0);

    // top = 2, left = 0: a 3x2 box.
    assert_eq!(grid.active().rows().len(), 3);
    assert_eq!(grid.active().rows()[0].len(), 2);
    assert_eq!(grid.active().room_count(), 3);

    assert_eq!(
        grid.active().cell(0, 1).unwrap().room().unwrap().name,
        "Tower"
    );
    assert_eq!(
        grid.active().cell(2, 0).unwrap().room().unwrap().name,
        "Foyer"
    );
    assert_eq!(
        grid.active().cell(2, 1).unwrap().room().unwrap().name,
        "Library"
    );
    assert!(grid.active().cell(1, 0).unwrap().is_empty());
}

#[test]
fn agents_and_objects_never_appear_on_the_grid() {
    let world = World::new("w");
    let (world, hall) = world
        .add_node(NodeDraft::new("Hall", ClassTag::Room).at(0, 0))
        .unwrap();
    let (world, _) = world
        .add_node(NodeDraft::new("butler", ClassTag::Agent).in_container(hall.clone()))
        .unwrap();
    let (world, _) = world
        .add_node(NodeDraft::new("vase", ClassTag::Object).in_container(hall))
        .unwrap();

    let rooms = rooms_of(&world);
    let borders = compute_borders(&rooms).unwrap();
    let grid = build_grid(&borders, &BTreeMap::from([(0, rooms)]), 0);

    assert_eq!(grid.active().room_count(), 1);
}

// =============================================================================
// Floor Stack
// =============================================================================

#[test]
fn the_model_always_carries_three_floors() {
    let world = World::new("w");
    let (world, _) = world
        .add_node(NodeDraft::new("Hall", ClassTag::Room).at(0, 0))
        .unwrap();

    let rooms = rooms_of(&world);
    let borders = compute_borders(&rooms).unwrap();
    let grid = build_grid(&borders, &BTreeMap::from([(3, rooms)]), 3);

    assert_eq!(grid.below().floor(), 2);
    assert_eq!(grid.active().floor(), 3);
    assert_eq!(grid.above().floor(), 4);
    assert_eq!(grid.below().room_count(), 0);
    assert_eq!(grid.above().room_count(), 0);
}

#[test]
fn all_floors_share_one_border_box() {
    let wide = World::new("w");
    let (wide, _) = wide
        .add_node(NodeDraft::new("West Wing", ClassTag::Room).at(-3, 0))
        .unwrap();
    let (wide, _) = wide
        .add_node(NodeDraft::new("East Wing", ClassTag::Room).at(3, 0))
        .unwrap();
    let narrow = World::new("w");
    let (narrow, _) = narrow
        .add_node(NodeDraft::new("Attic", ClassTag::Room).at(0, 0))
        .unwrap();

    let ground = rooms_of(&wide);
    let upper = rooms_of(&narrow);
    let all: Vec<Node> = ground.iter().chain(upper.iter()).cloned().collect();
    let borders = compute_borders(&all).unwrap();

    let grid = build_grid(&borders, &BTreeMap::from([(0, ground), (1, upper)]), 0);

    for floor in [grid.below(), grid.active(), grid.above()] {
        assert_eq!(floor.rows().len(), borders.rows());
        assert_eq!(floor.rows()[0].len(), borders.cols());
    }
    assert_eq!(grid.above().room_count(), 1);
}

// =============================================================================
// Viewport
// =============================================================================

#[test]
fn viewport_size_covers_the_whole_box() {
    let world = World::new("w");
    let (world, _) = world
        .add_node(NodeDraft::new("A", ClassTag::Room).at(0, 0))
        .unwrap();
    let (world, _) = world
        .add_node(NodeDraft::new("B", ClassTag::Room).at(4, 2))
        .unwrap();

    let rooms = rooms_of(&world);
    let borders = compute_borders(&rooms).unwrap();
    let grid = build_grid(&borders, &BTreeMap::from([(0, rooms)]), 0);

    assert_eq!(grid.viewport_size(), (5 * CELL_SIZE, 3 * CELL_SIZE));
}
