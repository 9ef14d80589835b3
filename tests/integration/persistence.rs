//! Save/load across an editing session.

use mapwright_foundation::ClassTag;
use mapwright_graph::{Alignment, NodeDraft, Session, World, from_bytes, to_bytes};

fn sample_world() -> World {
    let world = World::new("Keep").with_id(42);
    let (world, gate) = world
        .add_node(NodeDraft::new("Gatehouse", ClassTag::Room).at(0, 0))
        .unwrap();
    let (world, yard) = world
        .add_node(NodeDraft::new("Courtyard", ClassTag::Room).at(0, 1))
        .unwrap();
    let (world, _) = world
        .add_node(NodeDraft::new("sentry", ClassTag::Agent).in_container(gate.clone()))
        .unwrap();
    world.connect_rooms(&gate, &yard, Alignment::Vertical).unwrap()
}

#[test]
fn a_session_survives_a_save_load_cycle() {
    let original = sample_world();

    let bytes = to_bytes(&original).unwrap();
    let loaded = from_bytes(&bytes).unwrap();

    assert_eq!(loaded, original);
    assert_eq!(loaded.name(), "Keep");
    assert_eq!(loaded.id(), Some(42));

    // A session opened on the loaded world edits it like a fresh one.
    let mut session = Session::new(loaded);
    session
        .apply(|w| {
            w.add_node(NodeDraft::new("Tower", ClassTag::Room).at(1, 1))
                .map(|(w, _)| w)
        })
        .unwrap();
    assert!(session.is_dirty());
    assert_eq!(session.world().node_count(), 4);
}

#[test]
fn history_never_crosses_the_save_boundary() {
    let world = sample_world();
    assert!(world.previous().is_some());

    let loaded = from_bytes(&to_bytes(&world).unwrap()).unwrap();
    assert!(loaded.previous().is_none());

    // Saving and loading again still round-trips cleanly.
    let again = from_bytes(&to_bytes(&loaded).unwrap()).unwrap();
    assert_eq!(again, loaded);
}
