//! Placement, capacity, and guard-atomicity invariants under arbitrary play.

use fabula_engine::TurnEngine;
use fabula_foundation::{Channel, Command, Direction, LocationId, ObjectId};
use fabula_runtime::quest;
use fabula_world::{Entity, StateMap, WorldStore};
use proptest::prelude::*;

const VERBS: [&str; 18] = [
    "get",
    "take",
    "drop",
    "go",
    "open",
    "pour",
    "enter",
    "leave",
    "jump",
    "wave",
    "climb",
    "examine",
    "read",
    "wear",
    "remove",
    "look",
    "inventory",
    "xyzzy",
];

fn arb_command() -> impl Strategy<Value = Command> {
    (0usize..VERBS.len(), 0u8..3, 1u32..=17, 0usize..6).prop_map(|(verb, kind, object, direction)| {
        let command = Command::new(VERBS[verb]);
        match kind {
            0 => command,
            1 => command.with_object(ObjectId(object)),
            _ => command.with_direction(Direction::ALL[direction]),
        }
    })
}

/// The observable state a turn may change.
type Snapshot = (
    LocationId,
    Vec<ObjectId>,
    StateMap,
    Vec<(ObjectId, Option<LocationId>, Vec<ObjectId>, StateMap)>,
);

fn snapshot(world: &WorldStore) -> Snapshot {
    (
        world.player().location(),
        world.player().inventory().iter().copied().collect(),
        world.player().state().clone(),
        world
            .objects()
            .map(|object| {
                (
                    object.id(),
                    object.room(),
                    object.contents().iter().copied().collect(),
                    object.state().clone(),
                )
            })
            .collect(),
    )
}

fn assert_invariants(world: &WorldStore) {
    let player = world.player();

    // Capacity invariant.
    assert!(player.inventory().len() <= player.max_carry());

    for object in world.objects() {
        let id = object.id();
        let placed = object.room().is_some();
        let held = player.is_carrying(id);
        let containers: Vec<_> = world
            .objects()
            .filter(|container| container.contents().contains(&id))
            .map(fabula_world::Object::id)
            .collect();

        // Placement exclusivity: at most one placement, and held/contained
        // objects are never also standing in a room.
        assert!(containers.len() <= 1, "{id} is in two containers");
        assert!(
            !(placed && held),
            "{id} stands in a room while carried"
        );
        assert!(
            !(placed && !containers.is_empty()),
            "{id} stands in a room while contained"
        );
        assert!(
            !(held && !containers.is_empty()),
            "{id} is carried while contained"
        );

        // Fixed-object invariant.
        if object.identity().is_fixed {
            assert!(!held, "{id} is fixed but carried");
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn invariants_hold_under_arbitrary_play(
        commands in prop::collection::vec(arb_command(), 0..40)
    ) {
        let mut world = quest::world().unwrap();
        let mut engine = TurnEngine::new();
        assert_invariants(&world);

        for command in &commands {
            let before = snapshot(&world);
            let report = engine.perform(&mut world, command).unwrap();

            // Guard atomicity: a rejected command (error line, no veto)
            // changes nothing observable.
            let rejected = report.lines.iter().any(|l| l.channel == Channel::Error);
            if rejected && !report.vetoed {
                prop_assert_eq!(&snapshot(&world), &before);
            }

            assert_invariants(&world);
        }
    }

    #[test]
    fn turns_never_error_from_play(commands in prop::collection::vec(arb_command(), 0..24)) {
        let mut world = quest::world().unwrap();
        let mut engine = TurnEngine::new();
        for command in &commands {
            prop_assert!(engine.perform(&mut world, command).is_ok());
        }
    }
}
