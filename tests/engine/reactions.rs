//! Reaction ordering, veto precedence, and phase semantics.

use fabula_engine::TurnEngine;
use fabula_foundation::{
    Command, Direction, LocationId, ObjectId, Outcome, Output, PatchSet, PlayerPatch, StateOp,
    Value,
};
use fabula_world::{
    Bystander, Entity, Location, Object, Player, Reaction, TurnView, WorldBuilder, WorldStore,
};

const MARKER: fabula_foundation::Key = fabula_foundation::Key::new("marker");

fn say_first(out: &mut Output, _view: &TurnView<'_>, _owner: Bystander<'_>) -> Outcome {
    out.story("first");
    Outcome::none()
}

fn say_second(out: &mut Output, _view: &TurnView<'_>, _owner: Bystander<'_>) -> Outcome {
    out.story("second");
    Outcome::none()
}

fn say_location(out: &mut Output, _view: &TurnView<'_>, _owner: Bystander<'_>) -> Outcome {
    out.story("location");
    Outcome::none()
}

fn veto_and_mark(out: &mut Output, view: &TurnView<'_>, owner: Bystander<'_>) -> Outcome {
    out.story("The guard stops you!");
    let mut patches = PatchSet::new().player(PlayerPatch::MoveTo(view.location.id()));
    if let Some(object) = owner.object() {
        patches = patches.object(
            object.id(),
            fabula_foundation::ObjectPatch::State(StateOp::Set(MARKER, Value::Bool(true))),
        );
    }
    Outcome::abort_with(patches)
}

fn chain_marker(_out: &mut Output, _view: &TurnView<'_>, owner: Bystander<'_>) -> Outcome {
    match owner.object() {
        Some(object) => Outcome::with(PatchSet::new().object(
            object.id(),
            fabula_foundation::ObjectPatch::State(StateOp::Set(MARKER, Value::Bool(true))),
        )),
        None => Outcome::none(),
    }
}

fn ordered_world() -> WorldStore {
    WorldBuilder::new()
        .location(
            Location::new(LocationId(1), "in a courtyard")
                .with_reaction(Reaction::post(&["jump"], say_location)),
        )
        .object(
            Object::new(ObjectId(9), "a late bystander")
                .in_room(LocationId(1))
                .with_reaction(Reaction::post(&["jump"], say_second)),
        )
        .object(
            Object::new(ObjectId(2), "an early bystander")
                .in_room(LocationId(1))
                .with_reaction(Reaction::post(&["jump"], say_first)),
        )
        .player(Player::new("you", LocationId(1)).with_max_carry(3))
        .build()
        .unwrap()
}

#[test]
fn object_reactions_run_in_ascending_id_order_before_location_reactions() {
    let mut world = ordered_world();
    let mut engine = TurnEngine::new();

    let report = engine.perform(&mut world, &Command::new("jump")).unwrap();
    let texts: Vec<_> = report.lines.iter().map(|l| l.text.as_str()).collect();

    // Declaration order was 9 then 2; dispatch is 2, 9, then the location.
    assert_eq!(
        texts,
        vec!["You jump into the air!", "first", "second", "location"]
    );
}

#[test]
fn pre_veto_discards_primary_patches_and_skips_post() {
    let mut world = WorldBuilder::new()
        .location(
            Location::new(LocationId(16), "in front of a large castle")
                .with_exit(Direction::North, LocationId(17)),
        )
        .location(Location::new(LocationId(17), "in a narrow hall"))
        .object(
            Object::new(ObjectId(14), "a nasty-looking guard")
                .in_room(LocationId(16))
                .with_reaction(Reaction::pre(&["go"], veto_and_mark)),
        )
        .object(
            Object::new(ObjectId(15), "a post-phase bystander")
                .in_room(LocationId(16))
                .with_reaction(Reaction::post(&["go"], chain_marker)),
        )
        .player(Player::new("you", LocationId(16)).with_max_carry(3))
        .build()
        .unwrap();
    let mut engine = TurnEngine::new();

    let report = engine
        .perform(
            &mut world,
            &Command::new("go").with_direction(Direction::North),
        )
        .unwrap();

    assert!(report.vetoed);
    // The primary relocation never reached the store.
    assert_eq!(world.player().location(), LocationId(16));
    // The aborting reaction's own patch did.
    assert!(world.object(ObjectId(14)).unwrap().state().flag(MARKER));
    // Post reactions never fired once the turn was vetoed.
    assert!(!world.object(ObjectId(15)).unwrap().state().flag(MARKER));
}

#[test]
fn post_reactions_chain_patches_onto_a_successful_turn() {
    let mut world = WorldBuilder::new()
        .location(Location::new(LocationId(1), "in a courtyard"))
        .object(
            Object::new(ObjectId(5), "a chime")
                .in_room(LocationId(1))
                .with_reaction(Reaction::post(&["wave"], chain_marker)),
        )
        .player(Player::new("you", LocationId(1)).with_max_carry(3))
        .build()
        .unwrap();
    let mut engine = TurnEngine::new();

    let report = engine.perform(&mut world, &Command::new("wave")).unwrap();

    assert!(!report.vetoed);
    assert!(world.object(ObjectId(5)).unwrap().state().flag(MARKER));
}

#[test]
fn aborted_primary_skips_reactions_entirely() {
    let mut world = WorldBuilder::new()
        .location(Location::new(LocationId(1), "in a courtyard"))
        .object(
            Object::new(ObjectId(5), "a chime")
                .in_room(LocationId(1))
                .with_reaction(Reaction::post(&["go"], chain_marker)),
        )
        .player(Player::new("you", LocationId(1)).with_max_carry(3))
        .build()
        .unwrap();
    let mut engine = TurnEngine::new();

    // No exits here, so `go` fails its guard.
    let report = engine
        .perform(
            &mut world,
            &Command::new("go").with_direction(Direction::North),
        )
        .unwrap();

    assert!(!report.vetoed);
    assert!(!world.object(ObjectId(5)).unwrap().state().flag(MARKER));
}
