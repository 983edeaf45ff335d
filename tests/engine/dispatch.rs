//! Three-tier handler resolution and the guard protocol, observed through
//! full turns against the bundled game.

use fabula_engine::{HandlerSource, TurnEngine};
use fabula_foundation::{Channel, Command, Direction, LocationId, ObjectId};
use fabula_runtime::quest;
use fabula_world::WorldStore;

fn run(world: &mut WorldStore, engine: &mut TurnEngine, command: Command) -> Vec<String> {
    engine
        .perform(world, &command)
        .unwrap()
        .lines
        .into_iter()
        .map(|line| line.text)
        .collect()
}

#[test]
fn object_override_answers_before_the_default() {
    let mut world = quest::world().unwrap();
    let mut engine = TurnEngine::new();

    // Resolution keys on the named object; presence checks are the
    // handler's business.
    let report = engine
        .perform(&mut world, &Command::new("climb").with_object(ObjectId(10)))
        .unwrap();

    assert_eq!(report.source, Some(HandlerSource::Object(ObjectId(10))));
    assert_eq!(report.lines[0].text, "You cannot quite reach the branches.");
}

#[test]
fn object_override_accepts_pattern_synonyms() {
    let mut world = quest::world().unwrap();
    let mut engine = TurnEngine::new();

    // The tree's matcher is a predicate accepting "scale" as well.
    let report = engine
        .perform(&mut world, &Command::new("scale").with_object(ObjectId(10)))
        .unwrap();

    assert_eq!(report.source, Some(HandlerSource::Object(ObjectId(10))));
}

#[test]
fn default_answers_unclaimed_verbs() {
    let mut world = quest::world().unwrap();
    let mut engine = TurnEngine::new();

    let report = engine
        .perform(&mut world, &Command::new("climb").with_object(ObjectId(1)))
        .unwrap();

    assert_eq!(report.source, Some(HandlerSource::Default));
    assert_eq!(report.lines[0].text, "You can't climb that!");
}

#[test]
fn verb_synonyms_reach_the_same_handler() {
    let mut world = quest::world().unwrap();
    let mut engine = TurnEngine::new();
    let lines = run(
        &mut world,
        &mut engine,
        Command::new("take").with_object(ObjectId(1)),
    );
    assert_eq!(lines, vec!["You pick up an old diary."]);
    assert!(world.player().is_carrying(ObjectId(1)));
}

#[test]
fn not_understood_changes_nothing() {
    let mut world = quest::world().unwrap();
    let mut engine = TurnEngine::new();

    let report = engine.perform(&mut world, &Command::new("xyzzy")).unwrap();

    assert!(!report.is_understood());
    assert_eq!(report.lines[0].channel, Channel::Error);
    assert_eq!(world.player().location(), LocationId(1));
    assert!(world.player().inventory().is_empty());
}

#[test]
fn open_reveals_and_spills_contents() {
    let mut world = quest::world().unwrap();
    let mut engine = TurnEngine::new();

    let lines = run(
        &mut world,
        &mut engine,
        Command::new("open").with_object(ObjectId(2)),
    );

    assert_eq!(
        lines,
        vec!["You open a small box.", "There's something inside!"]
    );
    assert_eq!(
        world.object(ObjectId(7)).unwrap().room(),
        Some(LocationId(1))
    );
    assert!(world.object(ObjectId(2)).unwrap().contents().is_empty());
}

#[test]
fn pouring_the_plain_barrel_is_refused_by_its_own_handler() {
    let mut world = quest::world().unwrap();
    let mut engine = TurnEngine::new();
    engine
        .perform(
            &mut world,
            &Command::new("go").with_direction(Direction::North),
        )
        .unwrap();

    let report = engine
        .perform(&mut world, &Command::new("pour").with_object(ObjectId(6)))
        .unwrap();

    assert_eq!(report.source, Some(HandlerSource::Object(ObjectId(6))));
    assert_eq!(report.lines[0].channel, Channel::Error);
    assert_eq!(world.player().location(), LocationId(4));
}

#[test]
fn movement_uses_exit_transitions_and_defaults() {
    let mut world = quest::world().unwrap();
    let mut engine = TurnEngine::new();

    let lines = run(
        &mut world,
        &mut engine,
        Command::new("go").with_direction(Direction::East),
    );
    assert_eq!(lines, vec!["You head east."]);
    assert_eq!(world.player().location(), LocationId(2));

    let lines = run(
        &mut world,
        &mut engine,
        Command::new("go").with_direction(Direction::North),
    );
    assert_eq!(lines, vec!["You can't go there!"]);
    assert_eq!(world.player().location(), LocationId(2));
}
