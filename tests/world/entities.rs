//! Entity reads: derived fields, frozen keys, tag lookup.

use fabula_engine::{TurnEngine, commit};
use fabula_foundation::{
    Command, ObjectId, ObjectPatch, PatchSet, StateOp, Value, keys,
};
use fabula_runtime::quest;
use fabula_world::Entity;

#[test]
fn derived_description_changes_once_emptied() {
    let mut world = quest::world().unwrap();
    let shaker = world.object(ObjectId(4)).unwrap();
    assert_eq!(
        shaker.read(keys::DESCRIPTION),
        Some(Value::from("Woah! It contains salt!"))
    );

    let patches = PatchSet::new().object(
        ObjectId(4),
        ObjectPatch::State(StateOp::Set(keys::IS_EMPTY, Value::Bool(true))),
    );
    commit(&mut world, &patches).unwrap();

    let shaker = world.object(ObjectId(4)).unwrap();
    assert_eq!(
        shaker.read(keys::DESCRIPTION),
        Some(Value::from("The shaker is empty."))
    );
}

#[test]
fn derived_keys_cannot_be_patched() {
    let mut world = quest::world().unwrap();
    let patches = PatchSet::new().object(
        ObjectId(4),
        ObjectPatch::State(StateOp::Set(keys::DESCRIPTION, Value::from("blank"))),
    );
    commit(&mut world, &patches).unwrap();

    let shaker = world.object(ObjectId(4)).unwrap();
    assert_eq!(
        shaker.read(keys::DESCRIPTION),
        Some(Value::from("Woah! It contains salt!"))
    );
}

#[test]
fn frozen_inscription_survives_a_direct_patch() {
    let mut world = quest::world().unwrap();
    let patches = PatchSet::new().object(
        ObjectId(5),
        ObjectPatch::State(StateOp::Set(keys::WRITING, Value::from("defaced"))),
    );
    commit(&mut world, &patches).unwrap();

    let dictionary = world.object(ObjectId(5)).unwrap();
    assert_eq!(
        dictionary.state().text(keys::WRITING),
        Some("Sodium chloride. (n.) Formal chemical name for common table salt.")
    );
}

#[test]
fn read_surfaces_the_inscription() {
    let mut world = quest::world().unwrap();
    let mut engine = TurnEngine::new();

    let report = engine
        .perform(&mut world, &Command::new("read").with_object(ObjectId(1)))
        .unwrap();

    let text = &report.lines[0].text;
    assert!(text.contains("sodium chloride"), "unexpected line: {text}");
}

#[test]
fn tags_find_objects_anywhere() {
    let world = quest::world().unwrap();
    assert_eq!(world.object_by_tag("barrel").unwrap().id(), ObjectId(6));
    assert_eq!(world.object_by_tag("formula").unwrap().id(), ObjectId(7));
    assert_eq!(world.object_by_tag("bottle").unwrap().id(), ObjectId(7));
    assert!(world.object_by_tag("dragon").is_none());
}
