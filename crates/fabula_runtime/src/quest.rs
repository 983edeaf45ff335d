//! "The Quest", the bundled demonstration game.
//!
//! A suburban house, a road to a castle, and a barrel of rainwater that
//! reacts badly to salt and a certain secret formula.

use fabula_foundation::{
    Direction, Key, LocationId, ObjectId, ObjectPatch, Outcome, Output, PatchSet, PlayerPatch,
    Result, StateOp, Value, keys,
};
use fabula_world::{
    ActionEntry, Bystander, Entity, Identity, Location, Object, Player, Reaction, StateMap,
    TurnView, VerbMatcher, WorldBuilder, WorldStore,
};

/// Set on the barrel once salt has been poured at its location.
const CONTAINS_SALT: Key = Key::new("contains-salt");
/// Set on the barrel once the formula has been poured at its location.
const CONTAINS_FORMULA: Key = Key::new("contains-formula");

/// Where the explosion throws the player.
const OTHER_WORLD: LocationId = LocationId(6);

/// Builds the full game world.
///
/// # Errors
///
/// Returns an error if the content is malformed; the tests keep this
/// unreachable.
pub fn world() -> Result<WorldStore> {
    WorldBuilder::new()
        .location(
            Location::new(LocationId(1), "in your living room")
                .with_exit(Direction::North, LocationId(4))
                .with_exit(Direction::South, LocationId(3))
                .with_exit(Direction::East, LocationId(2)),
        )
        .location(
            Location::new(LocationId(2), "in the kitchen").with_exit(Direction::West, LocationId(1)),
        )
        .location(
            Location::new(LocationId(3), "in the library").with_exit(Direction::North, LocationId(1)),
        )
        .location(
            Location::new(LocationId(4), "in the front yard")
                .with_exit(Direction::South, LocationId(1))
                .with_exit(Direction::West, LocationId(5)),
        )
        .location(
            Location::new(LocationId(5), "in the garage").with_exit(Direction::East, LocationId(4)),
        )
        .location(
            Location::new(LocationId(6), "in an open field")
                .with_exit(Direction::North, LocationId(9))
                .with_exit(Direction::South, LocationId(7)),
        )
        .location(
            Location::new(LocationId(7), "at the edge of a forest")
                .with_exit(Direction::North, LocationId(6)),
        )
        .location(
            Location::new(LocationId(8), "on a branch of a tree")
                .with_exit(Direction::Down, LocationId(7)),
        )
        .location(
            Location::new(LocationId(9), "on a long, winding road")
                .with_exit(Direction::South, LocationId(6))
                .with_exit(Direction::East, LocationId(10)),
        )
        .location(
            Location::new(LocationId(10), "on a long, winding road")
                .with_exit(Direction::North, LocationId(11))
                .with_exit(Direction::West, LocationId(9)),
        )
        .location(
            Location::new(LocationId(11), "on a long, winding road")
                .with_exit(Direction::South, LocationId(10))
                .with_exit(Direction::West, LocationId(12)),
        )
        .location(
            Location::new(LocationId(12), "on the south bank of a river")
                .with_exit(Direction::East, LocationId(11)),
        )
        .location(
            Location::new(LocationId(13), "inside a wooden boat").with_leavable(ObjectId(12)),
        )
        .location(
            Location::new(LocationId(14), "on the north bank of a river")
                .with_exit(Direction::North, LocationId(15)),
        )
        .location(
            Location::new(LocationId(15), "on a well-travelled road")
                .with_exit(Direction::North, LocationId(16))
                .with_exit(Direction::South, LocationId(14)),
        )
        .location(
            Location::new(LocationId(16), "in front of a large castle")
                .with_exit(Direction::North, LocationId(17))
                .with_exit(Direction::South, LocationId(15)),
        )
        .location(
            Location::new(LocationId(17), "in a narrow hall")
                .with_exit(Direction::South, LocationId(16))
                .with_exit(Direction::Up, LocationId(18)),
        )
        .location(
            Location::new(LocationId(18), "in a large hall")
                .with_exit(Direction::Down, LocationId(17)),
        )
        .location(
            Location::new(LocationId(19), "at the top of a tree")
                .with_exit(Direction::Down, LocationId(8)),
        )
        .object(
            Object::new(ObjectId(1), "an old diary")
                .with_tag("diary")
                .in_room(LocationId(1))
                .with_frozen_state(
                    keys::WRITING,
                    "Add sodium chloride plus the formula to rainwater to reach the other world.",
                ),
        )
        .object(
            Object::new(ObjectId(2), "a small box")
                .with_tag("box")
                .with_identity(Identity::new().with_openable())
                .in_room(LocationId(1))
                .with_contents([ObjectId(7)]),
        )
        .object(
            Object::new(ObjectId(3), "cabinet")
                .with_tag("cabinet")
                .with_identity(Identity::new().with_fixed().with_openable())
                .in_room(LocationId(2))
                .with_contents([ObjectId(4)]),
        )
        .object(
            Object::new(ObjectId(4), "a salt shaker")
                .with_tag("salt")
                .with_tag("shaker")
                .with_identity(
                    Identity::new()
                        .with_pourable()
                        .with_derived(keys::DESCRIPTION, "shaker-description", shaker_description),
                )
                .with_reaction(Reaction::post(&["pour"], shaker_poured)),
        )
        .object(
            Object::new(ObjectId(5), "a dictionary")
                .with_tag("dictionary")
                .in_room(LocationId(3))
                .with_frozen_state(
                    keys::WRITING,
                    "Sodium chloride. (n.) Formal chemical name for common table salt.",
                ),
        )
        .object(
            Object::new(ObjectId(6), "a wooden barrel")
                .with_tag("barrel")
                .with_identity(
                    Identity::new()
                        .with_fixed()
                        .with_description("It is filled with rainwater."),
                )
                .in_room(LocationId(4))
                .with_handler(ActionEntry::words(&["pour"], pour_into_barrel))
                .with_reaction(Reaction::post(&["pour"], barrel_collects)),
        )
        .object(
            Object::new(ObjectId(7), "a small bottle")
                .with_tag("bottle")
                .with_tag("formula")
                .with_identity(
                    Identity::new()
                        .with_pourable()
                        .with_derived(keys::DESCRIPTION, "bottle-description", bottle_description),
                )
                .with_frozen_state(keys::WRITING, "Secret Formula")
                .with_reaction(Reaction::post(&["pour"], bottle_poured)),
        )
        .object(
            Object::new(ObjectId(8), "a ladder")
                .with_tag("ladder")
                .in_room(LocationId(5)),
        )
        .object(
            Object::new(ObjectId(9), "a shovel")
                .with_tag("shovel")
                .in_room(LocationId(5)),
        )
        .object(
            Object::new(ObjectId(10), "a tree")
                .with_tag("tree")
                .with_identity(Identity::new().with_fixed())
                .in_room(LocationId(7))
                .with_handler(ActionEntry::new(VerbMatcher::Test(climbish), climb_tree))
                .with_reaction(Reaction::post(&["jump"], tree_catches)),
        )
        .object(
            Object::new(ObjectId(11), "a golden sword").with_tag("sword"),
        )
        .object(
            Object::new(ObjectId(12), "a wooden boat")
                .with_tag("boat")
                .with_identity(Identity::new().with_fixed().with_enterable())
                .in_room(LocationId(12))
                .with_state(keys::ENTER_DESTINATION, LocationId(13))
                .with_state(keys::ENTER_TRANSITION, "You climb into the boat."),
        )
        .object(
            Object::new(ObjectId(13), "a magic fan")
                .with_tag("fan")
                .in_room(LocationId(8))
                .with_reaction(Reaction::post(&["wave"], fan_breeze)),
        )
        .object(
            Object::new(ObjectId(14), "a nasty-looking guard")
                .with_tag("guard")
                .with_identity(Identity::new().with_fixed())
                .in_room(LocationId(16))
                .with_reaction(Reaction::pre(&["go"], guard_blocks_north)),
        )
        .object(
            Object::new(ObjectId(15), "a glass case")
                .with_tag("case")
                .with_identity(Identity::new().with_fixed())
                .in_room(LocationId(18)),
        )
        .object(
            Object::new(ObjectId(16), "a glowing ruby").with_tag("ruby"),
        )
        .object(
            Object::new(ObjectId(17), "a pair of rubber gloves")
                .with_tag("gloves")
                .with_identity(Identity::new().with_wearable())
                .in_room(LocationId(19)),
        )
        .player(Player::new("you", LocationId(1)).with_max_carry(5))
        .build()
}

fn shaker_description(state: &StateMap) -> Value {
    if state.flag(keys::IS_EMPTY) {
        Value::from("The shaker is empty.")
    } else {
        Value::from("Woah! It contains salt!")
    }
}

fn bottle_description(state: &StateMap) -> Value {
    let filling = if state.flag(keys::IS_EMPTY) {
        "The bottle is empty."
    } else {
        "The bottle is filled with a red liquid."
    };
    Value::from(format!(
        "There's a hand-written label on the bottle.\n{filling}"
    ))
}

fn climbish(verb: &str) -> bool {
    matches!(verb, "climb" | "scale")
}

fn climb_tree(out: &mut Output, _view: &TurnView<'_>) -> Outcome {
    out.story("You cannot quite reach the branches.");
    Outcome::veto()
}

fn tree_catches(out: &mut Output, _view: &TurnView<'_>, _owner: Bystander<'_>) -> Outcome {
    out.story("You grab onto a bottom limb of the tree, and pull yourself up.");
    Outcome::with(PatchSet::new().player(PlayerPatch::MoveTo(LocationId(8))))
}

fn fan_breeze(out: &mut Output, _view: &TurnView<'_>, _owner: Bystander<'_>) -> Outcome {
    out.story("You feel a refreshing breeze.");
    Outcome::none()
}

fn guard_blocks_north(out: &mut Output, view: &TurnView<'_>, _owner: Bystander<'_>) -> Outcome {
    if view.command.direction() == Some(Direction::North) {
        out.story("The guard stops you!");
        return Outcome::abort_with(
            PatchSet::new().player(PlayerPatch::MoveTo(view.location.id())),
        );
    }
    Outcome::none()
}

fn shaker_poured(out: &mut Output, view: &TurnView<'_>, owner: Bystander<'_>) -> Outcome {
    let Some(shaker) = owner.object() else {
        return Outcome::none();
    };
    if view.command.object() != Some(shaker.id()) {
        return Outcome::none();
    }

    out.story("You shake out every last grain of salt.");
    Outcome::with(PatchSet::new().object(
        shaker.id(),
        ObjectPatch::State(StateOp::Set(keys::IS_EMPTY, Value::Bool(true))),
    ))
}

fn bottle_poured(out: &mut Output, view: &TurnView<'_>, owner: Bystander<'_>) -> Outcome {
    let Some(bottle) = owner.object() else {
        return Outcome::none();
    };
    if view.command.object() != Some(bottle.id()) {
        return Outcome::none();
    }

    out.story("Although the contents appeared to be liquid, it comes out in a");
    out.story("single gummy blob.");
    Outcome::with(PatchSet::new().object(
        bottle.id(),
        ObjectPatch::State(StateOp::Set(keys::IS_EMPTY, Value::Bool(true))),
    ))
}

// The barrel owns the mixture bookkeeping: whenever a pour completes at its
// location, it records which liquid went in.
fn barrel_collects(out: &mut Output, view: &TurnView<'_>, owner: Bystander<'_>) -> Outcome {
    let Some(barrel) = owner.object() else {
        return Outcome::none();
    };
    let Some(poured) = view.object else {
        return Outcome::none();
    };
    let key = if poured.has_tag("salt") {
        CONTAINS_SALT
    } else if poured.has_tag("formula") {
        CONTAINS_FORMULA
    } else {
        return Outcome::none();
    };

    out.story("It mixes into the rainwater in the barrel.");
    Outcome::with(PatchSet::new().object(
        barrel.id(),
        ObjectPatch::State(StateOp::Set(key, Value::Bool(true))),
    ))
}

// Pouring *the barrel itself* is the trigger: once both liquids are in, the
// mixture goes off.
fn pour_into_barrel(out: &mut Output, view: &TurnView<'_>) -> Outcome {
    let Some(barrel) = view.object else {
        out.error("You can't pour that!");
        return Outcome::veto();
    };
    if !view.target_visible() {
        out.error("It's not here.");
        return Outcome::veto();
    }
    if !(barrel.state().flag(CONTAINS_SALT) && barrel.state().flag(CONTAINS_FORMULA)) {
        out.error("You can't pour that!");
        return Outcome::veto();
    }

    out.story("The rainwater begins to churn and boil!");
    out.story("There is a blinding flash, and everything around you changes.");
    Outcome::abort_with(PatchSet::new().player(PlayerPatch::MoveTo(OTHER_WORLD)))
}
