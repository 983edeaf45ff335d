//! The canonical end-to-end scenarios.

use fabula_engine::TurnEngine;
use fabula_foundation::{Channel, Command, Direction, LocationId, ObjectId};
use fabula_runtime::quest;
use fabula_world::{Entity, Identity, Location, Object, Player, Reaction, WorldBuilder, WorldStore};

fn run(world: &mut WorldStore, engine: &mut TurnEngine, command: Command) -> Vec<String> {
    engine
        .perform(world, &command)
        .unwrap()
        .lines
        .into_iter()
        .map(|line| line.text)
        .collect()
}

// Scenario A: picking up the diary.
#[test]
fn get_diary_moves_it_into_the_inventory() {
    let mut world = quest::world().unwrap();
    let mut engine = TurnEngine::new();

    let lines = run(
        &mut world,
        &mut engine,
        Command::new("get").with_object(ObjectId(1)),
    );

    assert_eq!(lines, vec!["You pick up an old diary."]);
    assert_eq!(world.object(ObjectId(1)).unwrap().room(), None);
    let carried: Vec<_> = world.player().inventory().iter().copied().collect();
    assert_eq!(carried, vec![ObjectId(1)]);
}

// Scenario B: the fixed cabinet stays put.
#[test]
fn get_cabinet_is_refused_without_changes() {
    let mut world = quest::world().unwrap();
    let mut engine = TurnEngine::new();
    run(
        &mut world,
        &mut engine,
        Command::new("go").with_direction(Direction::East),
    );

    let report = engine
        .perform(&mut world, &Command::new("get").with_object(ObjectId(3)))
        .unwrap();

    assert!(report.lines.iter().any(|l| l.channel == Channel::Error));
    assert!(world.player().inventory().is_empty());
    assert_eq!(
        world.object(ObjectId(3)).unwrap().room(),
        Some(LocationId(2))
    );
}

// Scenario C: carry capacity.
#[test]
fn full_inventory_refuses_another_object() {
    let mut world = WorldBuilder::new()
        .location(Location::new(LocationId(5), "in the garage"))
        .object(Object::new(ObjectId(8), "a ladder").in_room(LocationId(5)))
        .object(Object::new(ObjectId(9), "a shovel"))
        .player(
            Player::new("you", LocationId(5))
                .with_max_carry(1)
                .with_carried(ObjectId(9)),
        )
        .build()
        .unwrap();
    let mut engine = TurnEngine::new();

    let lines = run(
        &mut world,
        &mut engine,
        Command::new("get").with_object(ObjectId(8)),
    );

    assert_eq!(lines, vec!["You can't carry any more!"]);
    let carried: Vec<_> = world.player().inventory().iter().copied().collect();
    assert_eq!(carried, vec![ObjectId(9)]);
}

// Scenario D: the guard vetoes going north.
#[test]
fn guard_veto_overrides_the_pending_relocation() {
    fn guard_blocks_north(
        out: &mut fabula_foundation::Output,
        view: &fabula_world::TurnView<'_>,
        _owner: fabula_world::Bystander<'_>,
    ) -> fabula_foundation::Outcome {
        if view.command.direction() == Some(Direction::North) {
            out.story("The guard stops you!");
            return fabula_foundation::Outcome::abort_with(
                fabula_foundation::PatchSet::new()
                    .player(fabula_foundation::PlayerPatch::MoveTo(view.location.id())),
            );
        }
        fabula_foundation::Outcome::none()
    }

    let mut world = WorldBuilder::new()
        .location(
            Location::new(LocationId(16), "in front of a large castle")
                .with_exit(Direction::North, LocationId(17))
                .with_exit(Direction::South, LocationId(15)),
        )
        .location(Location::new(LocationId(17), "in a narrow hall"))
        .location(Location::new(LocationId(15), "on a well-travelled road"))
        .object(
            Object::new(ObjectId(14), "a nasty-looking guard")
                .with_identity(Identity::new().with_fixed())
                .in_room(LocationId(16))
                .with_reaction(Reaction::pre(&["go"], guard_blocks_north)),
        )
        .player(Player::new("you", LocationId(16)).with_max_carry(5))
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
    assert!(
        report
            .lines
            .iter()
            .any(|l| l.text == "The guard stops you!")
    );
    assert_eq!(world.player().location(), LocationId(16));

    // Going south is not the guard's business.
    engine
        .perform(
            &mut world,
            &Command::new("go").with_direction(Direction::South),
        )
        .unwrap();
    assert_eq!(world.player().location(), LocationId(15));
}

// Scenario E: the barrel explosion, in both pour orders.
fn brew_and_detonate(salt_first: bool) {
    let mut world = quest::world().unwrap();
    let mut engine = TurnEngine::new();
    let go = |world: &mut WorldStore, engine: &mut TurnEngine, direction| {
        run(world, engine, Command::new("go").with_direction(direction));
    };

    // Collect the bottle from the box and the shaker from the cabinet.
    run(
        &mut world,
        &mut engine,
        Command::new("open").with_object(ObjectId(2)),
    );
    run(
        &mut world,
        &mut engine,
        Command::new("get").with_object(ObjectId(7)),
    );
    go(&mut world, &mut engine, Direction::East);
    run(
        &mut world,
        &mut engine,
        Command::new("open").with_object(ObjectId(3)),
    );
    run(
        &mut world,
        &mut engine,
        Command::new("get").with_object(ObjectId(4)),
    );
    go(&mut world, &mut engine, Direction::West);
    go(&mut world, &mut engine, Direction::North);
    assert_eq!(world.player().location(), LocationId(4));

    let (first, second) = if salt_first {
        (ObjectId(4), ObjectId(7))
    } else {
        (ObjectId(7), ObjectId(4))
    };
    run(
        &mut world,
        &mut engine,
        Command::new("pour").with_object(first),
    );
    run(
        &mut world,
        &mut engine,
        Command::new("pour").with_object(second),
    );

    let barrel = world.object(ObjectId(6)).unwrap();
    assert!(barrel.state().flag(fabula_foundation::Key::new("contains-salt")));
    assert!(barrel.state().flag(fabula_foundation::Key::new("contains-formula")));

    let lines = run(
        &mut world,
        &mut engine,
        Command::new("pour").with_object(ObjectId(6)),
    );

    assert!(lines.iter().any(|l| l.contains("blinding flash")));
    assert_eq!(world.player().location(), LocationId(6));
}

#[test]
fn explosion_fires_after_salt_then_formula() {
    brew_and_detonate(true);
}

#[test]
fn explosion_fires_after_formula_then_salt() {
    brew_and_detonate(false);
}

#[test]
fn one_liquid_is_not_enough() {
    let mut world = quest::world().unwrap();
    let mut engine = TurnEngine::new();

    run(
        &mut world,
        &mut engine,
        Command::new("open").with_object(ObjectId(2)),
    );
    run(
        &mut world,
        &mut engine,
        Command::new("get").with_object(ObjectId(7)),
    );
    run(
        &mut world,
        &mut engine,
        Command::new("go").with_direction(Direction::North),
    );
    run(
        &mut world,
        &mut engine,
        Command::new("pour").with_object(ObjectId(7)),
    );

    let report = engine
        .perform(&mut world, &Command::new("pour").with_object(ObjectId(6)))
        .unwrap();

    assert!(report.lines.iter().any(|l| l.channel == Channel::Error));
    assert_eq!(world.player().location(), LocationId(4));
}
