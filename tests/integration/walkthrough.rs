//! A parser-driven walkthrough: raw text in, rendered lines out.

use fabula_engine::TurnEngine;
use fabula_foundation::{Channel, LocationId, ObjectId};
use fabula_runtime::{RenderSink, Transcript, parse, quest};
use fabula_world::WorldStore;

struct Playthrough {
    world: WorldStore,
    engine: TurnEngine,
    transcript: Transcript,
}

impl Playthrough {
    fn new() -> Self {
        Self {
            world: quest::world().unwrap(),
            engine: TurnEngine::new(),
            transcript: Transcript::new(),
        }
    }

    fn play(&mut self, input: &str) {
        let command = parse(input, &self.world).unwrap();
        let report = self.engine.perform(&mut self.world, &command).unwrap();
        self.transcript.render_all(&report.lines);
    }

    fn saw(&self, text: &str) -> bool {
        self.transcript.texts().contains(&text)
    }
}

#[test]
fn the_quest_opening_moves() {
    let mut game = Playthrough::new();

    game.play("look");
    assert!(game.saw("You are in your living room."));
    assert!(game.saw("You see an old diary."));

    game.play("get the diary");
    assert!(game.saw("You pick up an old diary."));

    game.play("read diary");
    assert!(
        game.transcript
            .texts()
            .iter()
            .any(|t| t.contains("sodium chloride"))
    );

    game.play("open box");
    assert!(game.saw("There's something inside!"));

    game.play("examine bottle");
    assert!(game.saw("There's a hand-written label on the bottle."));
    assert!(game.saw("The bottle is filled with a red liquid."));

    game.play("east");
    game.play("open cabinet");
    game.play("get salt");
    assert!(game.saw("You pick up a salt shaker."));
    assert!(game.world.player().is_carrying(ObjectId(4)));
}

#[test]
fn the_brew_rewrites_the_map() {
    let mut game = Playthrough::new();

    game.play("open box");
    game.play("get bottle");
    game.play("east");
    game.play("open cabinet");
    game.play("get shaker");
    game.play("west");
    game.play("north");
    assert_eq!(game.world.player().location(), LocationId(4));

    game.play("pour salt");
    assert!(game.saw("You shake out every last grain of salt."));
    assert!(game.saw("It mixes into the rainwater in the barrel."));

    game.play("pour formula");
    assert!(game.saw("single gummy blob."));

    game.play("pour barrel");
    assert!(game.saw("The rainwater begins to churn and boil!"));
    assert_eq!(game.world.player().location(), LocationId(6));

    // The other world: down to the forest, up the tree via a jump.
    game.play("south");
    game.play("climb tree");
    assert!(game.saw("You cannot quite reach the branches."));
    game.play("jump");
    assert!(game.saw(
        "You grab onto a bottom limb of the tree, and pull yourself up."
    ));
    assert_eq!(game.world.player().location(), LocationId(8));

    game.play("wave");
    assert!(game.saw("You feel a refreshing breeze."));
}

#[test]
fn emptied_liquids_stay_empty() {
    let mut game = Playthrough::new();

    game.play("open box");
    game.play("get bottle");
    game.play("north");
    game.play("pour bottle");
    assert!(game.saw("single gummy blob."));

    let report_len = game.transcript.lines().len();
    game.play("pour bottle");
    let new_lines: Vec<_> = game.transcript.lines()[report_len..]
        .iter()
        .collect();
    assert!(new_lines.iter().any(|l| l.channel == Channel::Error));
    assert!(new_lines.iter().any(|l| l.text == "It's empty."));
}

#[test]
fn unknown_words_are_narrated_not_fatal() {
    let mut game = Playthrough::new();
    game.play("frobnicate the diary");
    assert!(game.saw("You don't know how to do that!"));

    game.play("get unicorn");
    assert!(game.saw("You can't get that!"));
}
