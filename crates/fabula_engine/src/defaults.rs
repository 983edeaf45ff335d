//! The engine's built-in default actions.
//!
//! Every handler follows the guard-before-mutate discipline: all
//! precondition checks run first, each failure printing one error line and
//! returning [`Outcome::veto`]; patches are computed only after every check
//! passes.

use fabula_foundation::{
    ObjectPatch, Outcome, Output, PatchSet, PlayerPatch, StateOp, Value, keys,
};
use fabula_world::{ActionEntry, Entity, TurnView};

use crate::registry::ActionRegistry;

/// Builds the default registry: movement, manipulation, perception, and the
/// flavor verbs reactions like to extend.
#[must_use]
pub fn registry() -> ActionRegistry {
    let mut registry = ActionRegistry::new();
    registry.register(ActionEntry::words(&["go", "walk"], go));
    registry.register(ActionEntry::words(&["get", "take"], get));
    registry.register(ActionEntry::words(&["drop"], drop_held));
    registry.register(ActionEntry::words(&["examine", "inspect"], examine));
    registry.register(ActionEntry::words(&["read"], read));
    registry.register(ActionEntry::words(&["open"], open));
    registry.register(ActionEntry::words(&["pour"], pour));
    registry.register(ActionEntry::words(&["enter"], enter));
    registry.register(ActionEntry::words(&["leave"], leave));
    registry.register(ActionEntry::words(&["climb"], climb));
    registry.register(ActionEntry::words(&["jump"], jump));
    registry.register(ActionEntry::words(&["wave"], wave));
    registry.register(ActionEntry::words(&["wear"], wear));
    registry.register(ActionEntry::words(&["remove", "doff"], doff));
    registry.register(ActionEntry::words(&["look"], look));
    registry.register(ActionEntry::words(&["inventory"], inventory));
    registry
}

fn go(out: &mut Output, view: &TurnView<'_>) -> Outcome {
    let Some(direction) = view.command.direction() else {
        out.error("You can't go there!");
        return Outcome::veto();
    };
    let Some(exit) = view.location.exit(direction) else {
        out.error("You can't go there!");
        return Outcome::veto();
    };

    match &exit.transition {
        Some(text) => out.story(text.as_ref()),
        None => out.story(format!("You head {direction}.")),
    }

    Outcome::with(PatchSet::new().player(PlayerPatch::MoveTo(exit.destination)))
}

fn get(out: &mut Output, view: &TurnView<'_>) -> Outcome {
    let Some(object) = view.object else {
        out.error("You can't get that!");
        return Outcome::veto();
    };
    if view.player.is_carrying(object.id()) {
        out.error("You're already carrying it!");
        return Outcome::veto();
    }
    if !object.is_in(view.location.id()) {
        out.error("It's not here!");
        return Outcome::veto();
    }
    if view.player.inventory().len() >= view.player.max_carry() {
        out.error("You can't carry any more!");
        return Outcome::veto();
    }
    if object.identity().is_fixed {
        out.error("Try as you might, you can't pick it up.");
        return Outcome::veto();
    }

    out.story(format!("You pick up {}.", object.name()));

    Outcome::with(
        PatchSet::new()
            .player(PlayerPatch::Take(object.id()))
            .object(object.id(), ObjectPatch::SetRoom(None)),
    )
}

fn drop_held(out: &mut Output, view: &TurnView<'_>) -> Outcome {
    let Some(object) = view.object else {
        out.error("You can't drop that!");
        return Outcome::veto();
    };
    if !view.player.is_carrying(object.id()) {
        out.error("You don't have it!");
        return Outcome::veto();
    }

    out.story(format!("You drop {}.", object.name()));

    Outcome::with(
        PatchSet::new()
            .player(PlayerPatch::Drop(object.id()))
            .object(object.id(), ObjectPatch::SetRoom(Some(view.location.id()))),
    )
}

fn examine(out: &mut Output, view: &TurnView<'_>) -> Outcome {
    let Some(object) = view.object else {
        out.error(format!("What do you want to {}?", view.command.verb));
        return Outcome::veto();
    };
    if !view.target_visible() {
        out.error("It's not here.");
        return Outcome::veto();
    }

    out.story(format!("You examine {}.", object.name()));
    match object.read(keys::DESCRIPTION) {
        Some(Value::Text(text)) => {
            for line in text.lines() {
                out.story(line);
            }
        }
        _ => out.story("You see nothing unusual."),
    }

    Outcome::none()
}

fn read(out: &mut Output, view: &TurnView<'_>) -> Outcome {
    let Some(object) = view.object else {
        out.error("What do you want to read?");
        return Outcome::veto();
    };
    if !view.target_visible() {
        out.error("It's not here.");
        return Outcome::veto();
    }

    match object.read(keys::WRITING) {
        Some(Value::Text(text)) => {
            out.story(format!("It says: \"{text}\""));
            Outcome::none()
        }
        _ => {
            out.story("There's nothing written on it.");
            Outcome::veto()
        }
    }
}

fn open(out: &mut Output, view: &TurnView<'_>) -> Outcome {
    let Some(object) = view.object else {
        out.error("You can't open that!");
        return Outcome::veto();
    };
    if !object.identity().is_openable {
        out.error("You can't open that!");
        return Outcome::veto();
    }
    if !view.target_visible() {
        out.error("It's not here.");
        return Outcome::veto();
    }
    if object.state().flag(keys::IS_OPEN) {
        out.error("It's already open!");
        return Outcome::veto();
    }

    out.story(format!("You open {}.", object.name()));

    let mut patches = PatchSet::new().object(
        object.id(),
        ObjectPatch::State(StateOp::Set(keys::IS_OPEN, Value::Bool(true))),
    );

    if object.contents().is_empty() {
        out.story("It's empty.");
    } else {
        out.story("There's something inside!");
        // Revealed contents spill into the current location; clearing the
        // container in the same outcome keeps placement exclusive.
        for &content in object.contents() {
            patches = patches.object(content, ObjectPatch::SetRoom(Some(view.location.id())));
        }
        patches = patches.object(object.id(), ObjectPatch::ClearContents);
    }

    Outcome::with(patches)
}

fn pour(out: &mut Output, view: &TurnView<'_>) -> Outcome {
    let Some(object) = view.object else {
        out.error("You can't pour that!");
        return Outcome::veto();
    };
    if !object.identity().is_pourable {
        out.error("You can't pour that!");
        return Outcome::veto();
    }
    if !view.target_visible() {
        out.error("It's not here.");
        return Outcome::veto();
    }
    if object.state().flag(keys::IS_EMPTY) {
        out.error("It's empty.");
        return Outcome::veto();
    }

    // What pouring does is the poured liquid's business, via reactions.
    Outcome::none()
}

fn enter(out: &mut Output, view: &TurnView<'_>) -> Outcome {
    let Some(object) = view.object else {
        out.error("You can't enter that!");
        return Outcome::veto();
    };
    if !object.identity().is_enterable {
        out.error("You can't enter that!");
        return Outcome::veto();
    }
    if !view.target_visible() {
        out.error("It's not here.");
        return Outcome::veto();
    }
    let destination = object.state().location(keys::ENTER_DESTINATION);
    let Some(destination) = destination.filter(|id| view.world.location(*id).is_some()) else {
        out.story("It doesn't seem to lead anywhere...");
        return Outcome::veto();
    };

    match object.state().text(keys::ENTER_TRANSITION) {
        Some(text) => out.story(text),
        None => out.story(format!("You enter {}.", object.name())),
    }

    Outcome::with(PatchSet::new().player(PlayerPatch::MoveTo(destination)))
}

fn leave(out: &mut Output, view: &TurnView<'_>) -> Outcome {
    if !view.location.is_leavable() {
        out.error("You can't leave here!");
        return Outcome::veto();
    }
    let return_object = view
        .location
        .return_object()
        .and_then(|id| view.world.object(id));
    let Some(return_object) = return_object else {
        out.story("...and go where?");
        return Outcome::veto();
    };
    let Some(room) = return_object.room() else {
        out.story("...and go where?");
        return Outcome::veto();
    };

    match view.location.state().text(keys::LEAVE_TRANSITION) {
        Some(text) => out.story(text),
        None => out.story(format!("You leave {}.", return_object.name())),
    }

    Outcome::with(PatchSet::new().player(PlayerPatch::MoveTo(room)))
}

fn climb(out: &mut Output, view: &TurnView<'_>) -> Outcome {
    // Climbable things declare their own handler; reaching this default
    // means nothing at the scene answers the verb.
    if view.object.is_some() {
        out.error("You can't climb that!");
    } else {
        out.story("What do you want to climb?");
    }
    Outcome::veto()
}

fn jump(out: &mut Output, _view: &TurnView<'_>) -> Outcome {
    out.story("You jump into the air!");
    Outcome::none()
}

fn wave(out: &mut Output, view: &TurnView<'_>) -> Outcome {
    match view.object {
        Some(object) => out.story(format!("You wave {}.", object.name())),
        None => out.story("You wave."),
    }
    Outcome::none()
}

fn wear(out: &mut Output, view: &TurnView<'_>) -> Outcome {
    let Some(object) = view.object else {
        out.error("You can't wear that!");
        return Outcome::veto();
    };
    if !object.identity().is_wearable {
        out.error("You can't wear that!");
        return Outcome::veto();
    }
    if !view.player.is_carrying(object.id()) {
        out.error("You're not holding it.");
        return Outcome::veto();
    }
    if view.player.state().object(keys::WEARING) == Some(object.id()) {
        out.error("You're already wearing it!");
        return Outcome::veto();
    }

    out.story(format!("You put on {}.", object.name()));

    Outcome::with(PatchSet::new().player(PlayerPatch::State(StateOp::Set(
        keys::WEARING,
        Value::Object(object.id()),
    ))))
}

fn doff(out: &mut Output, view: &TurnView<'_>) -> Outcome {
    let worn = view.player.state().object(keys::WEARING);
    let Some(object) = view.object else {
        out.error("You're not wearing that!");
        return Outcome::veto();
    };
    if worn != Some(object.id()) {
        out.error("You're not wearing it!");
        return Outcome::veto();
    }

    out.story(format!("You take off {}.", object.name()));

    Outcome::with(PatchSet::new().player(PlayerPatch::State(StateOp::Clear(keys::WEARING))))
}

fn look(out: &mut Output, view: &TurnView<'_>) -> Outcome {
    out.story(format!("You are {}.", view.location.name()));
    for object in view.world.objects_in(view.location.id()) {
        out.story(format!("You see {}.", object.name()));
    }
    let directions: Vec<&str> = view
        .location
        .exits()
        .iter()
        .map(|exit| exit.direction.as_str())
        .collect();
    if !directions.is_empty() {
        out.story(format!("You can go {}.", directions.join(" or ")));
    }
    Outcome::none()
}

fn inventory(out: &mut Output, view: &TurnView<'_>) -> Outcome {
    if view.player.inventory().is_empty() {
        out.story("You aren't carrying anything.");
        return Outcome::none();
    }
    out.story("You are carrying:");
    for &id in view.player.inventory() {
        if let Some(object) = view.world.object(id) {
            out.story(format!("  {}", object.name()));
        }
    }
    Outcome::none()
}
