//! Three-tier handler resolution.

use fabula_foundation::{Command, LocationId, ObjectId, Result};
use fabula_world::{HandlerFn, WorldStore};

use crate::registry::ActionRegistry;

/// Which tier supplied the resolved handler.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HandlerSource {
    /// Declared on the referenced object.
    Object(ObjectId),
    /// Declared on the current location.
    Location(LocationId),
    /// The engine's built-in default.
    Default,
}

/// A resolved primary handler with its source tier.
#[derive(Copy, Clone)]
pub struct Resolution {
    /// The handler to run first.
    pub run: HandlerFn,
    /// Where it was declared.
    pub source: HandlerSource,
}

/// Picks the primary handler for a command.
///
/// Priority: a handler on the referenced object, then a handler on the
/// player's current location, then the engine default. `None` means the verb
/// is not understood at any tier; no outcome is produced and no state
/// changes.
///
/// # Errors
///
/// Returns a contract error if the command references an unknown object id
/// or the player stands in an unknown location.
pub fn resolve(
    world: &WorldStore,
    command: &Command,
    defaults: &ActionRegistry,
) -> Result<Option<Resolution>> {
    let verb = command.verb.as_str();

    if let Some(id) = command.object() {
        let object = world.require_object(id)?;
        if let Some(run) = object.handler_for(verb) {
            return Ok(Some(Resolution {
                run,
                source: HandlerSource::Object(id),
            }));
        }
    }

    let location = world.require_location(world.player().location())?;
    if let Some(run) = location.handler_for(verb) {
        return Ok(Some(Resolution {
            run,
            source: HandlerSource::Location(location.id()),
        }));
    }

    if let Some(run) = defaults.handler_for(verb) {
        return Ok(Some(Resolution {
            run,
            source: HandlerSource::Default,
        }));
    }

    Ok(None)
}
