//! Read-only context handed to handlers and reactions.

use fabula_foundation::{Command, Result};

use crate::entity::Entity;
use crate::location::Location;
use crate::object::Object;
use crate::player::Player;
use crate::store::WorldStore;

/// Read-only borrows of everything a handler may consult.
///
/// Handlers cannot mutate the world directly - the store is only borrowed
/// mutably at commit, after every handler and reaction has returned.
#[derive(Copy, Clone)]
pub struct TurnView<'a> {
    /// The command being performed.
    pub command: &'a Command,
    /// The location the player currently occupies.
    pub location: &'a Location,
    /// The resolved target object, if the command names one.
    pub object: Option<&'a Object>,
    /// The acting player.
    pub player: &'a Player,
    /// Id-indexed, read-only access to every location and object.
    pub world: &'a WorldStore,
}

impl<'a> TurnView<'a> {
    /// Builds the context for one command.
    ///
    /// # Errors
    ///
    /// Returns a contract error if the player's location or the command's
    /// target id does not exist; the parser only produces resolvable ids, so
    /// this is unreachable from player input.
    pub fn of(world: &'a WorldStore, command: &'a Command) -> Result<Self> {
        let location = world.require_location(world.player().location())?;
        let object = match command.object() {
            Some(id) => Some(world.require_object(id)?),
            None => None,
        };
        Ok(Self {
            command,
            location,
            object,
            player: world.player(),
            world,
        })
    }

    /// Returns true if the target object is visible to the player: standing
    /// in the current location or carried.
    #[must_use]
    pub fn target_visible(&self) -> bool {
        self.object.is_some_and(|object| {
            object.is_in(self.location.id()) || self.player.is_carrying(object.id())
        })
    }
}

/// The entity that owns a dispatched reaction.
#[derive(Copy, Clone)]
pub enum Bystander<'a> {
    /// An object at the scene.
    Object(&'a Object),
    /// The location itself.
    Location(&'a Location),
}

impl Bystander<'_> {
    /// Returns the owning entity's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Object(object) => object.name(),
            Self::Location(location) => location.name(),
        }
    }

    /// Returns the owning object, if the owner is an object.
    #[must_use]
    pub fn object(&self) -> Option<&Object> {
        match self {
            Self::Object(object) => Some(object),
            Self::Location(_) => None,
        }
    }
}
