//! Resolved player commands.

use crate::direction::Direction;
use crate::ids::ObjectId;

/// The resolved object of a command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Target {
    /// A specific object visible to the actor.
    Object(ObjectId),
    /// A direction token, matched against the current location's exits.
    Direction(Direction),
}

/// The entity issuing a command.
///
/// Only the player acts today; this enum is the seam where non-player actors
/// would land.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Actor {
    /// The player character.
    #[default]
    Player,
}

/// A resolved instruction: verb, optional target, actor.
///
/// Produced by the command parser with `verb` already lower-cased and the
/// target resolved against entities visible to the actor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Command {
    /// The lower-cased verb.
    pub verb: String,
    /// The resolved target, if any.
    pub target: Option<Target>,
    /// Who issued the command.
    pub actor: Actor,
}

impl Command {
    /// Creates a bare command with no target.
    #[must_use]
    pub fn new(verb: impl Into<String>) -> Self {
        Self {
            verb: verb.into(),
            target: None,
            actor: Actor::Player,
        }
    }

    /// Sets an object target.
    #[must_use]
    pub fn with_object(mut self, object: ObjectId) -> Self {
        self.target = Some(Target::Object(object));
        self
    }

    /// Sets a direction target.
    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.target = Some(Target::Direction(direction));
        self
    }

    /// Returns the object target, if the target is an object.
    #[must_use]
    pub fn object(&self) -> Option<ObjectId> {
        match self.target {
            Some(Target::Object(id)) => Some(id),
            _ => None,
        }
    }

    /// Returns the direction target, if the target is a direction.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        match self.target {
            Some(Target::Direction(direction)) => Some(direction),
            _ => None,
        }
    }
}
