//! Typed state patches.
//!
//! Patches are tagged unions of well-defined operations per entity kind, so
//! the merge step is exhaustively checkable rather than inferring intent
//! from arbitrary key shapes.

use crate::ids::{LocationId, ObjectId};
use crate::key::Key;
use crate::value::Value;

/// An operation on an entity's keyed state.
#[derive(Clone, Debug, PartialEq)]
pub enum StateOp {
    /// Set a key to a value.
    Set(Key, Value),
    /// Remove a key.
    Clear(Key),
    /// Append a value to the sequence stored at a key, creating the sequence
    /// if the key is absent.
    Append(Key, Value),
}

impl StateOp {
    /// Returns the key this operation touches.
    #[must_use]
    pub const fn key(&self) -> Key {
        match self {
            Self::Set(key, _) | Self::Clear(key) | Self::Append(key, _) => *key,
        }
    }
}

/// A partial update to the player.
#[derive(Clone, Debug, PartialEq)]
pub enum PlayerPatch {
    /// Relocate the player.
    MoveTo(LocationId),
    /// Append an object to the inventory.
    ///
    /// Issued together with an [`ObjectPatch::SetRoom`] of `None` in the same
    /// outcome; the merger does not infer one from the other.
    Take(ObjectId),
    /// Remove an object from the inventory.
    Drop(ObjectId),
    /// Operate on the player's keyed state.
    State(StateOp),
}

/// A partial update to one object.
#[derive(Clone, Debug, PartialEq)]
pub enum ObjectPatch {
    /// Change the object's placement; `None` means held by the player or
    /// off-map.
    SetRoom(Option<LocationId>),
    /// Empty the object's contents list.
    ClearContents,
    /// Append an object id to the contents list.
    AppendContents(ObjectId),
    /// Operate on the object's keyed state.
    State(StateOp),
}

/// Partial updates produced by one handler invocation, grouped by collection
/// and kept in production order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PatchSet {
    /// Player updates.
    pub player: Vec<PlayerPatch>,
    /// Object updates.
    pub objects: Vec<(ObjectId, ObjectPatch)>,
    /// Location updates.
    pub locations: Vec<(LocationId, StateOp)>,
}

impl PatchSet {
    /// Creates an empty patch set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a player patch.
    #[must_use]
    pub fn player(mut self, patch: PlayerPatch) -> Self {
        self.player.push(patch);
        self
    }

    /// Adds an object patch.
    #[must_use]
    pub fn object(mut self, id: ObjectId, patch: ObjectPatch) -> Self {
        self.objects.push((id, patch));
        self
    }

    /// Adds a location patch.
    #[must_use]
    pub fn location(mut self, id: LocationId, op: StateOp) -> Self {
        self.locations.push((id, op));
        self
    }

    /// Appends another patch set after this one, preserving both orders.
    pub fn extend(&mut self, other: Self) {
        self.player.extend(other.player);
        self.objects.extend(other.objects);
        self.locations.extend(other.locations);
    }

    /// Returns the total number of patches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.player.len() + self.objects.len() + self.locations.len()
    }

    /// Returns true if no patches are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.player.is_empty() && self.objects.is_empty() && self.locations.is_empty()
    }
}
