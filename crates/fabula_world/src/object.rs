//! Object entities.

use std::sync::Arc;

use fabula_foundation::{Key, LocationId, ObjectId, StateOp, Value};

use crate::entity::{Entity, apply_checked};
use crate::handler::{ActionEntry, HandlerFn, Phase, Reaction, ReactionFn};
use crate::identity::Identity;
use crate::state::StateMap;

/// A thing in the world.
///
/// Placement invariant: exactly one of these holds at any time -
/// `room` is some location, `room` is `None` while the id is in the player's
/// inventory, or `room` is `None` while the id is in exactly one container's
/// contents. An object matching none of them is permanently off-map.
#[derive(Clone, Debug)]
pub struct Object {
    id: ObjectId,
    name: Arc<str>,
    tags: Vec<Arc<str>>,
    identity: Identity,
    state: StateMap,
    room: Option<LocationId>,
    contents: im::Vector<ObjectId>,
    handlers: Vec<ActionEntry>,
    reactions: Vec<Reaction>,
}

impl Object {
    /// Creates an object with no placement (held, contained, or off-map).
    #[must_use]
    pub fn new(id: ObjectId, name: &str) -> Self {
        Self {
            id,
            name: Arc::from(name),
            tags: Vec::new(),
            identity: Identity::new(),
            state: StateMap::new(),
            room: None,
            contents: im::Vector::new(),
            handlers: Vec::new(),
            reactions: Vec::new(),
        }
    }

    /// Adds a tag.
    #[must_use]
    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tags.push(Arc::from(tag));
        self
    }

    /// Sets the identity.
    #[must_use]
    pub fn with_identity(mut self, identity: Identity) -> Self {
        self.identity = identity;
        self
    }

    /// Places the object in a location at load time.
    #[must_use]
    pub fn in_room(mut self, room: LocationId) -> Self {
        self.room = Some(room);
        self
    }

    /// Declares initial contents; only meaningful for openable objects.
    #[must_use]
    pub fn with_contents(mut self, contents: impl IntoIterator<Item = ObjectId>) -> Self {
        self.contents = contents.into_iter().collect();
        self
    }

    /// Stores an initial state value.
    #[must_use]
    pub fn with_state(mut self, key: Key, value: impl Into<Value>) -> Self {
        self.state.insert_initial(key, value);
        self
    }

    /// Stores an initial state value and freezes the key.
    #[must_use]
    pub fn with_frozen_state(mut self, key: Key, value: impl Into<Value>) -> Self {
        self.state.insert_frozen(key, value);
        self
    }

    /// Declares a verb handler override on this object.
    #[must_use]
    pub fn with_handler(mut self, entry: ActionEntry) -> Self {
        self.handlers.push(entry);
        self
    }

    /// Declares a reaction on this object.
    #[must_use]
    pub fn with_reaction(mut self, reaction: Reaction) -> Self {
        self.reactions.push(reaction);
        self
    }

    /// Returns this object's id.
    #[must_use]
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Returns the location this object stands in, if any.
    #[must_use]
    pub fn room(&self) -> Option<LocationId> {
        self.room
    }

    /// Returns true if the object stands in the given location.
    #[must_use]
    pub fn is_in(&self, location: LocationId) -> bool {
        self.room == Some(location)
    }

    /// Returns the contained object ids in order.
    #[must_use]
    pub fn contents(&self) -> &im::Vector<ObjectId> {
        &self.contents
    }

    /// Returns the handler declared here for a verb, if any.
    #[must_use]
    pub fn handler_for(&self, verb: &str) -> Option<HandlerFn> {
        self.handlers
            .iter()
            .find(|entry| entry.verbs.accepts(verb))
            .map(|entry| entry.run)
    }

    /// Returns the reactions declared here for a verb and phase.
    pub fn reactions_for(&self, verb: &str, phase: Phase) -> impl Iterator<Item = ReactionFn> + '_ {
        let verb = verb.to_owned();
        self.reactions
            .iter()
            .filter(move |reaction| reaction.phase == phase && reaction.verbs.accepts(&verb))
            .map(|reaction| reaction.run)
    }

    /// Changes the object's placement.
    pub fn set_room(&mut self, room: Option<LocationId>) {
        self.room = room;
    }

    /// Empties the contents list.
    pub fn clear_contents(&mut self) {
        self.contents.clear();
    }

    /// Appends an id to the contents list.
    pub fn push_contents(&mut self, id: ObjectId) {
        self.contents.push_back(id);
    }

    /// Applies a state operation; frozen and derived keys are dropped.
    pub fn apply_state(&mut self, op: &StateOp) -> bool {
        apply_checked(&self.identity, &mut self.state, op)
    }
}

impl Entity for Object {
    fn tags(&self) -> &[Arc<str>] {
        &self.tags
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn state(&self) -> &StateMap {
        &self.state
    }
}
