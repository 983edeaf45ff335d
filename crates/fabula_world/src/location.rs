//! Location entities.

use std::sync::Arc;

use fabula_foundation::{Direction, Key, LocationId, ObjectId, StateOp, Value};

use crate::entity::{Entity, apply_checked};
use crate::handler::{ActionEntry, HandlerFn, Phase, Reaction, ReactionFn};
use crate::identity::Identity;
use crate::state::StateMap;

/// One way out of a location.
#[derive(Clone, Debug)]
pub struct Exit {
    /// Direction of travel.
    pub direction: Direction,
    /// Where the exit leads.
    pub destination: LocationId,
    /// Narration printed instead of the default when taking the exit.
    pub transition: Option<Arc<str>>,
}

/// A place the player can stand, with exits and optional nested sub-location
/// behavior.
#[derive(Clone, Debug)]
pub struct Location {
    id: LocationId,
    name: Arc<str>,
    tags: Vec<Arc<str>>,
    identity: Identity,
    state: StateMap,
    exits: Vec<Exit>,
    is_leavable: bool,
    return_object: Option<ObjectId>,
    handlers: Vec<ActionEntry>,
    reactions: Vec<Reaction>,
}

impl Location {
    /// Creates a location with no exits.
    #[must_use]
    pub fn new(id: LocationId, name: &str) -> Self {
        Self {
            id,
            name: Arc::from(name),
            tags: Vec::new(),
            identity: Identity::new(),
            state: StateMap::new(),
            exits: Vec::new(),
            is_leavable: false,
            return_object: None,
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

    /// Adds an exit.
    #[must_use]
    pub fn with_exit(mut self, direction: Direction, destination: LocationId) -> Self {
        self.exits.push(Exit {
            direction,
            destination,
            transition: None,
        });
        self
    }

    /// Adds an exit with transition narration.
    #[must_use]
    pub fn with_exit_transition(
        mut self,
        direction: Direction,
        destination: LocationId,
        transition: &str,
    ) -> Self {
        self.exits.push(Exit {
            direction,
            destination,
            transition: Some(Arc::from(transition)),
        });
        self
    }

    /// Marks this location leavable through the given return object.
    ///
    /// Used by nested sub-locations: `leave` relocates the player to
    /// wherever the return object currently stands.
    #[must_use]
    pub fn with_leavable(mut self, return_object: ObjectId) -> Self {
        self.is_leavable = true;
        self.return_object = Some(return_object);
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

    /// Declares a verb handler override on this location.
    #[must_use]
    pub fn with_handler(mut self, entry: ActionEntry) -> Self {
        self.handlers.push(entry);
        self
    }

    /// Declares a reaction on this location.
    #[must_use]
    pub fn with_reaction(mut self, reaction: Reaction) -> Self {
        self.reactions.push(reaction);
        self
    }

    /// Returns this location's id.
    #[must_use]
    pub fn id(&self) -> LocationId {
        self.id
    }

    /// Returns the exits in declaration order.
    #[must_use]
    pub fn exits(&self) -> &[Exit] {
        &self.exits
    }

    /// Returns the exit in a direction, if any.
    #[must_use]
    pub fn exit(&self, direction: Direction) -> Option<&Exit> {
        self.exits.iter().find(|exit| exit.direction == direction)
    }

    /// Returns true if the player can `leave` this location.
    #[must_use]
    pub fn is_leavable(&self) -> bool {
        self.is_leavable
    }

    /// Returns the return object for a leavable location.
    #[must_use]
    pub fn return_object(&self) -> Option<ObjectId> {
        self.return_object
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

    /// Applies a state operation; frozen and derived keys are dropped.
    pub fn apply_state(&mut self, op: &StateOp) -> bool {
        apply_checked(&self.identity, &mut self.state, op)
    }
}

impl Entity for Location {
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
