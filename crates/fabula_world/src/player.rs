//! The player entity.

use std::sync::Arc;

use fabula_foundation::{Error, ErrorKind, Key, LocationId, ObjectId, Result, StateOp, Value};

use crate::entity::{Entity, apply_checked};
use crate::identity::Identity;
use crate::state::StateMap;

/// The acting character.
///
/// Invariants, enforced at commit: every inventory id refers to an object
/// whose room is `None`, the inventory never exceeds `max_carry`, and fixed
/// objects never appear in it.
#[derive(Clone, Debug)]
pub struct Player {
    name: Arc<str>,
    identity: Identity,
    state: StateMap,
    inventory: im::Vector<ObjectId>,
    max_carry: usize,
    location: LocationId,
}

impl Player {
    /// Creates a player at a starting location with zero capacity.
    #[must_use]
    pub fn new(name: &str, location: LocationId) -> Self {
        Self {
            name: Arc::from(name),
            identity: Identity::new(),
            state: StateMap::new(),
            inventory: im::Vector::new(),
            max_carry: 0,
            location,
        }
    }

    /// Sets the carry capacity.
    #[must_use]
    pub fn with_max_carry(mut self, max_carry: usize) -> Self {
        self.max_carry = max_carry;
        self
    }

    /// Adds an object to the initial inventory.
    #[must_use]
    pub fn with_carried(mut self, id: ObjectId) -> Self {
        self.inventory.push_back(id);
        self
    }

    /// Stores an initial state value.
    #[must_use]
    pub fn with_state(mut self, key: Key, value: impl Into<Value>) -> Self {
        self.state.insert_initial(key, value);
        self
    }

    /// Returns the player's current location.
    #[must_use]
    pub fn location(&self) -> LocationId {
        self.location
    }

    /// Returns the carried object ids in pickup order.
    #[must_use]
    pub fn inventory(&self) -> &im::Vector<ObjectId> {
        &self.inventory
    }

    /// Returns the carry capacity.
    #[must_use]
    pub fn max_carry(&self) -> usize {
        self.max_carry
    }

    /// Returns true if the object is carried.
    #[must_use]
    pub fn is_carrying(&self, id: ObjectId) -> bool {
        self.inventory.contains(&id)
    }

    /// Relocates the player.
    ///
    /// Only a [`LocationId`] can reach this setter; assigning anything else
    /// is unrepresentable.
    pub fn set_location(&mut self, location: LocationId) {
        self.location = location;
    }

    /// Appends an object to the inventory.
    ///
    /// # Errors
    ///
    /// Returns a contract error if the object is already carried or the
    /// inventory is full. Handlers guard these conditions with player-facing
    /// messages first; reaching this error means a defective handler.
    pub fn take(&mut self, id: ObjectId) -> Result<()> {
        if self.inventory.contains(&id) {
            return Err(Error::new(ErrorKind::AlreadyCarried(id)));
        }
        if self.inventory.len() >= self.max_carry {
            return Err(Error::new(ErrorKind::CapacityExceeded {
                carried: self.inventory.len() + 1,
                max_carry: self.max_carry,
            }));
        }
        self.inventory.push_back(id);
        Ok(())
    }

    /// Removes an object from the inventory.
    ///
    /// # Errors
    ///
    /// Returns a contract error if the object is not carried.
    pub fn release(&mut self, id: ObjectId) -> Result<()> {
        let index = self
            .inventory
            .index_of(&id)
            .ok_or_else(|| Error::new(ErrorKind::NotCarried(id)))?;
        self.inventory.remove(index);
        Ok(())
    }

    /// Applies a state operation; frozen and derived keys are dropped.
    pub fn apply_state(&mut self, op: &StateOp) -> bool {
        apply_checked(&self.identity, &mut self.state, op)
    }
}

impl Entity for Player {
    fn tags(&self) -> &[Arc<str>] {
        &[]
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
