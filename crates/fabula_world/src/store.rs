//! The world store: entity collections with validated construction.

use fabula_foundation::{Error, ErrorKind, LocationId, ObjectId, Result, keys};

use crate::entity::Entity;
use crate::location::Location;
use crate::object::Object;
use crate::player::Player;

/// The canonical world state: locations, objects, and the player.
///
/// Backed by persistent maps, so cloning is cheap; the patch merger prepares
/// a commit on a clone and swaps it in only when every patch applied.
#[derive(Clone, Debug)]
pub struct WorldStore {
    locations: im::OrdMap<LocationId, Location>,
    objects: im::OrdMap<ObjectId, Object>,
    player: Player,
}

impl WorldStore {
    /// Returns the player.
    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Looks up a location by id.
    #[must_use]
    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(&id)
    }

    /// Looks up an object by id.
    #[must_use]
    pub fn object(&self, id: ObjectId) -> Option<&Object> {
        self.objects.get(&id)
    }

    /// Looks up a location by id, failing loudly when absent.
    ///
    /// # Errors
    ///
    /// Returns a contract error for an unknown id.
    pub fn require_location(&self, id: LocationId) -> Result<&Location> {
        self.locations
            .get(&id)
            .ok_or_else(|| Error::unknown_location(id))
    }

    /// Looks up an object by id, failing loudly when absent.
    ///
    /// # Errors
    ///
    /// Returns a contract error for an unknown id.
    pub fn require_object(&self, id: ObjectId) -> Result<&Object> {
        self.objects
            .get(&id)
            .ok_or_else(|| Error::unknown_object(id))
    }

    /// Iterates over all locations in ascending id order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter().map(|(_, location)| location)
    }

    /// Iterates over all objects in ascending id order.
    pub fn objects(&self) -> impl Iterator<Item = &Object> {
        self.objects.iter().map(|(_, object)| object)
    }

    /// Iterates over the objects standing in a location, in ascending id
    /// order.
    pub fn objects_in(&self, location: LocationId) -> impl Iterator<Item = &Object> {
        self.objects().filter(move |object| object.is_in(location))
    }

    /// Finds the first object satisfying a predicate, in ascending id order.
    #[must_use]
    pub fn find_object(&self, predicate: impl Fn(&Object) -> bool) -> Option<&Object> {
        self.objects().find(|object| predicate(object))
    }

    /// Finds the first object carrying a tag.
    #[must_use]
    pub fn object_by_tag(&self, tag: &str) -> Option<&Object> {
        self.find_object(|object| object.has_tag(tag))
    }

    /// Returns the number of locations.
    #[must_use]
    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// Returns the number of objects.
    #[must_use]
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Returns the player for mutation during commit.
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Returns a location for mutation during commit.
    ///
    /// # Errors
    ///
    /// Returns a contract error for an unknown id.
    pub fn location_mut(&mut self, id: LocationId) -> Result<&mut Location> {
        self.locations
            .get_mut(&id)
            .ok_or_else(|| Error::unknown_location(id))
    }

    /// Returns an object for mutation during commit.
    ///
    /// # Errors
    ///
    /// Returns a contract error for an unknown id.
    pub fn object_mut(&mut self, id: ObjectId) -> Result<&mut Object> {
        self.objects
            .get_mut(&id)
            .ok_or_else(|| Error::unknown_object(id))
    }
}

/// Assembles and validates a [`WorldStore`] from static content.
///
/// Malformed content - duplicate ids, exits to nowhere, containers listing
/// unknown objects, an inventory that breaks the placement invariants - is
/// rejected at build time so the engine can treat the store as
/// already-validated input.
#[derive(Debug, Default)]
pub struct WorldBuilder {
    locations: Vec<Location>,
    objects: Vec<Object>,
    player: Option<Player>,
}

impl WorldBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a location.
    #[must_use]
    pub fn location(mut self, location: Location) -> Self {
        self.locations.push(location);
        self
    }

    /// Adds an object.
    #[must_use]
    pub fn object(mut self, object: Object) -> Self {
        self.objects.push(object);
        self
    }

    /// Sets the player.
    #[must_use]
    pub fn player(mut self, player: Player) -> Self {
        self.player = Some(player);
        self
    }

    /// Validates the content and builds the store.
    ///
    /// # Errors
    ///
    /// Returns the first content defect found: duplicate ids, dangling
    /// cross-references, or initial placements violating the placement and
    /// inventory invariants.
    pub fn build(self) -> Result<WorldStore> {
        let mut locations = im::OrdMap::new();
        for location in self.locations {
            if locations.contains_key(&location.id()) {
                return Err(Error::new(ErrorKind::DuplicateLocation(location.id())));
            }
            locations.insert(location.id(), location);
        }

        let mut objects = im::OrdMap::new();
        for object in self.objects {
            if objects.contains_key(&object.id()) {
                return Err(Error::new(ErrorKind::DuplicateObject(object.id())));
            }
            objects.insert(object.id(), object);
        }

        let player = self.player.ok_or_else(|| Error::new(ErrorKind::NoPlayer))?;

        let store = WorldStore {
            locations,
            objects,
            player,
        };
        validate(&store)?;
        Ok(store)
    }
}

fn validate(store: &WorldStore) -> Result<()> {
    for location in store.locations() {
        for exit in location.exits() {
            if store.location(exit.destination).is_none() {
                return Err(Error::new(ErrorKind::ExitToNowhere {
                    from: location.id(),
                    direction: exit.direction.as_str(),
                    destination: exit.destination,
                }));
            }
        }
        if let Some(return_object) = location.return_object() {
            store.require_object(return_object)?;
        }
    }

    let mut containers: im::OrdMap<ObjectId, ObjectId> = im::OrdMap::new();
    for object in store.objects() {
        if let Some(room) = object.room() {
            store.require_location(room)?;
        }
        for &contained in object.contents() {
            let Some(inner) = store.object(contained) else {
                return Err(Error::new(ErrorKind::MissingContent {
                    container: object.id(),
                    object: contained,
                }));
            };
            if inner.room().is_some() {
                return Err(Error::internal(format!(
                    "contained object {contained} also stands in a location"
                )));
            }
            if containers.insert(contained, object.id()).is_some() {
                return Err(Error::internal(format!(
                    "object {contained} is listed in two containers"
                )));
            }
        }
        if object.identity().is_enterable {
            if let Some(destination) = object.state().location(keys::ENTER_DESTINATION) {
                store.require_location(destination)?;
            }
        }
    }

    let player = store.player();
    store.require_location(player.location())?;
    if player.inventory().len() > player.max_carry() {
        return Err(Error::new(ErrorKind::CapacityExceeded {
            carried: player.inventory().len(),
            max_carry: player.max_carry(),
        }));
    }
    let mut seen: im::OrdSet<ObjectId> = im::OrdSet::new();
    for &carried in player.inventory() {
        let object = store.require_object(carried)?;
        if object.identity().is_fixed {
            return Err(Error::new(ErrorKind::FixedCarried(carried)));
        }
        if object.room().is_some() {
            return Err(Error::internal(format!(
                "carried object {carried} also stands in a location"
            )));
        }
        if containers.contains_key(&carried) {
            return Err(Error::internal(format!(
                "carried object {carried} is also listed in a container"
            )));
        }
        if seen.insert(carried).is_some() {
            return Err(Error::new(ErrorKind::AlreadyCarried(carried)));
        }
    }

    Ok(())
}
