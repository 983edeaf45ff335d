//! Error types for the Fabula engine.
//!
//! Uses `thiserror` for ergonomic error definition. These errors are
//! programming-contract and load-time failures; player-facing rejections are
//! printed lines, never errors.

use thiserror::Error;

use crate::ids::{LocationId, ObjectId};

/// Convenience result type for Fabula operations.
pub type Result<T> = std::result::Result<T, self::Error>;

/// The main error type for Fabula operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an unknown-location error.
    #[must_use]
    pub fn unknown_location(id: LocationId) -> Self {
        Self::new(ErrorKind::UnknownLocation(id))
    }

    /// Creates an unknown-object error.
    #[must_use]
    pub fn unknown_object(id: ObjectId) -> Self {
        Self::new(ErrorKind::UnknownObject(id))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A patch or lookup named a location that does not exist.
    #[error("unknown location: {0}")]
    UnknownLocation(LocationId),

    /// A patch or lookup named an object that does not exist.
    #[error("unknown object: {0}")]
    UnknownObject(ObjectId),

    /// World content declared two locations with the same id.
    #[error("duplicate location id: {0}")]
    DuplicateLocation(LocationId),

    /// World content declared two objects with the same id.
    #[error("duplicate object id: {0}")]
    DuplicateObject(ObjectId),

    /// World content declared an exit to a nonexistent location.
    #[error("exit to nowhere: {from} leads {direction} to {destination}")]
    ExitToNowhere {
        /// Location declaring the exit.
        from: LocationId,
        /// Direction of the exit.
        direction: &'static str,
        /// The missing destination.
        destination: LocationId,
    },

    /// World content listed a nonexistent object in a container.
    #[error("container {container} lists unknown object {object}")]
    MissingContent {
        /// The container.
        container: ObjectId,
        /// The missing contained object.
        object: ObjectId,
    },

    /// World content was built without a player.
    #[error("world content declares no player")]
    NoPlayer,

    /// A committed patch would overfill the player's inventory.
    #[error("carry capacity exceeded: {carried} objects with capacity {max_carry}")]
    CapacityExceeded {
        /// Inventory size the patch would produce.
        carried: usize,
        /// The player's capacity.
        max_carry: usize,
    },

    /// A committed patch would put a fixed object in the inventory.
    #[error("fixed object {0} cannot be carried")]
    FixedCarried(ObjectId),

    /// A committed patch would duplicate an inventory entry.
    #[error("object {0} is already carried")]
    AlreadyCarried(ObjectId),

    /// A committed patch dropped an object that is not carried.
    #[error("object {0} is not carried")]
    NotCarried(ObjectId),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}
