//! Entities, state maps, and the world store for Fabula.
//!
//! This crate provides:
//! - [`StateMap`] - keyed mutable state with immutable-after-init keys
//! - [`Identity`] - immutable capability flags and derived fields
//! - [`Entity`] - the shared read interface over locations, objects, player
//! - [`Location`] / [`Object`] / [`Player`] - the three entity kinds
//! - [`WorldStore`] / [`WorldBuilder`] - entity collections with validated
//!   load-time construction
//! - [`TurnView`] - the read-only context handed to handlers
//! - [`ActionEntry`] / [`Reaction`] - verb-keyed handlers on entities

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod entity;
mod handler;
mod identity;
mod location;
mod object;
mod player;
mod state;
mod store;
mod view;

pub use entity::Entity;
pub use handler::{ActionEntry, HandlerFn, Phase, Reaction, ReactionFn, VerbMatcher};
pub use identity::{DerivedField, Identity};
pub use location::{Exit, Location};
pub use object::Object;
pub use player::Player;
pub use state::StateMap;
pub use store::{WorldBuilder, WorldStore};
pub use view::{Bystander, TurnView};
