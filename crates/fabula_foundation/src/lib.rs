//! Core types for the Fabula engine.
//!
//! This crate provides:
//! - [`LocationId`] / [`ObjectId`] - typed entity identifiers
//! - [`Value`] - the scalar/sequence state value
//! - [`Key`] - typed state keys, with engine-recognized constants in [`keys`]
//! - [`Direction`] - travel directions with synonyms and opposites
//! - [`Command`] / [`Target`] - resolved player instructions
//! - [`Output`] / [`Line`] / [`Channel`] - ordered, channel-tagged output
//! - [`Outcome`] / [`PatchSet`] - the handler result contract
//! - [`Error`] - contract and load-time error types

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod command;
mod direction;
mod error;
mod ids;
mod key;
mod outcome;
mod output;
mod patch;
mod value;

pub use command::{Actor, Command, Target};
pub use direction::Direction;
pub use error::{Error, ErrorKind, Result};
pub use ids::{LocationId, ObjectId};
pub use key::{Key, keys};
pub use outcome::Outcome;
pub use output::{Channel, Line, Output};
pub use patch::{ObjectPatch, PatchSet, PlayerPatch, StateOp};
pub use value::Value;
