//! Action resolution, reaction dispatch, and patch commit for Fabula.
//!
//! This crate provides:
//! - [`ActionRegistry`] - the engine-wide default handler table
//! - [`resolve`] - the three-tier handler resolver (object, location, default)
//! - [`execute_primary`] - the guard-before-mutate execution protocol
//! - [`dispatch`] / [`reconcile`] - bystander reaction dispatch and veto
//!   reconciliation
//! - [`commit`] - the atomic patch merger
//! - [`TurnEngine`] - the full per-command pipeline
//! - [`defaults`] - the built-in default actions

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod defaults;
mod merge;
mod protocol;
mod reaction;
mod registry;
mod resolve;
mod turn;

pub use merge::commit;
pub use protocol::execute_primary;
pub use reaction::{ReactionSweep, dispatch, reconcile};
pub use registry::ActionRegistry;
pub use resolve::{HandlerSource, Resolution, resolve};
pub use turn::{TurnEngine, TurnReport};
