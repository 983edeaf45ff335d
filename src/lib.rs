//! Fabula - a turn-based interactive fiction engine
//!
//! This crate re-exports all layers of the Fabula system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: fabula_runtime    - parser, REPL, render sinks, bundled content
//! Layer 2: fabula_engine     - resolution, protocol, reactions, patch commit
//! Layer 1: fabula_world      - entities, state maps, world store
//! Layer 0: fabula_foundation - ids, values, patches, errors
//! ```

pub use fabula_engine as engine;
pub use fabula_foundation as foundation;
pub use fabula_runtime as runtime;
pub use fabula_world as world;
