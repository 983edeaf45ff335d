//! Immutable identity: capability flags and derived fields.

use std::sync::Arc;

use fabula_foundation::{Key, Value};

use crate::state::StateMap;

/// A named computation over an entity's stored state, evaluated at read
/// time.
///
/// Derived fields live on identity rather than in state, so stored state
/// never contains callable values and a derived key can never be patched.
#[derive(Copy, Clone, Debug)]
pub struct DerivedField {
    /// Name for debugging.
    pub name: &'static str,
    /// The computation.
    pub compute: fn(&StateMap) -> Value,
}

/// Immutable descriptor bag fixed at world load.
#[derive(Clone, Debug, Default)]
pub struct Identity {
    /// The object can never be picked up.
    pub is_fixed: bool,
    /// The object can be opened and may hold contents.
    pub is_openable: bool,
    /// The object holds a liquid that can be poured.
    pub is_pourable: bool,
    /// The object can be entered, teleporting the player.
    pub is_enterable: bool,
    /// The object can be worn.
    pub is_wearable: bool,
    description: Option<Arc<str>>,
    derived: Vec<(Key, DerivedField)>,
}

impl Identity {
    /// Creates an identity with no capabilities.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the entity as fixed in place.
    #[must_use]
    pub fn with_fixed(mut self) -> Self {
        self.is_fixed = true;
        self
    }

    /// Marks the entity as openable.
    #[must_use]
    pub fn with_openable(mut self) -> Self {
        self.is_openable = true;
        self
    }

    /// Marks the entity as pourable.
    #[must_use]
    pub fn with_pourable(mut self) -> Self {
        self.is_pourable = true;
        self
    }

    /// Marks the entity as enterable.
    #[must_use]
    pub fn with_enterable(mut self) -> Self {
        self.is_enterable = true;
        self
    }

    /// Marks the entity as wearable.
    #[must_use]
    pub fn with_wearable(mut self) -> Self {
        self.is_wearable = true;
        self
    }

    /// Sets a static description.
    #[must_use]
    pub fn with_description(mut self, text: &str) -> Self {
        self.description = Some(Arc::from(text));
        self
    }

    /// Registers a derived field under a key.
    #[must_use]
    pub fn with_derived(mut self, key: Key, name: &'static str, compute: fn(&StateMap) -> Value) -> Self {
        self.derived.push((key, DerivedField { name, compute }));
        self
    }

    /// Returns the static description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the derived field registered under a key, if any.
    #[must_use]
    pub fn derived_for(&self, key: Key) -> Option<&DerivedField> {
        self.derived
            .iter()
            .find(|(derived_key, _)| *derived_key == key)
            .map(|(_, field)| field)
    }
}
