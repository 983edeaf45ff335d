//! The shared read interface over all entity kinds.

use std::sync::Arc;

use fabula_foundation::{Key, StateOp, Value, keys};

use crate::identity::Identity;
use crate::state::StateMap;

/// Anything with an id, immutable identity, and mutable state.
///
/// The trait carries the read path shared by locations, objects, and the
/// player; mutation flows exclusively through committed patches.
pub trait Entity {
    /// Words the parser may use to refer to this entity.
    fn tags(&self) -> &[Arc<str>];

    /// The entity's display name.
    fn name(&self) -> &str;

    /// The entity's immutable identity.
    fn identity(&self) -> &Identity;

    /// The entity's stored state.
    fn state(&self) -> &StateMap;

    /// Returns true if the entity carries the given tag.
    fn has_tag(&self, tag: &str) -> bool {
        self.tags().iter().any(|t| t.as_ref() == tag)
    }

    /// Reads a state key.
    ///
    /// Derived fields shadow stored state; for [`keys::DESCRIPTION`] the
    /// identity's static description is the final fallback.
    fn read(&self, key: Key) -> Option<Value> {
        if let Some(derived) = self.identity().derived_for(key) {
            return Some((derived.compute)(self.state()));
        }
        if let Some(value) = self.state().get(key) {
            return Some(value.clone());
        }
        if key == keys::DESCRIPTION {
            return self.identity().description().map(Value::from);
        }
        None
    }
}

/// Applies a state operation, dropping writes to frozen and derived keys.
///
/// Returns false when the operation was dropped.
pub(crate) fn apply_checked(identity: &Identity, state: &mut StateMap, op: &StateOp) -> bool {
    if identity.derived_for(op.key()).is_some() {
        return false;
    }
    state.apply(op)
}
