//! Keyed mutable state with immutable-after-init keys.

use fabula_foundation::{Key, LocationId, ObjectId, StateOp, Value};

/// An entity's keyed mutable state.
///
/// Backed by persistent maps, so cloning an entity (and therefore the whole
/// world store) is cheap. Keys inserted with [`StateMap::insert_frozen`] are
/// immutable-after-init: any later operation on them is silently dropped.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StateMap {
    values: im::OrdMap<Key, Value>,
    frozen: im::OrdSet<Key>,
}

impl StateMap {
    /// Creates an empty state map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored at a key.
    #[must_use]
    pub fn get(&self, key: Key) -> Option<&Value> {
        self.values.get(&key)
    }

    /// Returns true if the key holds a truthy value.
    ///
    /// Absent keys are false, so flags never need to be pre-declared.
    #[must_use]
    pub fn flag(&self, key: Key) -> bool {
        self.values.get(&key).is_some_and(Value::is_truthy)
    }

    /// Returns the text stored at a key.
    #[must_use]
    pub fn text(&self, key: Key) -> Option<&str> {
        self.values.get(&key).and_then(Value::as_text)
    }

    /// Returns the location id stored at a key.
    #[must_use]
    pub fn location(&self, key: Key) -> Option<LocationId> {
        self.values.get(&key).and_then(Value::as_location)
    }

    /// Returns the object id stored at a key.
    #[must_use]
    pub fn object(&self, key: Key) -> Option<ObjectId> {
        self.values.get(&key).and_then(Value::as_object)
    }

    /// Returns true if the key is present.
    #[must_use]
    pub fn contains(&self, key: Key) -> bool {
        self.values.contains_key(&key)
    }

    /// Returns the number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no keys are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns true if the key was declared immutable-after-init.
    #[must_use]
    pub fn is_frozen(&self, key: Key) -> bool {
        self.frozen.contains(&key)
    }

    /// Stores an initial value at load time.
    pub fn insert_initial(&mut self, key: Key, value: impl Into<Value>) {
        self.values.insert(key, value.into());
    }

    /// Stores an initial value at load time and freezes the key.
    pub fn insert_frozen(&mut self, key: Key, value: impl Into<Value>) {
        self.values.insert(key, value.into());
        self.frozen.insert(key);
    }

    /// Applies one state operation.
    ///
    /// Returns false when the operation was dropped because the key is
    /// frozen. `Append` on an absent key creates the sequence; on a
    /// non-sequence value it first promotes the value to a one-element
    /// sequence.
    pub fn apply(&mut self, op: &StateOp) -> bool {
        if self.frozen.contains(&op.key()) {
            return false;
        }
        match op {
            StateOp::Set(key, value) => {
                self.values.insert(*key, value.clone());
            }
            StateOp::Clear(key) => {
                self.values.remove(key);
            }
            StateOp::Append(key, value) => {
                let mut items = match self.values.get(key) {
                    Some(Value::List(items)) => items.clone(),
                    Some(other) => im::Vector::unit(other.clone()),
                    None => im::Vector::new(),
                };
                items.push_back(value.clone());
                self.values.insert(*key, Value::List(items));
            }
        }
        true
    }

    /// Iterates over stored keys and values in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.values.iter()
    }
}
