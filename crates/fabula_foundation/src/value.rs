//! Scalar and sequence state values.

use std::sync::Arc;

use crate::ids::{LocationId, ObjectId};

/// A value stored in an entity's mutable state.
///
/// Values are immutable and cheaply cloneable; sequences use persistent
/// vectors with structural sharing. Derived (computed) values are not
/// represented here - they live on an entity's identity and are evaluated at
/// read time, so stored state never contains callables.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// Boolean flag.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// Text.
    Text(Arc<str>),
    /// Reference to a location.
    Location(LocationId),
    /// Reference to an object.
    Object(ObjectId),
    /// Persistent sequence of values.
    List(im::Vector<Value>),
}

impl Value {
    /// Builds a list value from object ids.
    #[must_use]
    pub fn objects(ids: impl IntoIterator<Item = ObjectId>) -> Self {
        Self::List(ids.into_iter().map(Value::Object).collect())
    }

    /// Attempts to extract a boolean.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to extract an integer.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a text reference.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a location id.
    #[must_use]
    pub const fn as_location(&self) -> Option<LocationId> {
        match self {
            Self::Location(id) => Some(*id),
            _ => None,
        }
    }

    /// Attempts to extract an object id.
    #[must_use]
    pub const fn as_object(&self) -> Option<ObjectId> {
        match self {
            Self::Object(id) => Some(*id),
            _ => None,
        }
    }

    /// Attempts to extract a list reference.
    #[must_use]
    pub const fn as_list(&self) -> Option<&im::Vector<Value>> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns true unless this value is `Bool(false)`.
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Bool(false))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(Arc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(Arc::from(s.as_str()))
    }
}

impl From<LocationId> for Value {
    fn from(id: LocationId) -> Self {
        Self::Location(id)
    }
}

impl From<ObjectId> for Value {
    fn from(id: ObjectId) -> Self {
        Self::Object(id)
    }
}
