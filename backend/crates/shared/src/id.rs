//! Common ID Types
//!
//! Type-safe wrappers for database-assigned integer identifiers.

use serde::{Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// Generic typed ID wrapper
///
/// Values are assigned by the database (identity columns), so there is
/// no `new()`; IDs only come from storage or from a request path.
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type PetId = Id<markers::Pet>;
/// let id = PetId::from_i64(7);
/// assert_eq!(id.get(), 7);
/// ```
pub struct Id<T> {
    value: i64,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    /// Wrap a raw identifier
    #[inline]
    pub const fn from_i64(value: i64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Get the underlying integer
    #[inline]
    pub const fn get(&self) -> i64 {
        self.value
    }
}

// Manual impls so that marker types need not implement these traits.

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<i64> for Id<T> {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl<T> From<Id<T>> for i64 {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.value)
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for Pet IDs
    pub struct Pet;

    /// Marker for interaction log entry IDs (playtimes, feedings, scoldings)
    pub struct Interaction;
}

/// Type aliases for common IDs
pub type PetId = Id<markers::Pet>;
pub type InteractionId = Id<markers::Interaction>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_roundtrip() {
        let id = PetId::from_i64(42);
        assert_eq!(id.get(), 42);
        assert_eq!(i64::from(id), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_id_ordering() {
        let a = PetId::from_i64(1);
        let b = PetId::from_i64(2);
        assert!(a < b);
        assert_eq!(a, PetId::from(1));
    }

    #[test]
    fn test_id_serializes_as_number() {
        let json = serde_json::to_string(&InteractionId::from_i64(9)).unwrap();
        assert_eq!(json, "9");
    }
}
