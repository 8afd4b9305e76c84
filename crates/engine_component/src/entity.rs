//! Entity handle type.
//!
//! An [`EntityId`] is a lightweight `u64` identifier naming an entity inside
//! the engine's scene. The scripting layer never owns entity state, only the
//! identifier.

use serde::{Deserialize, Serialize};

/// An opaque entity identifier handed out by the engine.
///
/// Entities are pure identifiers; they carry no data of their own. Whether
/// a handle still names a live entity is a question only the engine can
/// answer; [`EntityId::is_valid`] merely rejects the null sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub u64);

impl EntityId {
    /// The null / invalid entity sentinel.
    pub const INVALID: EntityId = EntityId(0);

    /// Create an entity handle from a raw `u64` identifier.
    #[must_use]
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw `u64` identifier.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }

    /// Returns `true` if this is not the null sentinel.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

impl From<u64> for EntityId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_creation() {
        let e = EntityId::from_raw(42);
        assert_eq!(e.id(), 42);
        assert!(e.is_valid());
    }

    #[test]
    fn test_entity_invalid() {
        assert!(!EntityId::INVALID.is_valid());
        assert_eq!(EntityId::INVALID.id(), 0);
        assert_eq!(EntityId::from(0), EntityId::INVALID);
    }

    #[test]
    fn test_entity_display() {
        assert_eq!(EntityId(7).to_string(), "Entity(7)");
    }

    #[test]
    fn test_entity_serializes_as_bare_number() {
        let json = serde_json::to_string(&EntityId(99)).unwrap();
        assert_eq!(json, "99");
    }
}
