//! Asset handle type.

use serde::{Deserialize, Serialize};

/// An opaque asset identifier.
///
/// `0` is reserved as [`AssetHandle::INVALID`]. Any other value may or may
/// not name a loaded asset; only the engine can tell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetHandle(pub u64);

impl AssetHandle {
    /// The reserved "no asset" handle.
    pub const INVALID: AssetHandle = AssetHandle(0);

    /// Create an asset handle from a raw `u64` identifier.
    #[must_use]
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw `u64` identifier.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }

    /// Returns `true` for the reserved invalid handle.
    #[must_use]
    pub const fn is_invalid(self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for AssetHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Asset({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_invalid() {
        assert_eq!(AssetHandle::default(), AssetHandle::INVALID);
        assert!(AssetHandle::default().is_invalid());
    }

    #[test]
    fn test_nonzero_is_not_reserved() {
        assert!(!AssetHandle::from_raw(12).is_invalid());
        assert_eq!(AssetHandle::from_raw(12).id(), 12);
    }
}
