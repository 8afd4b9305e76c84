//! Component kind identity.
//!
//! The scripting layer never stores component data. What it needs is a
//! stable token naming a component *kind* so that "add", "remove" and "has"
//! requests can be forwarded to the engine. That token is
//! [`ComponentTypeId`].
//!
//! ## Polyglot Type Identity
//!
//! [`ComponentTypeId`] is derived from the kind's **string name** using the
//! FNV-1a 64-bit hash algorithm. Any language can compute the same token for
//! a given name, so the engine side does not need to know about Rust types.

use serde::{Deserialize, Serialize};

/// FNV-1a 64-bit offset basis.
const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;

/// FNV-1a 64-bit prime.
const FNV_PRIME: u64 = 0x0100_0000_01b3;

/// Hash arbitrary UTF-8 text with FNV-1a 64.
///
/// # Algorithm (FNV-1a 64-bit)
///
/// ```text
/// hash = 0xcbf29ce484222325          (offset basis)
/// for each byte in text.as_bytes():
///     hash = hash XOR byte
///     hash = hash * 0x00000100000001b3  (prime)
/// return hash
/// ```
#[must_use]
pub const fn fnv1a_64(text: &str) -> u64 {
    let bytes = text.as_bytes();
    let mut hash = FNV_OFFSET_BASIS;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
        i += 1;
    }
    hash
}

/// Names of the component kinds the engine always knows about.
pub mod builtin {
    /// Position, rotation and scale.
    pub const TRANSFORM: &str = "TransformComponent";
    /// Display tag of an entity.
    pub const TAG: &str = "TagComponent";
    /// Binds a script instance to an entity.
    pub const SCRIPT: &str = "ScriptComponent";
    pub const CAMERA: &str = "CameraComponent";
    pub const LIGHT: &str = "LightComponent";
    pub const MODEL: &str = "ModelComponent";
}

/// A unique identifier for a component kind, derived from its string name
/// using [`fnv1a_64`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ComponentTypeId(pub u64);

impl ComponentTypeId {
    pub const TRANSFORM: Self = Self::from_name(builtin::TRANSFORM);
    pub const TAG: Self = Self::from_name(builtin::TAG);
    pub const SCRIPT: Self = Self::from_name(builtin::SCRIPT);
    pub const CAMERA: Self = Self::from_name(builtin::CAMERA);
    pub const LIGHT: Self = Self::from_name(builtin::LIGHT);
    pub const MODEL: Self = Self::from_name(builtin::MODEL);

    /// Compute the [`ComponentTypeId`] from a kind's string name.
    ///
    /// This is the **canonical** way to derive a `ComponentTypeId`.
    #[must_use]
    pub const fn from_name(name: &str) -> Self {
        Self(fnv1a_64(name))
    }
}

/// The component kind trait.
///
/// Implemented by every Rust type that stands for a component kind on the
/// engine side. The type carries no component data; the engine holds that.
///
/// # Examples
///
/// ```rust
/// use engine_component::{Component, ComponentTypeId};
///
/// struct Health;
///
/// impl Component for Health {
///     fn type_name() -> &'static str { "Health" }
/// }
///
/// assert_eq!(Health::component_type_id(), ComponentTypeId::from_name("Health"));
/// ```
pub trait Component: Send + Sync + 'static {
    /// The engine-side name of this component kind.
    fn type_name() -> &'static str;

    /// Returns the [`ComponentTypeId`] for this kind.
    fn component_type_id() -> ComponentTypeId {
        ComponentTypeId::from_name(Self::type_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Health;

    impl Component for Health {
        fn type_name() -> &'static str {
            "Health"
        }
    }

    struct Velocity;

    impl Component for Velocity {
        fn type_name() -> &'static str {
            "Velocity"
        }
    }

    #[test]
    fn test_component_type_id_matches_from_name() {
        assert_eq!(Health::component_type_id(), ComponentTypeId::from_name("Health"));
    }

    #[test]
    fn test_component_type_id_differs_between_kinds() {
        assert_ne!(Health::component_type_id(), Velocity::component_type_id());
    }

    #[test]
    fn test_fnv1a_known_vectors() {
        // FNV-1a 64-bit of the empty string is the offset basis itself.
        assert_eq!(fnv1a_64(""), 0xcbf2_9ce4_8422_2325);
        assert_eq!(fnv1a_64("a"), 0xaf63_dc4c_8601_ec8c);
    }

    #[test]
    fn test_builtin_constants_match_names() {
        assert_eq!(
            ComponentTypeId::TRANSFORM,
            ComponentTypeId::from_name("TransformComponent")
        );
        assert_eq!(ComponentTypeId::SCRIPT, ComponentTypeId::from_name(builtin::SCRIPT));
        assert_ne!(ComponentTypeId::CAMERA, ComponentTypeId::LIGHT);
    }
}
