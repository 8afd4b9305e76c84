//! # engine_math
//!
//! Value types that cross the scripting boundary. The vector and quaternion
//! types are [`glam`]'s; the engine does the actual transform math, so this
//! crate only names the types and defines the [`Transform`] snapshot.

pub mod transform;

pub use glam::{Mat4, Quat, Vec2, Vec3, Vec4};

/// Two-component `f32` vector.
pub type Vector2 = Vec2;
/// Three-component `f32` vector.
pub type Vector3 = Vec3;
/// Four-component `f32` vector.
pub type Vector4 = Vec4;
/// Rotation quaternion.
pub type Quaternion = Quat;

pub use transform::Transform;
