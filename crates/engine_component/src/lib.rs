//! # engine_component
//!
//! Identity types shared across the scripting boundary. Nothing in here owns
//! engine state; every type is an opaque token the engine hands out or
//! accepts.
//!
//! This crate provides:
//!
//! - [`EntityId`]: opaque `u64` entity handle, `0` is invalid.
//! - [`AssetHandle`]: opaque `u64` asset handle, `0` is invalid.
//! - [`Component`] trait: the contract a component kind satisfies.
//! - [`ComponentTypeId`]: language-neutral kind token (FNV-1a of the name).
//! - [`builtin`]: names of the component kinds every engine build ships.

pub mod asset;
pub mod component;
pub mod entity;

pub use asset::AssetHandle;
pub use component::{Component, ComponentTypeId, builtin, fnv1a_64};
pub use entity::EntityId;
