//! The engine boundary trait.
//!
//! [`EngineHost`] has one method per native entry point the scripting API
//! forwards to, grouped the way the engine registers them. Every method is
//! synchronous and returns [`HostResult`]; whatever the engine reports is
//! handed to the caller untouched.

use std::any::Any;
use std::sync::Arc;

use engine_component::{AssetHandle, ComponentTypeId, EntityId};
use engine_math::{Quaternion, Transform, Vector2, Vector3};

use crate::error::HostResult;
use crate::input::{CursorMode, KeyCode, MouseButton};
use crate::log::LogLevel;

/// A script object the engine has bound to an entity's script component.
pub type ScriptInstance = Arc<dyn Any + Send + Sync>;

/// The native engine, as seen from the scripting layer.
///
/// Implementations own all entity, component and asset state. The scripting
/// layer holds an `Arc<dyn EngineHost>` and never mutates anything without
/// going through it.
pub trait EngineHost: Send + Sync {
    // --- Application -----------------------------------------------------

    fn window_width(&self) -> HostResult<u32>;

    fn set_window_width(&self, width: u32) -> HostResult<()>;

    fn window_height(&self) -> HostResult<u32>;

    fn set_window_height(&self, height: u32) -> HostResult<()>;

    /// Ask the engine to terminate the process at its next opportunity.
    fn quit(&self) -> HostResult<()>;

    // --- Entity ----------------------------------------------------------

    fn entity_is_valid(&self, entity: EntityId) -> HostResult<bool>;

    fn entity_tag(&self, entity: EntityId) -> HostResult<String>;

    fn set_entity_tag(&self, entity: EntityId, tag: &str) -> HostResult<()>;

    /// Returns the parent of `entity`, or [`EntityId::INVALID`] for a root.
    fn entity_parent(&self, entity: EntityId) -> HostResult<EntityId>;

    /// Re-parent `entity`. Passing [`EntityId::INVALID`] detaches it.
    fn set_entity_parent(&self, entity: EntityId, parent: EntityId) -> HostResult<()>;

    fn entity_children(&self, entity: EntityId) -> HostResult<Vec<EntityId>>;

    fn add_component(&self, entity: EntityId, kind: ComponentTypeId) -> HostResult<()>;

    /// Detach a component. Returns `false` when there was nothing to detach.
    fn remove_component(&self, entity: EntityId, kind: ComponentTypeId) -> HostResult<bool>;

    fn has_component(&self, entity: EntityId, kind: ComponentTypeId) -> HostResult<bool>;

    fn entity_transform(&self, entity: EntityId) -> HostResult<Transform>;

    fn set_entity_position(&self, entity: EntityId, position: Vector3) -> HostResult<()>;

    fn set_entity_scale(&self, entity: EntityId, scale: Vector3) -> HostResult<()>;

    fn set_entity_rotation(&self, entity: EntityId, rotation: Quaternion) -> HostResult<()>;

    // --- Scene -----------------------------------------------------------

    fn scene_is_entity_valid(&self, entity: EntityId) -> HostResult<bool>;

    fn create_entity(&self, tag: &str) -> HostResult<EntityId>;

    fn destroy_entity(&self, entity: EntityId) -> HostResult<()>;

    fn scene_entities(&self) -> HostResult<Vec<EntityId>>;

    /// Returns [`EntityId::INVALID`] when no entity carries `tag`.
    fn find_entity_by_tag(&self, tag: &str) -> HostResult<EntityId>;

    // --- Script component ------------------------------------------------

    fn script_instance(&self, entity: EntityId) -> HostResult<Option<ScriptInstance>>;

    // --- Input -----------------------------------------------------------

    fn is_key_pressed(&self, key: KeyCode) -> HostResult<bool>;

    fn is_mouse_button_pressed(&self, button: MouseButton) -> HostResult<bool>;

    fn mouse_position(&self) -> HostResult<Vector2>;

    fn is_controller_present(&self, id: i32) -> HostResult<bool>;

    fn controller_ids(&self) -> HostResult<Vec<i32>>;

    fn controller_name(&self, id: i32) -> HostResult<Option<String>>;

    fn is_controller_button_pressed(&self, id: i32, button: i32) -> HostResult<bool>;

    fn controller_axis(&self, id: i32, axis: i32) -> HostResult<f32>;

    fn controller_hat(&self, id: i32, hat: i32) -> HostResult<u8>;

    fn set_cursor_mode(&self, mode: CursorMode) -> HostResult<()>;

    fn cursor_mode(&self) -> HostResult<CursorMode>;

    // --- Log -------------------------------------------------------------

    fn log_message(&self, level: LogLevel, message: &str) -> HostResult<()>;

    // --- Asset -----------------------------------------------------------

    fn asset_is_valid(&self, handle: AssetHandle) -> HostResult<bool>;
}
