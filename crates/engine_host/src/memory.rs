//! Headless in-memory engine.
//!
//! [`InMemoryHost`] implements every [`EngineHost`] entry point against plain
//! process memory. It backs the headless harness and the scripting layer's
//! tests: besides the engine calls it exposes controls for driving input,
//! registering assets and binding script instances, and it counts every
//! engine call by name so callers can assert how often the boundary was
//! crossed.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use dashmap::DashMap;
use parking_lot::Mutex;
use tracing::{debug, error, info, trace, warn};
use uuid::Uuid;

use engine_component::{AssetHandle, ComponentTypeId, EntityId};
use engine_math::{Quaternion, Transform, Vector2, Vector3};

use crate::error::{HostError, HostResult};
use crate::host::{EngineHost, ScriptInstance};
use crate::input::{CursorMode, KeyCode, MouseButton};
use crate::log::LogLevel;

/// Default window size of a fresh host.
pub const DEFAULT_WINDOW_SIZE: (u32, u32) = (1280, 720);

struct EntityRecord {
    tag: String,
    parent: EntityId,
    children: Vec<EntityId>,
    components: BTreeSet<ComponentTypeId>,
    transform: Transform,
    script: Option<ScriptInstance>,
}

impl EntityRecord {
    fn new(tag: &str) -> Self {
        let mut components = BTreeSet::new();
        components.insert(ComponentTypeId::TRANSFORM);
        components.insert(ComponentTypeId::TAG);
        Self {
            tag: tag.to_string(),
            parent: EntityId::INVALID,
            children: Vec::new(),
            components,
            transform: Transform::IDENTITY,
            script: None,
        }
    }
}

#[derive(Debug, Default)]
struct ControllerState {
    name: String,
    buttons: HashSet<i32>,
    axes: HashMap<i32, f32>,
    hats: HashMap<i32, u8>,
}

struct HostState {
    entities: BTreeMap<EntityId, EntityRecord>,
    window_width: u32,
    window_height: u32,
    quit_requested: bool,
    keys: HashSet<KeyCode>,
    mouse_buttons: HashSet<MouseButton>,
    mouse_position: Vector2,
    cursor_mode: CursorMode,
    controllers: BTreeMap<i32, ControllerState>,
    assets: HashSet<AssetHandle>,
    log: Vec<(LogLevel, String)>,
}

impl HostState {
    fn record(&self, entity: EntityId) -> HostResult<&EntityRecord> {
        self.entities
            .get(&entity)
            .ok_or(HostError::EntityNotFound(entity))
    }

    fn record_mut(&mut self, entity: EntityId) -> HostResult<&mut EntityRecord> {
        self.entities
            .get_mut(&entity)
            .ok_or(HostError::EntityNotFound(entity))
    }

    /// Returns a fresh, unused, non-zero entity ID.
    fn allocate_id(&self) -> EntityId {
        loop {
            let (bits, _) = Uuid::new_v4().as_u64_pair();
            let id = EntityId(bits);
            if id.is_valid() && !self.entities.contains_key(&id) {
                return id;
            }
        }
    }

    /// Remove an entity and, recursively, its children.
    fn destroy(&mut self, entity: EntityId) {
        let Some(record) = self.entities.remove(&entity) else {
            return;
        };
        if let Some(parent) = self.entities.get_mut(&record.parent) {
            parent.children.retain(|child| *child != entity);
        }
        for child in record.children {
            self.destroy(child);
        }
    }

    /// Returns `true` if `ancestor` appears on the parent chain of `entity`
    /// (or is `entity` itself).
    fn is_ancestor(&self, ancestor: EntityId, entity: EntityId) -> bool {
        let mut current = entity;
        while current.is_valid() {
            if current == ancestor {
                return true;
            }
            current = self
                .entities
                .get(&current)
                .map_or(EntityId::INVALID, |r| r.parent);
        }
        false
    }
}

/// A headless engine that keeps its whole world in memory.
pub struct InMemoryHost {
    state: Mutex<HostState>,
    calls: DashMap<&'static str, u64>,
}

impl InMemoryHost {
    /// Create an empty host with the default window size.
    #[must_use]
    pub fn new() -> Self {
        Self::with_window(DEFAULT_WINDOW_SIZE.0, DEFAULT_WINDOW_SIZE.1)
    }

    /// Create an empty host with the given window size.
    #[must_use]
    pub fn with_window(width: u32, height: u32) -> Self {
        Self {
            state: Mutex::new(HostState {
                entities: BTreeMap::new(),
                window_width: width,
                window_height: height,
                quit_requested: false,
                keys: HashSet::new(),
                mouse_buttons: HashSet::new(),
                mouse_position: Vector2::ZERO,
                cursor_mode: CursorMode::Normal,
                controllers: BTreeMap::new(),
                assets: HashSet::new(),
                log: Vec::new(),
            }),
            calls: DashMap::new(),
        }
    }

    fn record_call(&self, op: &'static str) {
        *self.calls.entry(op).or_insert(0) += 1;
        trace!(op, "engine call");
    }

    /// Number of times the engine entry point `op` has been called.
    ///
    /// `op` is the [`EngineHost`] method name, e.g. `"add_component"`.
    /// Harness controls on this type are not counted.
    #[must_use]
    pub fn call_count(&self, op: &str) -> u64 {
        self.calls.get(op).map_or(0, |count| *count)
    }

    /// Total number of engine calls across all entry points.
    #[must_use]
    pub fn total_calls(&self) -> u64 {
        self.calls.iter().map(|entry| *entry.value()).sum()
    }

    pub fn reset_call_counts(&self) {
        self.calls.clear();
    }

    // --- Harness controls (not counted) ----------------------------------

    /// Create an entity with a freshly allocated ID.
    pub fn spawn(&self, tag: &str) -> EntityId {
        let mut state = self.state.lock();
        let id = state.allocate_id();
        state.entities.insert(id, EntityRecord::new(tag));
        id
    }

    /// Create an entity under a caller-chosen ID.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::InvalidArgument`] if `id` is the null handle or
    /// already in use.
    pub fn insert_entity(&self, id: EntityId, tag: &str) -> HostResult<EntityId> {
        let mut state = self.state.lock();
        if !id.is_valid() || state.entities.contains_key(&id) {
            return Err(HostError::InvalidArgument(format!("entity id {} unavailable", id.0)));
        }
        state.entities.insert(id, EntityRecord::new(tag));
        Ok(id)
    }

    /// Remove an entity and its children without counting an engine call.
    pub fn despawn(&self, entity: EntityId) {
        self.state.lock().destroy(entity);
    }

    /// Overwrite an entity's transform.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::EntityNotFound`] for an unknown entity.
    pub fn put_transform(&self, entity: EntityId, transform: Transform) -> HostResult<()> {
        self.state.lock().record_mut(entity)?.transform = transform;
        Ok(())
    }

    /// Attach a script component to `entity` and bind `instance` to it.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::EntityNotFound`] for an unknown entity.
    pub fn bind_script(&self, entity: EntityId, instance: ScriptInstance) -> HostResult<()> {
        let mut state = self.state.lock();
        let record = state.record_mut(entity)?;
        record.components.insert(ComponentTypeId::SCRIPT);
        record.script = Some(instance);
        Ok(())
    }

    pub fn press_key(&self, key: KeyCode) {
        self.state.lock().keys.insert(key);
    }

    pub fn release_key(&self, key: KeyCode) {
        self.state.lock().keys.remove(&key);
    }

    pub fn press_mouse_button(&self, button: MouseButton) {
        self.state.lock().mouse_buttons.insert(button);
    }

    pub fn release_mouse_button(&self, button: MouseButton) {
        self.state.lock().mouse_buttons.remove(&button);
    }

    pub fn move_mouse(&self, position: Vector2) {
        self.state.lock().mouse_position = position;
    }

    pub fn connect_controller(&self, id: i32, name: &str) {
        self.state.lock().controllers.insert(
            id,
            ControllerState {
                name: name.to_string(),
                ..ControllerState::default()
            },
        );
    }

    pub fn disconnect_controller(&self, id: i32) {
        self.state.lock().controllers.remove(&id);
    }

    /// Set a controller button state. Ignored for unknown controllers.
    pub fn set_controller_button(&self, id: i32, button: i32, pressed: bool) {
        if let Some(controller) = self.state.lock().controllers.get_mut(&id) {
            if pressed {
                controller.buttons.insert(button);
            } else {
                controller.buttons.remove(&button);
            }
        }
    }

    /// Set a controller axis value. Ignored for unknown controllers.
    pub fn set_controller_axis(&self, id: i32, axis: i32, value: f32) {
        if let Some(controller) = self.state.lock().controllers.get_mut(&id) {
            controller.axes.insert(axis, value);
        }
    }

    /// Set a controller hat value. Ignored for unknown controllers.
    pub fn set_controller_hat(&self, id: i32, hat: i32, value: u8) {
        if let Some(controller) = self.state.lock().controllers.get_mut(&id) {
            controller.hats.insert(hat, value);
        }
    }

    /// Mark `handle` as a loaded asset. The invalid handle is never stored.
    pub fn register_asset(&self, handle: AssetHandle) {
        if !handle.is_invalid() {
            self.state.lock().assets.insert(handle);
        }
    }

    pub fn unload_asset(&self, handle: AssetHandle) {
        self.state.lock().assets.remove(&handle);
    }

    /// Messages received through [`EngineHost::log_message`], oldest first.
    #[must_use]
    pub fn logged_messages(&self) -> Vec<(LogLevel, String)> {
        self.state.lock().log.clone()
    }

    #[must_use]
    pub fn quit_requested(&self) -> bool {
        self.state.lock().quit_requested
    }

    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.state.lock().entities.len()
    }
}

impl Default for InMemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InMemoryHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryHost")
            .field("entities", &self.entity_count())
            .field("calls", &self.total_calls())
            .finish()
    }
}

impl EngineHost for InMemoryHost {
    fn window_width(&self) -> HostResult<u32> {
        self.record_call("window_width");
        Ok(self.state.lock().window_width)
    }

    fn set_window_width(&self, width: u32) -> HostResult<()> {
        self.record_call("set_window_width");
        self.state.lock().window_width = width;
        Ok(())
    }

    fn window_height(&self) -> HostResult<u32> {
        self.record_call("window_height");
        Ok(self.state.lock().window_height)
    }

    fn set_window_height(&self, height: u32) -> HostResult<()> {
        self.record_call("set_window_height");
        self.state.lock().window_height = height;
        Ok(())
    }

    fn quit(&self) -> HostResult<()> {
        self.record_call("quit");
        self.state.lock().quit_requested = true;
        info!("quit requested");
        Ok(())
    }

    fn entity_is_valid(&self, entity: EntityId) -> HostResult<bool> {
        self.record_call("entity_is_valid");
        Ok(self.state.lock().entities.contains_key(&entity))
    }

    fn entity_tag(&self, entity: EntityId) -> HostResult<String> {
        self.record_call("entity_tag");
        Ok(self.state.lock().record(entity)?.tag.clone())
    }

    fn set_entity_tag(&self, entity: EntityId, tag: &str) -> HostResult<()> {
        self.record_call("set_entity_tag");
        self.state.lock().record_mut(entity)?.tag = tag.to_string();
        Ok(())
    }

    fn entity_parent(&self, entity: EntityId) -> HostResult<EntityId> {
        self.record_call("entity_parent");
        Ok(self.state.lock().record(entity)?.parent)
    }

    fn set_entity_parent(&self, entity: EntityId, parent: EntityId) -> HostResult<()> {
        self.record_call("set_entity_parent");
        let mut state = self.state.lock();
        let old_parent = state.record(entity)?.parent;
        if parent.is_valid() {
            state.record(parent)?;
            if state.is_ancestor(entity, parent) {
                return Err(HostError::InvalidArgument(format!(
                    "{parent} is {entity} or one of its descendants"
                )));
            }
        }
        if let Some(old) = state.entities.get_mut(&old_parent) {
            old.children.retain(|child| *child != entity);
        }
        if let Some(new) = state.entities.get_mut(&parent) {
            new.children.push(entity);
        }
        state.record_mut(entity)?.parent = parent;
        Ok(())
    }

    fn entity_children(&self, entity: EntityId) -> HostResult<Vec<EntityId>> {
        self.record_call("entity_children");
        Ok(self.state.lock().record(entity)?.children.clone())
    }

    fn add_component(&self, entity: EntityId, kind: ComponentTypeId) -> HostResult<()> {
        self.record_call("add_component");
        self.state.lock().record_mut(entity)?.components.insert(kind);
        debug!(%entity, kind = kind.0, "component attached");
        Ok(())
    }

    fn remove_component(&self, entity: EntityId, kind: ComponentTypeId) -> HostResult<bool> {
        self.record_call("remove_component");
        let mut state = self.state.lock();
        let record = state.record_mut(entity)?;
        let removed = record.components.remove(&kind);
        if removed && kind == ComponentTypeId::SCRIPT {
            record.script = None;
        }
        Ok(removed)
    }

    fn has_component(&self, entity: EntityId, kind: ComponentTypeId) -> HostResult<bool> {
        self.record_call("has_component");
        Ok(self.state.lock().record(entity)?.components.contains(&kind))
    }

    fn entity_transform(&self, entity: EntityId) -> HostResult<Transform> {
        self.record_call("entity_transform");
        Ok(self.state.lock().record(entity)?.transform)
    }

    fn set_entity_position(&self, entity: EntityId, position: Vector3) -> HostResult<()> {
        self.record_call("set_entity_position");
        self.state.lock().record_mut(entity)?.transform.position = position;
        Ok(())
    }

    fn set_entity_scale(&self, entity: EntityId, scale: Vector3) -> HostResult<()> {
        self.record_call("set_entity_scale");
        self.state.lock().record_mut(entity)?.transform.scale = scale;
        Ok(())
    }

    fn set_entity_rotation(&self, entity: EntityId, rotation: Quaternion) -> HostResult<()> {
        self.record_call("set_entity_rotation");
        self.state.lock().record_mut(entity)?.transform.rotation = rotation;
        Ok(())
    }

    fn scene_is_entity_valid(&self, entity: EntityId) -> HostResult<bool> {
        self.record_call("scene_is_entity_valid");
        Ok(self.state.lock().entities.contains_key(&entity))
    }

    fn create_entity(&self, tag: &str) -> HostResult<EntityId> {
        self.record_call("create_entity");
        let mut state = self.state.lock();
        let id = state.allocate_id();
        state.entities.insert(id, EntityRecord::new(tag));
        debug!(entity = %id, tag, "entity created");
        Ok(id)
    }

    fn destroy_entity(&self, entity: EntityId) -> HostResult<()> {
        self.record_call("destroy_entity");
        let mut state = self.state.lock();
        state.record(entity)?;
        state.destroy(entity);
        debug!(%entity, "entity destroyed");
        Ok(())
    }

    fn scene_entities(&self) -> HostResult<Vec<EntityId>> {
        self.record_call("scene_entities");
        Ok(self.state.lock().entities.keys().copied().collect())
    }

    fn find_entity_by_tag(&self, tag: &str) -> HostResult<EntityId> {
        self.record_call("find_entity_by_tag");
        Ok(self
            .state
            .lock()
            .entities
            .iter()
            .find(|(_, record)| record.tag == tag)
            .map_or(EntityId::INVALID, |(id, _)| *id))
    }

    fn script_instance(&self, entity: EntityId) -> HostResult<Option<ScriptInstance>> {
        self.record_call("script_instance");
        Ok(self.state.lock().record(entity)?.script.clone())
    }

    fn is_key_pressed(&self, key: KeyCode) -> HostResult<bool> {
        self.record_call("is_key_pressed");
        Ok(self.state.lock().keys.contains(&key))
    }

    fn is_mouse_button_pressed(&self, button: MouseButton) -> HostResult<bool> {
        self.record_call("is_mouse_button_pressed");
        Ok(self.state.lock().mouse_buttons.contains(&button))
    }

    fn mouse_position(&self) -> HostResult<Vector2> {
        self.record_call("mouse_position");
        Ok(self.state.lock().mouse_position)
    }

    fn is_controller_present(&self, id: i32) -> HostResult<bool> {
        self.record_call("is_controller_present");
        Ok(self.state.lock().controllers.contains_key(&id))
    }

    fn controller_ids(&self) -> HostResult<Vec<i32>> {
        self.record_call("controller_ids");
        Ok(self.state.lock().controllers.keys().copied().collect())
    }

    fn controller_name(&self, id: i32) -> HostResult<Option<String>> {
        self.record_call("controller_name");
        Ok(self.state.lock().controllers.get(&id).map(|c| c.name.clone()))
    }

    fn is_controller_button_pressed(&self, id: i32, button: i32) -> HostResult<bool> {
        self.record_call("is_controller_button_pressed");
        Ok(self
            .state
            .lock()
            .controllers
            .get(&id)
            .is_some_and(|c| c.buttons.contains(&button)))
    }

    fn controller_axis(&self, id: i32, axis: i32) -> HostResult<f32> {
        self.record_call("controller_axis");
        Ok(self
            .state
            .lock()
            .controllers
            .get(&id)
            .and_then(|c| c.axes.get(&axis).copied())
            .unwrap_or(0.0))
    }

    fn controller_hat(&self, id: i32, hat: i32) -> HostResult<u8> {
        self.record_call("controller_hat");
        Ok(self
            .state
            .lock()
            .controllers
            .get(&id)
            .and_then(|c| c.hats.get(&hat).copied())
            .unwrap_or(0))
    }

    fn set_cursor_mode(&self, mode: CursorMode) -> HostResult<()> {
        self.record_call("set_cursor_mode");
        self.state.lock().cursor_mode = mode;
        Ok(())
    }

    fn cursor_mode(&self) -> HostResult<CursorMode> {
        self.record_call("cursor_mode");
        Ok(self.state.lock().cursor_mode)
    }

    fn log_message(&self, level: LogLevel, message: &str) -> HostResult<()> {
        self.record_call("log_message");
        match level {
            LogLevel::Trace => trace!(target: "script", "{message}"),
            LogLevel::Debug => debug!(target: "script", "{message}"),
            LogLevel::Info => info!(target: "script", "{message}"),
            LogLevel::Warn => warn!(target: "script", "{message}"),
            LogLevel::Error => error!(target: "script", "{message}"),
            LogLevel::Critical => error!(target: "script", critical = true, "{message}"),
        }
        self.state.lock().log.push((level, message.to_string()));
        Ok(())
    }

    fn asset_is_valid(&self, handle: AssetHandle) -> HostResult<bool> {
        self.record_call("asset_is_valid");
        Ok(self.state.lock().assets.contains(&handle))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_created_entity_is_valid_and_tagged() {
        let host = InMemoryHost::new();
        let e = host.create_entity("Player").unwrap();
        assert!(e.is_valid());
        assert!(host.scene_is_entity_valid(e).unwrap());
        assert_eq!(host.entity_tag(e).unwrap(), "Player");
        assert!(host.has_component(e, ComponentTypeId::TRANSFORM).unwrap());
    }

    #[test]
    fn test_find_entity_by_tag() {
        let host = InMemoryHost::new();
        host.insert_entity(EntityId(7), "Player").unwrap();
        assert_eq!(host.find_entity_by_tag("Player").unwrap(), EntityId(7));
        assert_eq!(host.find_entity_by_tag("Nobody").unwrap(), EntityId::INVALID);
    }

    #[test]
    fn test_insert_entity_rejects_null_and_duplicates() {
        let host = InMemoryHost::new();
        assert!(host.insert_entity(EntityId::INVALID, "x").is_err());
        host.insert_entity(EntityId(3), "x").unwrap();
        assert!(host.insert_entity(EntityId(3), "y").is_err());
    }

    #[test]
    fn test_remove_component_reports_presence() {
        let host = InMemoryHost::new();
        let e = host.spawn("e");
        assert!(!host.remove_component(e, ComponentTypeId::CAMERA).unwrap());
        host.add_component(e, ComponentTypeId::CAMERA).unwrap();
        assert!(host.remove_component(e, ComponentTypeId::CAMERA).unwrap());
        assert!(!host.has_component(e, ComponentTypeId::CAMERA).unwrap());
    }

    #[test]
    fn test_unknown_entity_is_an_error() {
        let host = InMemoryHost::new();
        assert_eq!(
            host.entity_tag(EntityId(5)),
            Err(HostError::EntityNotFound(EntityId(5)))
        );
        assert!(!host.entity_is_valid(EntityId(5)).unwrap());
    }

    #[test]
    fn test_parenting_and_recursive_destroy() {
        let host = InMemoryHost::new();
        let root = host.spawn("root");
        let child = host.spawn("child");
        let grandchild = host.spawn("grandchild");
        host.set_entity_parent(child, root).unwrap();
        host.set_entity_parent(grandchild, child).unwrap();

        assert_eq!(host.entity_parent(child).unwrap(), root);
        assert_eq!(host.entity_children(root).unwrap(), vec![child]);

        host.destroy_entity(root).unwrap();
        assert_eq!(host.entity_count(), 0);
    }

    #[test]
    fn test_reparent_moves_child_between_lists() {
        let host = InMemoryHost::new();
        let a = host.spawn("a");
        let b = host.spawn("b");
        let c = host.spawn("c");
        host.set_entity_parent(c, a).unwrap();
        host.set_entity_parent(c, b).unwrap();
        assert!(host.entity_children(a).unwrap().is_empty());
        assert_eq!(host.entity_children(b).unwrap(), vec![c]);

        host.set_entity_parent(c, EntityId::INVALID).unwrap();
        assert_eq!(host.entity_parent(c).unwrap(), EntityId::INVALID);
        assert!(host.entity_children(b).unwrap().is_empty());
    }

    #[test]
    fn test_parent_cycle_rejected() {
        let host = InMemoryHost::new();
        let a = host.spawn("a");
        let b = host.spawn("b");
        host.set_entity_parent(b, a).unwrap();
        assert!(matches!(
            host.set_entity_parent(a, b),
            Err(HostError::InvalidArgument(_))
        ));
        assert!(host.set_entity_parent(a, a).is_err());
    }

    #[test]
    fn test_transform_setters() {
        let host = InMemoryHost::new();
        let e = host.spawn("e");
        host.set_entity_position(e, Vector3::new(1.0, 2.0, 3.0)).unwrap();
        host.set_entity_scale(e, Vector3::splat(2.0)).unwrap();
        let t = host.entity_transform(e).unwrap();
        assert_eq!(t.position, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(t.scale, Vector3::splat(2.0));
        assert_eq!(t.rotation, Quaternion::IDENTITY);
    }

    #[test]
    fn test_script_binding() {
        let host = InMemoryHost::new();
        let e = host.spawn("e");
        assert!(host.script_instance(e).unwrap().is_none());
        host.bind_script(e, Arc::new(17_u32)).unwrap();
        assert!(host.has_component(e, ComponentTypeId::SCRIPT).unwrap());
        let instance = host.script_instance(e).unwrap().unwrap();
        assert_eq!(instance.downcast_ref::<u32>(), Some(&17));

        assert!(host.remove_component(e, ComponentTypeId::SCRIPT).unwrap());
        assert!(host.script_instance(e).unwrap().is_none());
    }

    #[test]
    fn test_call_counting() {
        let host = InMemoryHost::new();
        let e = host.spawn("e");
        assert_eq!(host.total_calls(), 0);
        host.has_component(e, ComponentTypeId::TAG).unwrap();
        host.has_component(e, ComponentTypeId::TAG).unwrap();
        assert_eq!(host.call_count("has_component"), 2);
        assert_eq!(host.call_count("add_component"), 0);
        host.reset_call_counts();
        assert_eq!(host.total_calls(), 0);
    }

    #[test]
    fn test_controller_state() {
        let host = InMemoryHost::new();
        host.connect_controller(0, "Pad");
        host.set_controller_button(0, 3, true);
        host.set_controller_axis(0, 1, -0.5);
        host.set_controller_hat(0, 0, 4);
        assert!(host.is_controller_present(0).unwrap());
        assert_eq!(host.controller_ids().unwrap(), vec![0]);
        assert_eq!(host.controller_name(0).unwrap().as_deref(), Some("Pad"));
        assert!(host.is_controller_button_pressed(0, 3).unwrap());
        assert_eq!(host.controller_axis(0, 1).unwrap(), -0.5);
        assert_eq!(host.controller_hat(0, 0).unwrap(), 4);
        assert_eq!(host.controller_name(1).unwrap(), None);
        assert!(!host.is_controller_button_pressed(1, 3).unwrap());
    }

    #[test]
    fn test_assets_and_log() {
        let host = InMemoryHost::new();
        host.register_asset(AssetHandle(9));
        host.register_asset(AssetHandle::INVALID);
        assert!(host.asset_is_valid(AssetHandle(9)).unwrap());
        assert!(!host.asset_is_valid(AssetHandle::INVALID).unwrap());

        host.log_message(LogLevel::Warn, "careful").unwrap();
        assert_eq!(
            host.logged_messages(),
            vec![(LogLevel::Warn, "careful".to_string())]
        );
    }
}
