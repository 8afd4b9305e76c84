//! Entity proxy.
//!
//! An [`Entity`] is a handle plus two best-effort caches: the component
//! views handed out so far (one per kind) and the last parent proxy. Neither
//! cache is ever trusted over the engine.
//!
//! ## Component view cache
//!
//! [`Entity::get_component`] always asks the engine first:
//!
//! | engine has kind | view cached | result                           |
//! |-----------------|-------------|----------------------------------|
//! | no              | yes         | evict, `None`                    |
//! | no              | no          | `None`, nothing constructed      |
//! | yes             | no          | construct, cache, return         |
//! | yes             | yes         | return the cached view unchanged |
//!
//! Views are returned as `Arc<T>`, so repeated calls hand out the same
//! allocation for as long as the kind stays attached.

use std::any::Any;
use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use tracing::debug;

use engine_component::{Component, ComponentTypeId, EntityId};
use engine_host::{EngineHost, HostResult};
use engine_math::{Quaternion, Transform, Vector3};

use crate::component::{ComponentView, ScriptComponent};
use crate::runtime::ScriptContext;
use crate::scene::Scene;

type ErasedView = Arc<dyn Any + Send + Sync>;

/// Script-side proxy for one engine entity.
pub struct Entity {
    id: EntityId,
    context: Arc<ScriptContext>,
    components: DashMap<ComponentTypeId, ErasedView>,
    parent: Mutex<Option<Arc<Entity>>>,
}

impl Entity {
    pub(crate) fn new(id: EntityId, context: Arc<ScriptContext>) -> Self {
        Self {
            id,
            context,
            components: DashMap::new(),
            parent: Mutex::new(None),
        }
    }

    fn host(&self) -> &dyn EngineHost {
        self.context.host()
    }

    #[must_use]
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Ask the engine whether this handle still names a live entity.
    pub fn is_valid(&self) -> HostResult<bool> {
        self.host().entity_is_valid(self.id)
    }

    pub fn tag(&self) -> HostResult<String> {
        self.host().entity_tag(self.id)
    }

    pub fn set_tag(&self, tag: &str) -> HostResult<()> {
        self.host().set_entity_tag(self.id, tag)
    }

    // --- Transform -------------------------------------------------------

    pub fn transform(&self) -> HostResult<Transform> {
        self.host().entity_transform(self.id)
    }

    pub fn translation(&self) -> HostResult<Vector3> {
        Ok(self.transform()?.position())
    }

    pub fn set_translation(&self, position: Vector3) -> HostResult<()> {
        self.host().set_entity_position(self.id, position)
    }

    pub fn rotation(&self) -> HostResult<Quaternion> {
        Ok(self.transform()?.rotation())
    }

    pub fn set_rotation(&self, rotation: Quaternion) -> HostResult<()> {
        self.host().set_entity_rotation(self.id, rotation)
    }

    pub fn scale(&self) -> HostResult<Vector3> {
        Ok(self.transform()?.scale())
    }

    pub fn set_scale(&self, scale: Vector3) -> HostResult<()> {
        self.host().set_entity_scale(self.id, scale)
    }

    // --- Hierarchy -------------------------------------------------------

    /// The entity's parent, or `None` for a root.
    ///
    /// The parent ID is fetched on every call. The previously returned proxy
    /// is reused only while that ID is unchanged.
    pub fn parent(&self) -> HostResult<Option<Arc<Entity>>> {
        let parent_id = self.host().entity_parent(self.id)?;
        if let Some(cached) = self.parent.lock().as_ref() {
            if cached.id == parent_id {
                return Ok(Some(Arc::clone(cached)));
            }
        }

        let parent = if parent_id.is_valid() && self.host().entity_is_valid(parent_id)? {
            Some(Arc::new(Entity::new(parent_id, Arc::clone(&self.context))))
        } else {
            None
        };
        self.parent.lock().clone_from(&parent);
        Ok(parent)
    }

    pub fn set_parent(&self, parent: &Entity) -> HostResult<()> {
        self.host().set_entity_parent(self.id, parent.id)
    }

    /// Detach this entity from its parent.
    pub fn clear_parent(&self) -> HostResult<()> {
        self.host().set_entity_parent(self.id, EntityId::INVALID)
    }

    /// Direct children, each wrapped in a fresh proxy.
    pub fn children(&self) -> HostResult<Vec<Arc<Entity>>> {
        Ok(self
            .host()
            .entity_children(self.id)?
            .into_iter()
            .map(|child| Arc::new(Entity::new(child, Arc::clone(&self.context))))
            .collect())
    }

    // --- Components ------------------------------------------------------

    pub fn has_component<T: Component>(&self) -> HostResult<bool> {
        self.has_component_id(T::component_type_id())
    }

    pub fn has_component_id(&self, kind: ComponentTypeId) -> HostResult<bool> {
        self.host().has_component(self.id, kind)
    }

    /// Returns the view for kind `T` if the engine reports it attached.
    pub fn get_component<T: ComponentView>(&self) -> HostResult<Option<Arc<T>>> {
        let kind = T::component_type_id();
        if !self.host().has_component(self.id, kind)? {
            if self.components.remove(&kind).is_some() {
                debug!(entity = %self.id, component = T::type_name(), "evicted stale component view");
            }
            return Ok(None);
        }

        Ok(Some(self.view_for::<T>(kind)))
    }

    /// Attach kind `T` unless the engine already reports it, and return its
    /// view. Attaching twice is not an error and yields the same view.
    pub fn add_component<T: ComponentView>(&self) -> HostResult<Arc<T>> {
        if let Some(existing) = self.get_component::<T>()? {
            return Ok(existing);
        }

        let kind = T::component_type_id();
        self.host().add_component(self.id, kind)?;
        debug!(entity = %self.id, component = T::type_name(), "component attached");
        Ok(self.view_for::<T>(kind))
    }

    /// Detach kind `T`. Returns the engine's answer verbatim; the cached
    /// view is dropped only when the engine reports a removal.
    pub fn remove_component<T: ComponentView>(&self) -> HostResult<bool> {
        let kind = T::component_type_id();
        let removed = self.host().remove_component(self.id, kind)?;
        if removed {
            self.components.remove(&kind);
            debug!(entity = %self.id, component = T::type_name(), "component detached");
        }
        Ok(removed)
    }

    /// The cached view for `kind`, constructing it under the entry lock if
    /// absent. Concurrent callers all receive the view that was stored.
    fn view_for<T: ComponentView>(&self, kind: ComponentTypeId) -> Arc<T> {
        let stored = Arc::clone(
            self.components
                .entry(kind)
                .or_insert_with(|| Arc::new(T::bind(self.id, Arc::clone(&self.context))) as ErasedView)
                .value(),
        );
        match stored.downcast::<T>() {
            Ok(view) => view,
            // Another view type registered under the same kind name.
            Err(_) => {
                let view = Arc::new(T::bind(self.id, Arc::clone(&self.context)));
                self.components.insert(kind, view.clone() as ErasedView);
                view
            }
        }
    }

    /// Number of component views currently cached on this proxy.
    #[must_use]
    pub fn cached_component_count(&self) -> usize {
        self.components.len()
    }

    // --- Script instance -------------------------------------------------

    /// Returns `true` if the bound script instance is a `T`.
    pub fn is<T: Any>(&self) -> HostResult<bool> {
        let Some(script) = self.get_component::<ScriptComponent>()? else {
            return Ok(false);
        };
        Ok(script.instance()?.is_some_and(|instance| instance.is::<T>()))
    }

    /// The bound script instance as a `T`, if it is one.
    pub fn as_script<T: Any + Send + Sync>(&self) -> HostResult<Option<Arc<T>>> {
        let Some(script) = self.get_component::<ScriptComponent>()? else {
            return Ok(None);
        };
        Ok(script
            .instance()?
            .and_then(|instance| instance.downcast::<T>().ok()))
    }

    /// Destroy this entity through the scene.
    pub fn destroy(&self) -> HostResult<()> {
        Scene::new(Arc::clone(&self.context)).destroy_entity(self)
    }
}

impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Entity {}

impl std::fmt::Debug for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entity")
            .field("id", &self.id)
            .field("cached_components", &self.components.len())
            .finish_non_exhaustive()
    }
}
