//! Scene facade: entity creation, destruction and lookup.

use std::sync::Arc;

use tracing::{debug, trace};

use engine_component::EntityId;
use engine_host::{EngineHost, HostResult};

use crate::entity::Entity;
use crate::lookup::LookupKey;
use crate::runtime::ScriptContext;

/// Handle to the active scene.
#[derive(Debug, Clone)]
pub struct Scene {
    context: Arc<ScriptContext>,
}

impl Scene {
    pub(crate) fn new(context: Arc<ScriptContext>) -> Self {
        Self { context }
    }

    fn host(&self) -> &dyn EngineHost {
        self.context.host()
    }

    fn wrap(&self, id: EntityId) -> Arc<Entity> {
        Arc::new(Entity::new(id, Arc::clone(&self.context)))
    }

    /// Every entity in the scene, each wrapped in a fresh proxy.
    pub fn entities(&self) -> HostResult<Vec<Arc<Entity>>> {
        Ok(self
            .host()
            .scene_entities()?
            .into_iter()
            .map(|id| self.wrap(id))
            .collect())
    }

    pub fn create_entity(&self, tag: &str) -> HostResult<Arc<Entity>> {
        let id = self.host().create_entity(tag)?;
        debug!(entity = %id, tag, "entity created");
        Ok(self.wrap(id))
    }

    /// Create an entity tagged with the configured default tag.
    pub fn create_unnamed_entity(&self) -> HostResult<Arc<Entity>> {
        let tag = self.context.config().default_entity_tag.clone();
        self.create_entity(&tag)
    }

    /// Destroy `entity` and forget every lookup that resolved to it.
    ///
    /// Does nothing if the engine already considers the entity invalid.
    pub fn destroy_entity(&self, entity: &Entity) -> HostResult<()> {
        let id = entity.id();
        if !self.host().scene_is_entity_valid(id)? {
            return Ok(());
        }
        let evicted = self.context.lookups().evict_entity(id);
        self.host().destroy_entity(id)?;
        debug!(entity = %id, evicted, "entity destroyed");
        Ok(())
    }

    pub fn is_entity_valid(&self, id: EntityId) -> HostResult<bool> {
        self.host().scene_is_entity_valid(id)
    }

    /// Resolve an entity by tag. When several entities share a tag the
    /// engine decides which one is returned.
    pub fn find_entity_by_tag(&self, tag: &str) -> HostResult<Option<Arc<Entity>>> {
        let key = LookupKey::tag(tag);
        if let Some(hit) = self.cached(key)? {
            return Ok(Some(hit));
        }

        let id = self.host().find_entity_by_tag(tag)?;
        if !id.is_valid() {
            return Ok(None);
        }
        Ok(Some(self.remember(key, id)))
    }

    /// Resolve an entity by its UUID.
    pub fn find_entity_by_uuid(&self, uuid: u64) -> HostResult<Option<Arc<Entity>>> {
        let key = LookupKey::uuid(uuid);
        if let Some(hit) = self.cached(key)? {
            return Ok(Some(hit));
        }

        let id = EntityId::from_raw(uuid);
        if !id.is_valid() || !self.host().scene_is_entity_valid(id)? {
            return Ok(None);
        }
        Ok(Some(self.remember(key, id)))
    }

    /// A cached proxy for `key`, provided the engine still considers it valid.
    /// Stale entries are evicted.
    fn cached(&self, key: LookupKey) -> HostResult<Option<Arc<Entity>>> {
        if !self.context.config().cache_lookups {
            return Ok(None);
        }
        let Some(hit) = self.context.lookups().get(key) else {
            return Ok(None);
        };
        if self.host().scene_is_entity_valid(hit.id())? {
            trace!(?key, entity = %hit.id(), "lookup cache hit");
            return Ok(Some(hit));
        }
        if self.context.lookups().remove_if_entity(key, hit.id()) {
            debug!(?key, entity = %hit.id(), "evicted stale lookup");
        }
        Ok(None)
    }

    /// Cache a freshly resolved entity. Concurrent resolutions of the same
    /// entity converge on the proxy stored first.
    fn remember(&self, key: LookupKey, id: EntityId) -> Arc<Entity> {
        let entity = self.wrap(id);
        if !self.context.config().cache_lookups {
            return entity;
        }
        self.context.lookups().insert_or_reuse(key, entity)
    }
}
