//! Runtime-wide entity lookup cache.
//!
//! Maps a [`LookupKey`] to the [`Entity`] proxy a previous lookup resolved.
//! The cache never decides whether an entity exists: [`Scene`](crate::Scene)
//! re-validates every hit with the engine before trusting it. Entries are
//! shared across threads through a [`DashMap`].
//!
//! Once the owning runtime is dropped the cache is closed: it is emptied and
//! refuses further inserts, so proxies held by surviving facades cannot fill
//! it again.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use dashmap::DashMap;

use engine_component::{EntityId, fnv1a_64};

use crate::entity::Entity;

/// Key of a cached entity lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupKey {
    /// FNV-1a 64 hash of an entity tag.
    Tag(u64),
    /// Raw entity UUID.
    Uuid(u64),
}

impl LookupKey {
    #[must_use]
    pub const fn tag(tag: &str) -> Self {
        Self::Tag(fnv1a_64(tag))
    }

    #[must_use]
    pub const fn uuid(uuid: u64) -> Self {
        Self::Uuid(uuid)
    }
}

/// Cache of resolved entity proxies, keyed by lookup.
#[derive(Debug, Default)]
pub struct EntityLookupCache {
    entries: DashMap<LookupKey, Arc<Entity>>,
    closed: AtomicBool,
}

impl EntityLookupCache {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            closed: AtomicBool::new(false),
        }
    }

    #[must_use]
    pub fn get(&self, key: LookupKey) -> Option<Arc<Entity>> {
        self.entries.get(&key).map(|entry| Arc::clone(entry.value()))
    }

    /// Store `entity` under `key`. Ignored once the cache is closed.
    pub fn insert(&self, key: LookupKey, entity: Arc<Entity>) {
        if self.is_closed() {
            return;
        }
        self.entries.insert(key, entity);
        self.drop_if_closed(key);
    }

    /// Cache `entity` under `key` unless a proxy for the same entity is
    /// already stored there, and return whichever proxy the cache now holds.
    /// A closed cache stores nothing and hands `entity` back.
    pub fn insert_or_reuse(&self, key: LookupKey, entity: Arc<Entity>) -> Arc<Entity> {
        if self.is_closed() {
            return entity;
        }
        let stored = {
            let mut slot = self
                .entries
                .entry(key)
                .or_insert_with(|| Arc::clone(&entity));
            if slot.id() != entity.id() {
                *slot = Arc::clone(&entity);
            }
            Arc::clone(slot.value())
        };
        self.drop_if_closed(key);
        stored
    }

    pub fn remove(&self, key: LookupKey) -> Option<Arc<Entity>> {
        self.entries.remove(&key).map(|(_, entity)| entity)
    }

    /// Remove the entry under `key` only while it still resolves to `entity`.
    pub fn remove_if_entity(&self, key: LookupKey, entity: EntityId) -> bool {
        self.entries
            .remove_if(&key, |_, cached| cached.id() == entity)
            .is_some()
    }

    /// Drop every entry that resolves to `entity`, whichever key it is
    /// stored under. Returns how many entries were dropped.
    pub fn evict_entity(&self, entity: EntityId) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, cached| cached.id() != entity);
        before - self.entries.len()
    }

    #[must_use]
    pub fn contains(&self, key: LookupKey) -> bool {
        self.entries.contains_key(&key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Empty the cache and refuse every later insert.
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
        self.entries.clear();
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    // An insert racing `close` may land after the clear.
    fn drop_if_closed(&self, key: LookupKey) {
        if self.is_closed() {
            self.entries.remove(&key);
        }
    }
}

#[cfg(test)]
mod tests {
    use engine_host::InMemoryHost;

    use super::*;
    use crate::runtime::ScriptRuntime;

    #[test]
    fn test_tag_key_is_fnv_hash_of_tag() {
        assert_eq!(LookupKey::tag("Player"), LookupKey::Tag(fnv1a_64("Player")));
        assert_ne!(LookupKey::tag("Player"), LookupKey::tag("Enemy"));
    }

    #[test]
    fn test_tag_and_uuid_keys_never_collide() {
        let hash = fnv1a_64("Player");
        assert_ne!(LookupKey::Tag(hash), LookupKey::Uuid(hash));
    }

    #[test]
    fn test_insert_get_remove() {
        let runtime = ScriptRuntime::new(Arc::new(InMemoryHost::new()));
        let cache = EntityLookupCache::new();
        let entity = runtime.entity(EntityId(5));

        cache.insert(LookupKey::uuid(5), Arc::clone(&entity));
        assert!(cache.contains(LookupKey::uuid(5)));
        assert!(Arc::ptr_eq(&cache.get(LookupKey::uuid(5)).unwrap(), &entity));

        assert!(cache.remove(LookupKey::uuid(5)).is_some());
        assert!(cache.is_empty());
        assert!(cache.remove(LookupKey::uuid(5)).is_none());
    }

    #[test]
    fn test_insert_or_reuse_keeps_proxy_for_same_entity() {
        let runtime = ScriptRuntime::new(Arc::new(InMemoryHost::new()));
        let cache = EntityLookupCache::new();
        let first = runtime.entity(EntityId(5));

        let stored = cache.insert_or_reuse(LookupKey::tag("Box"), Arc::clone(&first));
        assert!(Arc::ptr_eq(&stored, &first));

        let again = cache.insert_or_reuse(LookupKey::tag("Box"), runtime.entity(EntityId(5)));
        assert!(Arc::ptr_eq(&again, &first));

        let other = runtime.entity(EntityId(6));
        let replaced = cache.insert_or_reuse(LookupKey::tag("Box"), Arc::clone(&other));
        assert!(Arc::ptr_eq(&replaced, &other));
    }

    #[test]
    fn test_remove_if_entity_spares_newer_entry() {
        let runtime = ScriptRuntime::new(Arc::new(InMemoryHost::new()));
        let cache = EntityLookupCache::new();
        cache.insert(LookupKey::tag("Box"), runtime.entity(EntityId(6)));

        assert!(!cache.remove_if_entity(LookupKey::tag("Box"), EntityId(5)));
        assert!(cache.contains(LookupKey::tag("Box")));
        assert!(cache.remove_if_entity(LookupKey::tag("Box"), EntityId(6)));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_closed_cache_refuses_inserts() {
        let runtime = ScriptRuntime::new(Arc::new(InMemoryHost::new()));
        let cache = EntityLookupCache::new();
        cache.insert(LookupKey::uuid(1), runtime.entity(EntityId(1)));

        cache.close();
        assert!(cache.is_closed());
        assert!(cache.is_empty());

        cache.insert(LookupKey::uuid(2), runtime.entity(EntityId(2)));
        let handed_back = cache.insert_or_reuse(LookupKey::uuid(3), runtime.entity(EntityId(3)));
        assert_eq!(handed_back.id(), EntityId(3));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_evict_entity_drops_every_key() {
        let runtime = ScriptRuntime::new(Arc::new(InMemoryHost::new()));
        let cache = EntityLookupCache::new();
        let a = runtime.entity(EntityId(1));
        let b = runtime.entity(EntityId(2));

        cache.insert(LookupKey::tag("A"), Arc::clone(&a));
        cache.insert(LookupKey::uuid(1), a);
        cache.insert(LookupKey::tag("B"), b);

        assert_eq!(cache.evict_entity(EntityId(1)), 2);
        assert_eq!(cache.len(), 1);
        assert!(cache.contains(LookupKey::tag("B")));
    }
}
