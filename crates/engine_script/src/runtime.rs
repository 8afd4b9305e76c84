//! Runtime entry point and shared context.
//!
//! A [`ScriptRuntime`] is created once per engine host. It is the point
//! where the runtime-wide lookup cache comes into existence, and dropping it
//! closes that cache. Facades and proxies may outlive the runtime; their
//! engine calls keep working, but lookups are no longer cached.

use std::sync::Arc;

use tracing::{debug, info};

use engine_component::EntityId;
use engine_host::EngineHost;

use crate::application::Application;
use crate::assets::Assets;
use crate::config::ScriptConfig;
use crate::entity::Entity;
use crate::input::Input;
use crate::log::Log;
use crate::lookup::EntityLookupCache;
use crate::scene::Scene;

/// State shared by every proxy created from one runtime.
pub struct ScriptContext {
    host: Arc<dyn EngineHost>,
    config: ScriptConfig,
    lookups: EntityLookupCache,
}

impl ScriptContext {
    /// The engine every call is forwarded to.
    #[must_use]
    pub fn host(&self) -> &dyn EngineHost {
        self.host.as_ref()
    }

    #[must_use]
    pub fn config(&self) -> &ScriptConfig {
        &self.config
    }

    /// The runtime-wide tag/UUID lookup cache.
    #[must_use]
    pub fn lookups(&self) -> &EntityLookupCache {
        &self.lookups
    }
}

impl std::fmt::Debug for ScriptContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScriptContext")
            .field("config", &self.config)
            .field("cached_lookups", &self.lookups.len())
            .finish_non_exhaustive()
    }
}

/// Owner of a scripting session against one engine host.
#[derive(Debug)]
pub struct ScriptRuntime {
    context: Arc<ScriptContext>,
}

impl ScriptRuntime {
    /// Create a runtime with the default configuration.
    #[must_use]
    pub fn new(host: Arc<dyn EngineHost>) -> Self {
        Self::with_config(host, ScriptConfig::default())
    }

    #[must_use]
    pub fn with_config(host: Arc<dyn EngineHost>, config: ScriptConfig) -> Self {
        info!(
            cache_lookups = config.cache_lookups,
            default_tag = %config.default_entity_tag,
            "script runtime initialised"
        );
        Self {
            context: Arc::new(ScriptContext {
                host,
                config,
                lookups: EntityLookupCache::new(),
            }),
        }
    }

    #[must_use]
    pub fn context(&self) -> &Arc<ScriptContext> {
        &self.context
    }

    #[must_use]
    pub fn config(&self) -> &ScriptConfig {
        &self.context.config
    }

    /// Wrap a raw handle in a fresh proxy without asking the engine anything.
    #[must_use]
    pub fn entity(&self, id: EntityId) -> Arc<Entity> {
        Arc::new(Entity::new(id, Arc::clone(&self.context)))
    }

    #[must_use]
    pub fn scene(&self) -> Scene {
        Scene::new(Arc::clone(&self.context))
    }

    #[must_use]
    pub fn input(&self) -> Input {
        Input::new(Arc::clone(&self.context))
    }

    #[must_use]
    pub fn log(&self) -> Log {
        Log::new(Arc::clone(&self.context))
    }

    #[must_use]
    pub fn application(&self) -> Application {
        Application::new(Arc::clone(&self.context))
    }

    #[must_use]
    pub fn assets(&self) -> Assets {
        Assets::new(Arc::clone(&self.context))
    }
}

impl Drop for ScriptRuntime {
    fn drop(&mut self) {
        // Cached proxies hold the context; closing breaks the cycle for good.
        let released = self.context.lookups.len();
        self.context.lookups.close();
        debug!(released, "script runtime dropped");
    }
}
