//! Component views.
//!
//! A view is the script-side face of one component on one entity. It holds
//! the entity handle and the runtime context, never component data; every
//! read and write goes to the engine.
//!
//! Component kinds are an open set: any type implementing [`Component`] (for
//! its engine-side name) and [`ComponentView`] (for construction) can be
//! passed to [`Entity::get_component`](crate::Entity::get_component) and
//! friends. The views below cover the kinds the engine always ships.

use std::sync::Arc;

use engine_component::{Component, EntityId, builtin};
use engine_host::{HostResult, ScriptInstance};
use engine_math::{Quaternion, Transform, Vector3};

use crate::runtime::ScriptContext;

/// Construction of a view bound to one entity.
pub trait ComponentView: Component + Sized {
    /// Create the view for `entity`. Must not call into the engine.
    fn bind(entity: EntityId, context: Arc<ScriptContext>) -> Self;
}

/// Declares a view with no forwarding beyond its entity handle.
macro_rules! marker_view {
    ($(#[$attr:meta])* $name:ident => $kind:expr) => {
        $(#[$attr])*
        #[derive(Debug)]
        pub struct $name {
            entity: EntityId,
        }

        impl $name {
            #[must_use]
            pub fn entity_id(&self) -> EntityId {
                self.entity
            }
        }

        impl Component for $name {
            fn type_name() -> &'static str {
                $kind
            }
        }

        impl ComponentView for $name {
            fn bind(entity: EntityId, _context: Arc<ScriptContext>) -> Self {
                Self { entity }
            }
        }
    };
}

marker_view!(
    /// Camera attached to an entity.
    CameraComponent => builtin::CAMERA
);

marker_view!(
    /// Light source attached to an entity.
    LightComponent => builtin::LIGHT
);

marker_view!(
    /// Renderable model attached to an entity.
    ModelComponent => builtin::MODEL
);

/// Position, rotation and scale of an entity.
#[derive(Debug)]
pub struct TransformComponent {
    entity: EntityId,
    context: Arc<ScriptContext>,
}

impl TransformComponent {
    #[must_use]
    pub fn entity_id(&self) -> EntityId {
        self.entity
    }

    /// Fetch the current transform from the engine.
    pub fn snapshot(&self) -> HostResult<Transform> {
        self.context.host().entity_transform(self.entity)
    }

    pub fn translation(&self) -> HostResult<Vector3> {
        Ok(self.snapshot()?.position())
    }

    pub fn set_translation(&self, position: Vector3) -> HostResult<()> {
        self.context.host().set_entity_position(self.entity, position)
    }

    pub fn rotation(&self) -> HostResult<Quaternion> {
        Ok(self.snapshot()?.rotation())
    }

    pub fn set_rotation(&self, rotation: Quaternion) -> HostResult<()> {
        self.context.host().set_entity_rotation(self.entity, rotation)
    }

    pub fn scale(&self) -> HostResult<Vector3> {
        Ok(self.snapshot()?.scale())
    }

    pub fn set_scale(&self, scale: Vector3) -> HostResult<()> {
        self.context.host().set_entity_scale(self.entity, scale)
    }
}

impl Component for TransformComponent {
    fn type_name() -> &'static str {
        builtin::TRANSFORM
    }
}

impl ComponentView for TransformComponent {
    fn bind(entity: EntityId, context: Arc<ScriptContext>) -> Self {
        Self { entity, context }
    }
}

/// Display tag of an entity.
#[derive(Debug)]
pub struct TagComponent {
    entity: EntityId,
    context: Arc<ScriptContext>,
}

impl TagComponent {
    #[must_use]
    pub fn entity_id(&self) -> EntityId {
        self.entity
    }

    pub fn tag(&self) -> HostResult<String> {
        self.context.host().entity_tag(self.entity)
    }

    pub fn set_tag(&self, tag: &str) -> HostResult<()> {
        self.context.host().set_entity_tag(self.entity, tag)
    }
}

impl Component for TagComponent {
    fn type_name() -> &'static str {
        builtin::TAG
    }
}

impl ComponentView for TagComponent {
    fn bind(entity: EntityId, context: Arc<ScriptContext>) -> Self {
        Self { entity, context }
    }
}

/// The script bound to an entity.
#[derive(Debug)]
pub struct ScriptComponent {
    entity: EntityId,
    context: Arc<ScriptContext>,
}

impl ScriptComponent {
    #[must_use]
    pub fn entity_id(&self) -> EntityId {
        self.entity
    }

    /// The script object the engine bound to this component, if any.
    pub fn instance(&self) -> HostResult<Option<ScriptInstance>> {
        self.context.host().script_instance(self.entity)
    }
}

impl Component for ScriptComponent {
    fn type_name() -> &'static str {
        builtin::SCRIPT
    }
}

impl ComponentView for ScriptComponent {
    fn bind(entity: EntityId, context: Arc<ScriptContext>) -> Self {
        Self { entity, context }
    }
}
