//! # engine_script
//!
//! The scripting API. Game logic talks to the proxy types in this crate and
//! every call is forwarded to an [`EngineHost`]; the engine owns all state.
//!
//! What this crate keeps locally are caches of proxy objects:
//!
//! - each [`Entity`] caches at most one view per component kind, re-checked
//!   against the engine before it is handed out;
//! - the runtime caches tag and UUID lookups, re-validating liveness on
//!   every hit.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use engine_host::InMemoryHost;
//! use engine_script::{ScriptComponent, ScriptRuntime};
//!
//! let host = Arc::new(InMemoryHost::new());
//! host.spawn("Player");
//!
//! let runtime = ScriptRuntime::new(host);
//! let player = runtime.scene().find_entity_by_tag("Player").unwrap().unwrap();
//! let script = player.add_component::<ScriptComponent>().unwrap();
//! assert_eq!(script.entity_id(), player.id());
//! ```

pub mod application;
pub mod assets;
pub mod component;
pub mod config;
pub mod entity;
pub mod input;
pub mod log;
pub mod lookup;
pub mod runtime;
pub mod scene;

pub use application::Application;
pub use assets::Assets;
pub use component::{
    CameraComponent, ComponentView, LightComponent, ModelComponent, ScriptComponent, TagComponent,
    TransformComponent,
};
pub use config::ScriptConfig;
pub use entity::Entity;
pub use input::Input;
pub use log::Log;
pub use lookup::{EntityLookupCache, LookupKey};
pub use runtime::{ScriptContext, ScriptRuntime};
pub use scene::Scene;

pub use engine_component::{AssetHandle, Component, ComponentTypeId, EntityId};
pub use engine_host::{
    CursorMode, EngineHost, GamepadButton, HostError, HostResult, KeyCode, LogLevel, MouseButton,
    ScriptInstance,
};
pub use engine_math::{Quaternion, Transform, Vector2, Vector3, Vector4};
