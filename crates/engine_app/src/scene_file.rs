//! JSON scene descriptions for the headless harness.
//!
//! ```json
//! {
//!   "entities": [
//!     { "tag": "World" },
//!     { "tag": "Player", "id": 7, "parent": "World",
//!       "components": ["ScriptComponent", "CameraComponent"],
//!       "transform": { "position": [0, 1, 0], "rotation": [0, 0, 0, 1], "scale": [1, 1, 1] } }
//!   ]
//! }
//! ```
//!
//! Entities are created in file order. Parents are attached afterwards, so a
//! child may be listed before its parent.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use engine_component::{ComponentTypeId, EntityId};
use engine_host::{EngineHost, HostError, InMemoryHost};
use engine_math::Transform;

/// Errors raised while reading or applying a scene file.
#[derive(Debug, Error)]
pub enum SceneFileError {
    /// The scene file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not valid scene JSON.
    #[error("malformed scene file: {0}")]
    Json(#[from] serde_json::Error),
    /// Two entities in the file share a tag.
    #[error("duplicate entity tag: {0}")]
    DuplicateTag(String),
    /// An entity names a parent tag that no entity in the file carries.
    #[error("entity {child} names unknown parent {parent}")]
    UnknownParent { child: String, parent: String },
    /// The engine refused one of the calls made while loading.
    #[error("engine rejected scene: {0}")]
    Host(#[from] HostError),
}

/// One entity in a scene file.
#[derive(Debug, Clone, Deserialize)]
pub struct EntityDef {
    pub tag: String,
    /// Fixed entity ID. Allocated by the engine when absent.
    #[serde(default)]
    pub id: Option<u64>,
    /// Tag of the parent entity.
    #[serde(default)]
    pub parent: Option<String>,
    /// Component kind names to attach beyond the defaults.
    #[serde(default)]
    pub components: Vec<String>,
    #[serde(default)]
    pub transform: Option<Transform>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SceneFile {
    #[serde(default)]
    pub entities: Vec<EntityDef>,
}

impl SceneFile {
    pub fn from_path(path: &Path) -> Result<Self, SceneFileError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_json(&source)
    }

    pub fn from_json(source: &str) -> Result<Self, SceneFileError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Create every entity of this scene in `host`. Returns the created
    /// handles keyed by tag.
    pub fn load_into(&self, host: &InMemoryHost) -> Result<HashMap<String, EntityId>, SceneFileError> {
        let mut by_tag = HashMap::with_capacity(self.entities.len());
        for def in &self.entities {
            if by_tag.contains_key(&def.tag) {
                return Err(SceneFileError::DuplicateTag(def.tag.clone()));
            }
            let id = match def.id {
                Some(raw) => host.insert_entity(EntityId::from_raw(raw), &def.tag)?,
                None => host.create_entity(&def.tag)?,
            };
            for name in &def.components {
                host.add_component(id, ComponentTypeId::from_name(name))?;
            }
            if let Some(transform) = def.transform {
                host.put_transform(id, transform)?;
            }
            debug!(entity = %id, tag = %def.tag, "scene entity loaded");
            by_tag.insert(def.tag.clone(), id);
        }

        for def in &self.entities {
            let Some(parent_tag) = &def.parent else {
                continue;
            };
            let parent = by_tag
                .get(parent_tag)
                .copied()
                .ok_or_else(|| SceneFileError::UnknownParent {
                    child: def.tag.clone(),
                    parent: parent_tag.clone(),
                })?;
            host.set_entity_parent(by_tag[&def.tag], parent)?;
        }
        Ok(by_tag)
    }
}

#[cfg(test)]
mod tests {
    use engine_math::Vec3;

    use super::*;

    const DEMO: &str = include_str!("../scenes/demo.json");

    #[test]
    fn test_demo_scene_loads() {
        let host = InMemoryHost::new();
        let scene = SceneFile::from_json(DEMO).unwrap();
        let ids = scene.load_into(&host).unwrap();

        assert_eq!(host.entity_count(), scene.entities.len());
        let player = ids["Player"];
        assert_eq!(player, EntityId(7));
        assert_eq!(host.entity_parent(player).unwrap(), ids["World"]);
        assert!(host.has_component(player, ComponentTypeId::CAMERA).unwrap());
        assert_eq!(host.entity_transform(player).unwrap().position, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_child_before_parent() {
        let host = InMemoryHost::new();
        let scene = SceneFile::from_json(
            r#"{ "entities": [ { "tag": "Wheel", "parent": "Car" }, { "tag": "Car" } ] }"#,
        )
        .unwrap();
        let ids = scene.load_into(&host).unwrap();
        assert_eq!(host.entity_children(ids["Car"]).unwrap(), vec![ids["Wheel"]]);
    }

    #[test]
    fn test_unknown_parent() {
        let host = InMemoryHost::new();
        let scene =
            SceneFile::from_json(r#"{ "entities": [ { "tag": "Orphan", "parent": "Nobody" } ] }"#)
                .unwrap();
        assert!(matches!(
            scene.load_into(&host),
            Err(SceneFileError::UnknownParent { .. })
        ));
    }

    #[test]
    fn test_duplicate_tag() {
        let host = InMemoryHost::new();
        let scene =
            SceneFile::from_json(r#"{ "entities": [ { "tag": "A" }, { "tag": "A" } ] }"#).unwrap();
        assert!(matches!(
            scene.load_into(&host),
            Err(SceneFileError::DuplicateTag(tag)) if tag == "A"
        ));
    }

    #[test]
    fn test_reserved_id_is_rejected() {
        let host = InMemoryHost::new();
        let scene = SceneFile::from_json(r#"{ "entities": [ { "tag": "Null", "id": 0 } ] }"#).unwrap();
        assert!(matches!(
            scene.load_into(&host),
            Err(SceneFileError::Host(HostError::InvalidArgument(_)))
        ));
    }

    #[test]
    fn test_error_messages() {
        let err = SceneFileError::UnknownParent {
            child: "Wheel".into(),
            parent: "Car".into(),
        };
        assert_eq!(err.to_string(), "entity Wheel names unknown parent Car");
        assert_eq!(
            SceneFileError::DuplicateTag("A".into()).to_string(),
            "duplicate entity tag: A"
        );
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            SceneFile::from_json("{ not json"),
            Err(SceneFileError::Json(_))
        ));
    }
}
