//! Scripting runtime configuration.

/// Tag given to entities created without one.
pub const DEFAULT_ENTITY_TAG: &str = "Unnamed Entity";

/// Environment variable overriding [`ScriptConfig::default_entity_tag`].
pub const DEFAULT_TAG_ENV: &str = "ENGINE_SCRIPT_DEFAULT_TAG";

/// Environment variable toggling [`ScriptConfig::cache_lookups`].
pub const LOOKUP_CACHE_ENV: &str = "ENGINE_SCRIPT_LOOKUP_CACHE";

/// Configuration for a [`ScriptRuntime`](crate::ScriptRuntime).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptConfig {
    /// Tag used by [`Scene::create_unnamed_entity`](crate::Scene::create_unnamed_entity).
    pub default_entity_tag: String,
    /// Whether tag/UUID lookups are remembered between calls.
    pub cache_lookups: bool,
}

impl ScriptConfig {
    /// Create a config with the built-in defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            default_entity_tag: DEFAULT_ENTITY_TAG.to_string(),
            cache_lookups: true,
        }
    }

    /// Build a config from the process environment, falling back to the
    /// defaults for unset or unparsable variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from an arbitrary variable source.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::new();
        if let Some(tag) = lookup(DEFAULT_TAG_ENV).filter(|tag| !tag.is_empty()) {
            config.default_entity_tag = tag;
        }
        if let Some(enabled) = lookup(LOOKUP_CACHE_ENV).as_deref().and_then(parse_flag) {
            config.cache_lookups = enabled;
        }
        config
    }

    /// Override the tag given to unnamed entities.
    #[must_use]
    pub fn with_default_tag(mut self, tag: impl Into<String>) -> Self {
        self.default_entity_tag = tag.into();
        self
    }

    /// Enable or disable the tag/UUID lookup cache.
    #[must_use]
    pub fn with_lookup_cache(mut self, enabled: bool) -> Self {
        self.cache_lookups = enabled;
        self
    }
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = ScriptConfig::default();
        assert_eq!(config.default_entity_tag, "Unnamed Entity");
        assert!(config.cache_lookups);
    }

    #[test]
    fn test_builder() {
        let config = ScriptConfig::new()
            .with_default_tag("Spawned")
            .with_lookup_cache(false);
        assert_eq!(config.default_entity_tag, "Spawned");
        assert!(!config.cache_lookups);
    }

    #[test]
    fn test_from_lookup_overrides() {
        let env = vars(&[(DEFAULT_TAG_ENV, "Actor"), (LOOKUP_CACHE_ENV, "off")]);
        let config = ScriptConfig::from_lookup(|k| env.get(k).cloned());
        assert_eq!(config.default_entity_tag, "Actor");
        assert!(!config.cache_lookups);
    }

    #[test]
    fn test_from_lookup_ignores_garbage() {
        let env = vars(&[(DEFAULT_TAG_ENV, ""), (LOOKUP_CACHE_ENV, "maybe")]);
        let config = ScriptConfig::from_lookup(|k| env.get(k).cloned());
        assert_eq!(config, ScriptConfig::new());
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag(" TRUE "), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag(""), None);
    }
}
