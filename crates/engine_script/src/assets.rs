//! Asset handle queries.

use std::sync::Arc;

use engine_component::AssetHandle;
use engine_host::HostResult;

use crate::runtime::ScriptContext;

#[derive(Debug, Clone)]
pub struct Assets {
    context: Arc<ScriptContext>,
}

impl Assets {
    pub(crate) fn new(context: Arc<ScriptContext>) -> Self {
        Self { context }
    }

    /// Whether `handle` names a loaded asset. Always asks the engine, even
    /// for [`AssetHandle::INVALID`].
    pub fn is_valid(&self, handle: AssetHandle) -> HostResult<bool> {
        self.context.host().asset_is_valid(handle)
    }
}

#[cfg(test)]
mod tests {
    use engine_host::InMemoryHost;

    use super::*;
    use crate::runtime::ScriptRuntime;

    #[test]
    fn test_validity_is_decided_by_engine() {
        let host = Arc::new(InMemoryHost::new());
        let assets = ScriptRuntime::new(host.clone()).assets();
        let mesh = AssetHandle::from_raw(12);

        assert!(!assets.is_valid(mesh).unwrap());
        host.register_asset(mesh);
        assert!(assets.is_valid(mesh).unwrap());
        host.unload_asset(mesh);
        assert!(!assets.is_valid(mesh).unwrap());
    }

    #[test]
    fn test_invalid_handle_still_forwards() {
        let host = Arc::new(InMemoryHost::new());
        let assets = ScriptRuntime::new(host.clone()).assets();
        assert!(!assets.is_valid(AssetHandle::INVALID).unwrap());
        assert_eq!(host.call_count("asset_is_valid"), 1);
    }
}
