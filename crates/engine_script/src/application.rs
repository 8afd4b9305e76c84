//! Application window and lifecycle.

use std::sync::Arc;

use tracing::info;

use engine_host::HostResult;

use crate::runtime::ScriptContext;

/// The running application.
#[derive(Debug, Clone)]
pub struct Application {
    context: Arc<ScriptContext>,
}

impl Application {
    pub(crate) fn new(context: Arc<ScriptContext>) -> Self {
        Self { context }
    }

    pub fn width(&self) -> HostResult<u32> {
        self.context.host().window_width()
    }

    pub fn set_width(&self, width: u32) -> HostResult<()> {
        self.context.host().set_window_width(width)
    }

    pub fn height(&self) -> HostResult<u32> {
        self.context.host().window_height()
    }

    pub fn set_height(&self, height: u32) -> HostResult<()> {
        self.context.host().set_window_height(height)
    }

    /// Window size as `(width, height)`.
    pub fn size(&self) -> HostResult<(u32, u32)> {
        Ok((self.width()?, self.height()?))
    }

    /// Ask the engine to shut down after the current frame.
    pub fn quit(&self) -> HostResult<()> {
        info!("quit requested by script");
        self.context.host().quit()
    }
}

#[cfg(test)]
mod tests {
    use engine_host::InMemoryHost;

    use super::*;
    use crate::runtime::ScriptRuntime;

    #[test]
    fn test_window_size_forwarding() {
        let host = Arc::new(InMemoryHost::with_window(800, 600));
        let runtime = ScriptRuntime::new(host.clone());
        let app = runtime.application();
        assert_eq!(app.size().unwrap(), (800, 600));

        app.set_width(1920).unwrap();
        app.set_height(1080).unwrap();
        assert_eq!(app.width().unwrap(), 1920);
        assert_eq!(app.height().unwrap(), 1080);
    }

    #[test]
    fn test_quit() {
        let host = Arc::new(InMemoryHost::new());
        let runtime = ScriptRuntime::new(host.clone());
        assert!(!host.quit_requested());
        runtime.application().quit().unwrap();
        assert!(host.quit_requested());
    }
}
