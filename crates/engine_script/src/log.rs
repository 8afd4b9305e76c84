//! Script logging, forwarded to the engine logger.

use std::fmt::Display;
use std::sync::Arc;

use engine_host::{HostResult, LogLevel};

use crate::runtime::ScriptContext;

#[derive(Debug, Clone)]
pub struct Log {
    context: Arc<ScriptContext>,
}

impl Log {
    pub(crate) fn new(context: Arc<ScriptContext>) -> Self {
        Self { context }
    }

    /// Format `message` and hand it to the engine at `level`.
    pub fn log(&self, level: LogLevel, message: impl Display) -> HostResult<()> {
        self.context.host().log_message(level, &message.to_string())
    }

    pub fn trace(&self, message: impl Display) -> HostResult<()> {
        self.log(LogLevel::Trace, message)
    }

    pub fn debug(&self, message: impl Display) -> HostResult<()> {
        self.log(LogLevel::Debug, message)
    }

    pub fn info(&self, message: impl Display) -> HostResult<()> {
        self.log(LogLevel::Info, message)
    }

    pub fn warn(&self, message: impl Display) -> HostResult<()> {
        self.log(LogLevel::Warn, message)
    }

    pub fn error(&self, message: impl Display) -> HostResult<()> {
        self.log(LogLevel::Error, message)
    }

    pub fn critical(&self, message: impl Display) -> HostResult<()> {
        self.log(LogLevel::Critical, message)
    }
}
