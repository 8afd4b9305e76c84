//! # engine_host
//!
//! The call boundary between the scripting API and the native engine.
//!
//! This crate provides:
//!
//! - [`host`]: the [`EngineHost`] trait, one method per native entry point.
//! - [`input`]: key, mouse, gamepad and cursor value types.
//! - [`log`]: engine log levels.
//! - [`error`]: [`HostError`], the failures an engine call can report.
//! - [`memory`]: [`InMemoryHost`], a headless engine that keeps everything
//!   in process memory.

pub mod error;
pub mod host;
pub mod input;
pub mod log;
pub mod memory;

pub use error::{HostError, HostResult};
pub use host::{EngineHost, ScriptInstance};
pub use input::{CursorMode, GamepadButton, KeyCode, MouseButton};
pub use log::LogLevel;
pub use memory::InMemoryHost;
