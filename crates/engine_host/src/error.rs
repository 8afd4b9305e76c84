//! Host-boundary error types.

use engine_component::EntityId;

/// Result of a call into the engine.
pub type HostResult<T> = Result<T, HostError>;

/// Errors the engine can report for a forwarded call.
///
/// The scripting layer never inspects or retries these; they reach the
/// script unchanged.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HostError {
    /// The call named an entity the engine does not know.
    #[error("entity not found: {0}")]
    EntityNotFound(EntityId),

    /// An argument was rejected by the engine.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The engine build does not implement this entry point.
    #[error("unsupported engine call: {0}")]
    Unsupported(&'static str),

    /// Any other engine-side failure.
    #[error("engine error: {0}")]
    Engine(String),
}
