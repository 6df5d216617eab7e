use super::event::DomainEvent;

// ============================================================================
// Event Handler Contract
// ============================================================================

/// Error raised inside an event handler.
///
/// Carries the event type name the handler was invoked for. The dispatcher
/// surfaces this to the `notify` caller unchanged.
#[derive(Debug, thiserror::Error)]
#[error("Handler failed for event '{event_type}': {message}")]
pub struct HandlerError {
    pub event_type: String,
    pub message: String,
}

impl HandlerError {
    pub fn new(event_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            message: message.into(),
        }
    }
}

/// A unit of behavior bound to one event type name.
///
/// Handlers produce side effects only; they return nothing on success.
pub trait EventHandler: Send + Sync {
    fn handle(&self, event: &dyn DomainEvent) -> Result<(), HandlerError>;
}
