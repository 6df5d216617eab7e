use std::collections::HashMap;
use std::sync::Arc;

use super::event::DomainEvent;
use super::handler::{EventHandler, HandlerError};

// ============================================================================
// Event Dispatcher - String-Keyed Handler Registry
// ============================================================================

/// Registry mapping event type names to ordered handler lists.
///
/// Dispatch is synchronous and in-process: `notify` returns only after the
/// last handler has run, or after the first failing handler. Instances are
/// fully independent; there is no process-wide registry.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: HashMap<String, Vec<Arc<dyn EventHandler>>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Appends `handler` to the list registered under `event_type`.
    ///
    /// The list is created on first registration. Registering the same
    /// handler reference twice is allowed and results in two invocations
    /// per notification.
    pub fn register(&mut self, event_type: impl Into<String>, handler: Arc<dyn EventHandler>) {
        self.handlers.entry(event_type.into()).or_default().push(handler);
    }

    /// Removes the first handler under `event_type` that is the same
    /// reference as `handler`.
    ///
    /// Identity is pointer identity, not value equality. An unknown event
    /// type or an unregistered handler is a silent no-op.
    pub fn unregister(&mut self, event_type: &str, handler: &Arc<dyn EventHandler>) {
        if let Some(registered) = self.handlers.get_mut(event_type) {
            if let Some(index) = registered.iter().position(|h| Arc::ptr_eq(h, handler)) {
                registered.remove(index);
            }
        }
    }

    /// Clears the entire registry.
    pub fn unregister_all(&mut self) {
        self.handlers.clear();
    }

    /// Delivers `event` to every handler registered under its type name, in
    /// registration order.
    ///
    /// No registered handlers is a successful no-op. A handler error aborts
    /// delivery to the handlers after it and propagates to the caller.
    pub fn notify(&self, event: &dyn DomainEvent) -> Result<(), HandlerError> {
        let Some(registered) = self.handlers.get(event.event_type()) else {
            return Ok(());
        };

        tracing::debug!(
            event_type = %event.event_type(),
            handler_count = registered.len(),
            "Dispatching domain event"
        );

        for handler in registered {
            handler.handle(event)?;
        }

        Ok(())
    }

    /// Current registry contents, event type name to handler list.
    pub fn handlers(&self) -> &HashMap<String, Vec<Arc<dyn EventHandler>>> {
        &self.handlers
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
