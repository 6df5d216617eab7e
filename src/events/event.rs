use chrono::{DateTime, Utc};

// ============================================================================
// Domain Event Contract
// ============================================================================

/// Base trait for all domain events.
///
/// Events are immutable values created right before notification. They are
/// not persisted; once every handler has run they are discarded.
pub trait DomainEvent: Send + Sync {
    /// Name under which the event is dispatched.
    ///
    /// The name is chosen by the event's author, not derived from the type.
    /// Several event shapes may share one dispatch name, and handlers can
    /// register under a name before any event of that kind exists.
    fn event_type(&self) -> &str;

    /// When the event was created.
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Snapshot of the aggregate state relevant to this occurrence.
    ///
    /// Captured from the aggregate at construction time. Handlers read the
    /// fields they need from this value instead of downcasting to a
    /// concrete event type.
    fn payload(&self) -> serde_json::Value;
}
