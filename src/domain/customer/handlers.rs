use crate::events::{DomainEvent, EventHandler, HandlerError};

// ============================================================================
// Customer Event Handlers
// ============================================================================
//
// Reference handlers for the customer events. Each reads the fields it
// needs from the event payload and emits one structured log line.
//
// ============================================================================

fn required_field(
    payload: &serde_json::Value,
    field: &str,
    event_type: &str,
) -> Result<String, HandlerError> {
    payload[field]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| HandlerError::new(event_type, format!("payload is missing '{field}'")))
}

/// First of the two independent handlers watching customer creation.
pub struct CustomerCreatedFirstLogHandler;

impl EventHandler for CustomerCreatedFirstLogHandler {
    fn handle(&self, event: &dyn DomainEvent) -> Result<(), HandlerError> {
        let payload = event.payload();
        let id = required_field(&payload, "id", event.event_type())?;
        let name = required_field(&payload, "name", event.event_type())?;

        tracing::info!(id = %id, name = %name, "Customer created (first handler)");
        Ok(())
    }
}

/// Second of the two independent handlers watching customer creation.
pub struct CustomerCreatedSecondLogHandler;

impl EventHandler for CustomerCreatedSecondLogHandler {
    fn handle(&self, event: &dyn DomainEvent) -> Result<(), HandlerError> {
        let payload = event.payload();
        let id = required_field(&payload, "id", event.event_type())?;
        let name = required_field(&payload, "name", event.event_type())?;

        tracing::info!(id = %id, name = %name, "Customer created (second handler)");
        Ok(())
    }
}

/// Logs the rendered address whenever a customer moves.
pub struct CustomerAddressChangedLogHandler;

impl EventHandler for CustomerAddressChangedLogHandler {
    fn handle(&self, event: &dyn DomainEvent) -> Result<(), HandlerError> {
        let payload = event.payload();
        let id = required_field(&payload, "id", event.event_type())?;
        let name = required_field(&payload, "name", event.event_type())?;
        let address = required_field(&payload, "address", event.event_type())?;

        tracing::info!(
            id = %id,
            name = %name,
            address = %address,
            "Customer address changed"
        );
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::aggregate::Customer;
    use crate::domain::customer::events::{CustomerAddressChangedEvent, CustomerCreatedEvent};
    use crate::domain::customer::value_objects::Address;
    use crate::events::EventDispatcher;
    use std::sync::Arc;

    #[test]
    fn test_both_creation_handlers_accept_the_event() {
        let mut dispatcher = EventDispatcher::new();
        dispatcher.register("CustomerCreatedEvent", Arc::new(CustomerCreatedFirstLogHandler));
        dispatcher.register("CustomerCreatedEvent", Arc::new(CustomerCreatedSecondLogHandler));

        let customer = Customer::new("c1", "John").unwrap();
        let event = CustomerCreatedEvent::new(&customer);

        dispatcher.notify(&event).unwrap();
    }

    #[test]
    fn test_address_handler_reads_the_rendered_address() {
        let mut customer = Customer::new("c1", "John").unwrap();
        let address = Address::new("Main Street", 123, "0000", "Springfield").unwrap();
        customer.change_address(address.clone());

        let event = CustomerAddressChangedEvent::new(&customer, &address);

        CustomerAddressChangedLogHandler.handle(&event).unwrap();
    }

    #[test]
    fn test_address_handler_rejects_a_payload_without_address() {
        let customer = Customer::new("c1", "John").unwrap();
        let event = CustomerCreatedEvent::new(&customer);

        let error = CustomerAddressChangedLogHandler.handle(&event).unwrap_err();

        assert_eq!(error.event_type, "CustomerCreatedEvent");
        assert!(error.message.contains("address"));
    }
}
