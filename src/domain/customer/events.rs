use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::events::DomainEvent;
use super::aggregate::Customer;
use super::value_objects::Address;

// ============================================================================
// Customer Domain Events
// ============================================================================

/// Raised when a new customer has been created.
///
/// Dispatched under the name "CustomerCreatedEvent".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCreatedEvent {
    pub customer_id: String,
    pub name: String,
    pub occurred_at: DateTime<Utc>,
}

impl CustomerCreatedEvent {
    pub fn new(customer: &Customer) -> Self {
        Self {
            customer_id: customer.id.clone(),
            name: customer.name.clone(),
            occurred_at: Utc::now(),
        }
    }
}

impl DomainEvent for CustomerCreatedEvent {
    fn event_type(&self) -> &str {
        "CustomerCreatedEvent"
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    fn payload(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.customer_id,
            "name": self.name,
        })
    }
}

/// Raised when a customer's address has been changed.
///
/// Dispatched under the name "CustomerAddressChangedEvent". The address is
/// snapshotted at construction time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerAddressChangedEvent {
    pub customer_id: String,
    pub name: String,
    pub address: Address,
    pub occurred_at: DateTime<Utc>,
}

impl CustomerAddressChangedEvent {
    pub fn new(customer: &Customer, address: &Address) -> Self {
        Self {
            customer_id: customer.id.clone(),
            name: customer.name.clone(),
            address: address.clone(),
            occurred_at: Utc::now(),
        }
    }
}

impl DomainEvent for CustomerAddressChangedEvent {
    fn event_type(&self) -> &str {
        "CustomerAddressChangedEvent"
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    fn payload(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.customer_id,
            "name": self.name,
            "address": self.address.to_string(),
        })
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_created_event_snapshots_id_and_name() {
        let customer = Customer::new("c1", "John").unwrap();

        let event = CustomerCreatedEvent::new(&customer);

        assert_eq!(event.event_type(), "CustomerCreatedEvent");
        assert_eq!(event.payload()["id"], "c1");
        assert_eq!(event.payload()["name"], "John");
    }

    #[test]
    fn test_address_changed_event_renders_the_new_address() {
        let mut customer = Customer::new("c1", "John").unwrap();
        let address = Address::new("Main Street", 123, "0000", "Springfield").unwrap();
        customer.change_address(address.clone());

        let event = CustomerAddressChangedEvent::new(&customer, &address);

        assert_eq!(event.event_type(), "CustomerAddressChangedEvent");
        assert_eq!(
            event.payload()["address"],
            "Main Street, 123, 0000 Springfield"
        );
    }
}
