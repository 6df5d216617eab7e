use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::events::DomainEvent;
use super::aggregate::Order;

// ============================================================================
// Order Events
// ============================================================================

/// Raised when an order has been placed.
///
/// Dispatched under the name "OrderPlacedEvent". The payload snapshots the
/// order's fields and derived total at the moment of placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderPlacedEvent {
    pub order_id: String,
    pub customer_id: String,
    pub total: f64,
    pub occurred_at: DateTime<Utc>,
}

impl OrderPlacedEvent {
    pub fn new(order: &Order) -> Self {
        Self {
            order_id: order.id.clone(),
            customer_id: order.customer_id.clone(),
            total: order.total(),
            occurred_at: Utc::now(),
        }
    }
}

impl DomainEvent for OrderPlacedEvent {
    fn event_type(&self) -> &str {
        "OrderPlacedEvent"
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    fn payload(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.order_id,
            "customerId": self.customer_id,
            "total": self.total,
        })
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::value_objects::OrderItem;

    #[test]
    fn test_order_placed_event_snapshots_the_total() {
        let order = Order::new(
            "o1",
            "c1",
            vec![OrderItem::new("i1", "Product 1", 10.0, "p1", 2)],
        )
        .unwrap();

        let event = OrderPlacedEvent::new(&order);

        assert_eq!(event.event_type(), "OrderPlacedEvent");
        assert_eq!(event.total, 20.0);
        assert_eq!(event.payload()["customerId"], "c1");
        assert_eq!(event.payload()["total"], 20.0);
    }
}
