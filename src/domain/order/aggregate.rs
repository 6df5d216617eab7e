use serde::{Deserialize, Serialize};

use super::errors::OrderError;
use super::value_objects::OrderItem;

// ============================================================================
// Order Aggregate - Business Logic
// ============================================================================

/// An order placed by a customer.
///
/// The id is assigned by whoever creates the order, never by storage. Items
/// form a composition: they have no lifecycle outside their order. The total
/// is derived from the items on demand and is never stored on the aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer_id: String,
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Builds an order, rejecting it when construction invariants fail.
    ///
    /// An order must reference a customer and hold at least one item with a
    /// positive quantity.
    pub fn new(
        id: impl Into<String>,
        customer_id: impl Into<String>,
        items: Vec<OrderItem>,
    ) -> Result<Self, OrderError> {
        let order = Self {
            id: id.into(),
            customer_id: customer_id.into(),
            items,
        };
        order.validate()?;
        Ok(order)
    }

    fn validate(&self) -> Result<(), OrderError> {
        if self.id.is_empty() {
            return Err(OrderError::EmptyId);
        }
        if self.customer_id.is_empty() {
            return Err(OrderError::EmptyCustomerId);
        }
        if self.items.is_empty() {
            return Err(OrderError::EmptyItems);
        }
        for item in &self.items {
            if item.quantity <= 0 {
                return Err(OrderError::InvalidQuantity(item.quantity));
            }
        }
        Ok(())
    }

    /// Appends one line item.
    pub fn add_item(&mut self, item: OrderItem) -> Result<(), OrderError> {
        if item.quantity <= 0 {
            return Err(OrderError::InvalidQuantity(item.quantity));
        }
        self.items.push(item);
        Ok(())
    }

    /// Sum of price times quantity over all items, computed on demand.
    pub fn total(&self) -> f64 {
        self.items.iter().map(OrderItem::subtotal).sum()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, price: f64, quantity: i32) -> OrderItem {
        OrderItem::new(id, format!("Item {id}"), price, format!("p-{id}"), quantity)
    }

    #[test]
    fn test_order_requires_at_least_one_item() {
        let result = Order::new("o1", "c1", vec![]);
        assert!(matches!(result, Err(OrderError::EmptyItems)));
    }

    #[test]
    fn test_order_requires_an_id() {
        let result = Order::new("", "c1", vec![item("i1", 10.0, 1)]);
        assert!(matches!(result, Err(OrderError::EmptyId)));
    }

    #[test]
    fn test_order_requires_a_customer() {
        let result = Order::new("o1", "", vec![item("i1", 10.0, 1)]);
        assert!(matches!(result, Err(OrderError::EmptyCustomerId)));
    }

    #[test]
    fn test_order_rejects_non_positive_quantity() {
        let result = Order::new("o1", "c1", vec![item("i1", 10.0, 0)]);
        assert!(matches!(result, Err(OrderError::InvalidQuantity(0))));
    }

    #[test]
    fn test_total_sums_price_times_quantity() {
        let order = Order::new("o1", "c1", vec![item("i1", 100.0, 2), item("i2", 50.0, 1)])
            .unwrap();

        assert_eq!(order.total(), 250.0);
    }

    #[test]
    fn test_total_for_a_single_item_order() {
        let order = Order::new(
            "123",
            "123",
            vec![OrderItem::new("i1", "Product 1", 10.0, "p1", 2)],
        )
        .unwrap();

        assert_eq!(order.total(), 20.0);
    }

    #[test]
    fn test_add_item_extends_the_total() {
        let mut order = Order::new("o1", "c1", vec![item("i1", 10.0, 2)]).unwrap();

        order.add_item(item("i2", 5.0, 3)).unwrap();

        assert_eq!(order.items.len(), 2);
        assert_eq!(order.total(), 35.0);
    }

    #[test]
    fn test_add_item_rejects_non_positive_quantity() {
        let mut order = Order::new("o1", "c1", vec![item("i1", 10.0, 2)]).unwrap();

        let result = order.add_item(item("i2", 5.0, -1));

        assert!(matches!(result, Err(OrderError::InvalidQuantity(-1))));
        assert_eq!(order.items.len(), 1);
    }
}
