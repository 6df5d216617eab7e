use serde::{Deserialize, Serialize};

// ============================================================================
// Order Value Objects
// ============================================================================

/// A single order line.
///
/// Value-like: two items with identical fields are interchangeable. The id
/// exists for the persistence join only, not as a lifecycle identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub product_id: String,
    pub quantity: i32,
}

impl OrderItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        product_id: impl Into<String>,
        quantity: i32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            product_id: product_id.into(),
            quantity,
        }
    }

    /// Unit price times quantity.
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
