use serde::{Deserialize, Serialize};

use super::errors::ProductError;

// ============================================================================
// Product Entity
// ============================================================================

/// A product that order items reference by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
    ) -> Result<Self, ProductError> {
        let product = Self {
            id: id.into(),
            name: name.into(),
            price,
        };
        product.validate()?;
        Ok(product)
    }

    fn validate(&self) -> Result<(), ProductError> {
        if self.id.is_empty() {
            return Err(ProductError::EmptyId);
        }
        if self.name.is_empty() {
            return Err(ProductError::EmptyName);
        }
        if self.price <= 0.0 {
            return Err(ProductError::InvalidPrice(self.price));
        }
        Ok(())
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), ProductError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ProductError::EmptyName);
        }
        self.name = name;
        Ok(())
    }

    pub fn change_price(&mut self, price: f64) -> Result<(), ProductError> {
        if price <= 0.0 {
            return Err(ProductError::InvalidPrice(price));
        }
        self.price = price;
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_creation() {
        let product = Product::new("p1", "Product 1", 10.0).unwrap();

        assert_eq!(product.id, "p1");
        assert_eq!(product.name, "Product 1");
        assert_eq!(product.price, 10.0);
    }

    #[test]
    fn test_product_requires_id_and_name() {
        assert!(matches!(
            Product::new("", "Product 1", 10.0),
            Err(ProductError::EmptyId)
        ));
        assert!(matches!(
            Product::new("p1", "", 10.0),
            Err(ProductError::EmptyName)
        ));
    }

    #[test]
    fn test_product_price_must_be_positive() {
        let result = Product::new("p1", "Product 1", 0.0);
        assert!(matches!(result, Err(ProductError::InvalidPrice(_))));
    }

    #[test]
    fn test_change_price_revalidates() {
        let mut product = Product::new("p1", "Product 1", 10.0).unwrap();

        assert!(matches!(
            product.change_price(-5.0),
            Err(ProductError::InvalidPrice(_))
        ));
        assert_eq!(product.price, 10.0);

        product.change_price(12.5).unwrap();
        assert_eq!(product.price, 12.5);
    }

    #[test]
    fn test_change_name_rejects_empty_name() {
        let mut product = Product::new("p1", "Product 1", 10.0).unwrap();

        assert!(matches!(
            product.change_name(""),
            Err(ProductError::EmptyName)
        ));
        assert_eq!(product.name, "Product 1");
    }
}
