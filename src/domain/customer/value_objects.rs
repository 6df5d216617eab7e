use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::CustomerError;

// ============================================================================
// Customer Value Objects
// ============================================================================

/// Postal address of a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub number: u32,
    pub zip: String,
    pub city: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        number: u32,
        zip: impl Into<String>,
        city: impl Into<String>,
    ) -> Result<Self, CustomerError> {
        let address = Self {
            street: street.into(),
            number,
            zip: zip.into(),
            city: city.into(),
        };
        address.validate()?;
        Ok(address)
    }

    fn validate(&self) -> Result<(), CustomerError> {
        if self.street.is_empty() {
            return Err(CustomerError::EmptyStreet);
        }
        if self.zip.is_empty() {
            return Err(CustomerError::EmptyZip);
        }
        if self.city.is_empty() {
            return Err(CustomerError::EmptyCity);
        }
        Ok(())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {} {}", self.street, self.number, self.zip, self.city)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_creation() {
        let address = Address::new("Main Street", 100, "13330-250", "Springfield").unwrap();

        assert_eq!(address.street, "Main Street");
        assert_eq!(address.number, 100);
        assert_eq!(address.zip, "13330-250");
        assert_eq!(address.city, "Springfield");
    }

    #[test]
    fn test_address_requires_street_zip_and_city() {
        assert!(matches!(
            Address::new("", 1, "zip", "city"),
            Err(CustomerError::EmptyStreet)
        ));
        assert!(matches!(
            Address::new("street", 1, "", "city"),
            Err(CustomerError::EmptyZip)
        ));
        assert!(matches!(
            Address::new("street", 1, "zip", ""),
            Err(CustomerError::EmptyCity)
        ));
    }

    #[test]
    fn test_address_display_rendering() {
        let address = Address::new("Main Street", 123, "0000", "Springfield").unwrap();
        assert_eq!(address.to_string(), "Main Street, 123, 0000 Springfield");
    }

    #[test]
    fn test_addresses_with_identical_fields_are_equal() {
        let a = Address::new("Main Street", 1, "zip", "city").unwrap();
        let b = Address::new("Main Street", 1, "zip", "city").unwrap();
        assert_eq!(a, b);
    }
}
