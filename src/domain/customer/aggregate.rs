use serde::{Deserialize, Serialize};

use super::errors::CustomerError;
use super::value_objects::Address;

// ============================================================================
// Customer Aggregate - Business Logic
// ============================================================================

/// A customer of the shop.
///
/// Created inactive and without an address; an address must be set before
/// activation. Reward points only accumulate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub address: Option<Address>,
    pub active: bool,
    pub reward_points: u32,
}

impl Customer {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self, CustomerError> {
        let customer = Self {
            id: id.into(),
            name: name.into(),
            address: None,
            active: false,
            reward_points: 0,
        };
        customer.validate()?;
        Ok(customer)
    }

    fn validate(&self) -> Result<(), CustomerError> {
        if self.id.is_empty() {
            return Err(CustomerError::EmptyId);
        }
        if self.name.is_empty() {
            return Err(CustomerError::EmptyName);
        }
        Ok(())
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), CustomerError> {
        let name = name.into();
        if name.is_empty() {
            return Err(CustomerError::EmptyName);
        }
        self.name = name;
        Ok(())
    }

    pub fn change_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    /// Marks the customer active. Requires an address.
    pub fn activate(&mut self) -> Result<(), CustomerError> {
        if self.address.is_none() {
            return Err(CustomerError::AddressRequired);
        }
        self.active = true;
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn add_reward_points(&mut self, points: u32) {
        self.reward_points += points;
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
