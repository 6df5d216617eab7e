// ============================================================================
// Customer Domain - Business Logic for Customer Aggregate
// ============================================================================
//
// This module contains ALL Customer-specific code:
// - Value objects (Address)
// - Events (CustomerCreated, CustomerAddressChanged)
// - Event handlers (the reference logging handlers)
// - Errors (CustomerError enum)
// - Aggregate (Customer with activation and reward point rules)
//
// Persistence for this aggregate lives in src/db/
//
// ============================================================================

pub mod aggregate;
pub mod errors;
pub mod events;
pub mod handlers;
pub mod value_objects;

// Re-export for convenience
pub use aggregate::*;
pub use errors::*;
pub use events::*;
pub use handlers::*;
pub use value_objects::*;
