// ============================================================================
// Order Domain - Business Logic for Order Aggregate
// ============================================================================
//
// This module contains ALL Order-specific code:
// - Value objects (OrderItem)
// - Events (OrderPlaced)
// - Errors (OrderError enum)
// - Aggregate (Order with construction invariants and derived total)
//
// Persistence for this aggregate lives in src/db/
//
// ============================================================================

pub mod aggregate;
pub mod errors;
pub mod events;
pub mod value_objects;

// Re-export for convenience
pub use aggregate::*;
pub use errors::*;
pub use events::*;
pub use value_objects::*;
