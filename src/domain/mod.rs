// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// This module contains domain-specific aggregates and business logic.
// Each aggregate has its own subdirectory with:
// - Value objects
// - Events
// - Event handlers
// - Errors
// - Aggregate implementation
//
// This layer is completely separate from the event dispatch infrastructure
// and from persistence.
//
// ============================================================================

pub mod customer;
pub mod order;
pub mod product;
