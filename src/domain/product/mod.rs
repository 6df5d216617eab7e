// ============================================================================
// Product Domain - Catalog Entity Referenced by Order Items
// ============================================================================

pub mod aggregate;
pub mod errors;

// Re-export for convenience
pub use aggregate::*;
pub use errors::*;
