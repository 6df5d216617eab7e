// ============================================================================
// Domain Event Infrastructure
// ============================================================================
//
// Generic, reusable in-process event dispatch.
// Domain-specific events and handlers are in src/domain/
//
// ============================================================================

mod dispatcher;
mod event;
mod handler;

pub use dispatcher::*;
pub use event::*;
pub use handler::*;
