// ============================================================================
// Order Management Domain Layer
// ============================================================================
//
// Two independent cores over the same domain objects:
// - src/events/  in-process dispatch of named domain events
// - src/db/      transactional Postgres repositories
//
// Domain aggregates live in src/domain/, one subdirectory per aggregate.
//
// ============================================================================

pub mod config;
pub mod db;
pub mod domain;
pub mod events;
