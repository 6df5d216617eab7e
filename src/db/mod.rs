use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::Config;
use crate::domain::customer::Customer;
use crate::domain::order::Order;
use crate::domain::product::Product;

// ============================================================================
// Persistence Layer - Postgres Repositories
// ============================================================================
//
// Repository contracts plus their Postgres implementations. Aggregates are
// rebuilt from rows through the domain constructors, so invalid stored data
// surfaces as a typed error instead of a half-built aggregate.
//
// ============================================================================

pub mod customer_repository;
pub mod order_repository;
pub mod product_repository;

pub use customer_repository::*;
pub use order_repository::*;
pub use product_repository::*;

/// Failures surfaced by the repositories.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// No row matches the requested id. Callers can branch on "does not
    /// exist" without parsing storage errors.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Stored rows no longer satisfy the domain's construction invariants.
    #[error("Stored {entity} {id} is invalid: {reason}")]
    Corrupted {
        entity: &'static str,
        id: String,
        reason: String,
    },

    /// Any I/O, constraint, or transaction failure in the store.
    #[error(transparent)]
    Storage(#[from] sqlx::Error),

    /// Failure while applying embedded migrations.
    #[error(transparent)]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl RepositoryError {
    pub(crate) fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub(crate) fn corrupted(
        entity: &'static str,
        id: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        Self::Corrupted {
            entity,
            id: id.into(),
            reason: reason.to_string(),
        }
    }
}

/// Storage boundary for the order aggregate.
///
/// These four operations are the entire surface; there is no field-level
/// update.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn create(&self, order: &Order) -> Result<(), RepositoryError>;
    async fn find(&self, id: &str) -> Result<Order, RepositoryError>;
    async fn find_all(&self) -> Result<Vec<Order>, RepositoryError>;
    async fn update(&self, order: &Order) -> Result<(), RepositoryError>;
}

/// Storage boundary for customers.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn create(&self, customer: &Customer) -> Result<(), RepositoryError>;
    async fn find(&self, id: &str) -> Result<Customer, RepositoryError>;
    async fn find_all(&self) -> Result<Vec<Customer>, RepositoryError>;
    async fn update(&self, customer: &Customer) -> Result<(), RepositoryError>;
}

/// Storage boundary for products.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create(&self, product: &Product) -> Result<(), RepositoryError>;
    async fn find(&self, id: &str) -> Result<Product, RepositoryError>;
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn update(&self, product: &Product) -> Result<(), RepositoryError>;
}

/// Opens a Postgres pool for the configured database.
pub async fn connect(config: &Config) -> Result<PgPool, RepositoryError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    tracing::info!(max_connections = config.max_connections, "Connected to Postgres");
    Ok(pool)
}

/// Applies the embedded SQL migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), RepositoryError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
