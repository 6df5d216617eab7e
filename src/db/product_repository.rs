use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::product::Product;
use super::{ProductRepository, RepositoryError};

// ============================================================================
// Product Repository - Postgres
// ============================================================================

/// Postgres-backed product storage.
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: String,
    name: String,
    price: f64,
}

fn rebuild_product(row: ProductRow) -> Result<Product, RepositoryError> {
    let entity_id = row.id.clone();
    Product::new(row.id, row.name, row.price)
        .map_err(|e| RepositoryError::corrupted("product", entity_id, e))
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn create(&self, product: &Product) -> Result<(), RepositoryError> {
        sqlx::query("INSERT INTO products (id, name, price) VALUES ($1, $2, $3)")
            .bind(&product.id)
            .bind(&product.name)
            .bind(product.price)
            .execute(&self.pool)
            .await?;

        tracing::debug!(product_id = %product.id, "Product created");
        Ok(())
    }

    async fn find(&self, id: &str) -> Result<Product, RepositoryError> {
        let row: ProductRow = sqlx::query_as("SELECT id, name, price FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| RepositoryError::not_found("product", id))?;

        rebuild_product(row)
    }

    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows: Vec<ProductRow> = sqlx::query_as("SELECT id, name, price FROM products")
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(rebuild_product).collect()
    }

    async fn update(&self, product: &Product) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE products SET name = $1, price = $2 WHERE id = $3")
            .bind(&product.name)
            .bind(product.price)
            .bind(&product.id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found("product", product.id.as_str()));
        }
        Ok(())
    }
}
