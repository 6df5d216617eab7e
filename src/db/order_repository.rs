use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

use crate::domain::order::{Order, OrderItem};
use super::{OrderRepository, RepositoryError};

// ============================================================================
// Order Repository - Two-Table Aggregate Storage
// ============================================================================

/// Postgres-backed order storage.
///
/// An order spans a header row plus one row per item. Every write recomputes
/// the denormalized header total from the in-memory items; reads rebuild the
/// aggregate from the item rows and never look at the stored total.
pub struct PostgresOrderRepository {
    pool: PgPool,
}

impl PostgresOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_items(&self, order_id: &str) -> Result<Vec<OrderItemRow>, RepositoryError> {
        let items = sqlx::query_as(
            "SELECT id, name, price, product_id, quantity FROM order_items \
             WHERE order_id = $1 ORDER BY position",
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }
}

#[derive(sqlx::FromRow)]
struct OrderRow {
    id: String,
    customer_id: String,
}

#[derive(sqlx::FromRow)]
struct OrderItemRow {
    id: String,
    name: String,
    price: f64,
    product_id: String,
    quantity: i32,
}

/// Rebuilds the aggregate from its header and item rows.
///
/// Goes through `Order::new`, so a header without items (or an item with a
/// non-positive quantity) surfaces as a corruption error. The stored total
/// is not part of the input; the aggregate recomputes it on demand.
fn rebuild_order(header: OrderRow, item_rows: Vec<OrderItemRow>) -> Result<Order, RepositoryError> {
    let order_id = header.id.clone();
    let items = item_rows
        .into_iter()
        .map(|row| OrderItem::new(row.id, row.name, row.price, row.product_id, row.quantity))
        .collect();

    Order::new(header.id, header.customer_id, items)
        .map_err(|e| RepositoryError::corrupted("order", order_id, e))
}

/// Inserts every item of the order, tagging each row with its index so a
/// later read can restore insertion order.
async fn insert_items(
    tx: &mut Transaction<'_, Postgres>,
    order: &Order,
) -> Result<(), RepositoryError> {
    for (position, item) in order.items.iter().enumerate() {
        sqlx::query(
            "INSERT INTO order_items (id, name, price, product_id, quantity, order_id, position) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(&item.id)
        .bind(&item.name)
        .bind(item.price)
        .bind(&item.product_id)
        .bind(item.quantity)
        .bind(&order.id)
        .bind(position as i32)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    /// Inserts the header row and all item rows in one transaction. A
    /// failure on any row leaves nothing behind.
    async fn create(&self, order: &Order) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT INTO orders (id, customer_id, total) VALUES ($1, $2, $3)")
            .bind(&order.id)
            .bind(&order.customer_id)
            .bind(order.total())
            .execute(&mut *tx)
            .await?;

        insert_items(&mut tx, order).await?;

        tx.commit().await?;

        tracing::debug!(order_id = %order.id, item_count = order.items.len(), "Order created");
        Ok(())
    }

    async fn find(&self, id: &str) -> Result<Order, RepositoryError> {
        let header: OrderRow = sqlx::query_as("SELECT id, customer_id FROM orders WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| RepositoryError::not_found("order", id))?;

        let items = self.load_items(id).await?;
        rebuild_order(header, items)
    }

    async fn find_all(&self) -> Result<Vec<Order>, RepositoryError> {
        let headers: Vec<OrderRow> = sqlx::query_as("SELECT id, customer_id FROM orders")
            .fetch_all(&self.pool)
            .await?;

        let mut orders = Vec::with_capacity(headers.len());
        for header in headers {
            let items = self.load_items(&header.id).await?;
            orders.push(rebuild_order(header, items)?);
        }
        Ok(orders)
    }

    /// Replaces the persisted aggregate with the in-memory one: delete all
    /// item rows, re-insert the current items, rewrite the header's customer
    /// and recomputed total. One transaction; a failure in any step rolls
    /// back the whole replacement.
    ///
    /// The item set is always replaced wholesale; stored rows are never
    /// diffed against the in-memory items.
    async fn update(&self, order: &Order) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM order_items WHERE order_id = $1")
            .bind(&order.id)
            .execute(&mut *tx)
            .await?;

        insert_items(&mut tx, order).await?;

        sqlx::query("UPDATE orders SET customer_id = $1, total = $2 WHERE id = $3")
            .bind(&order.customer_id)
            .bind(order.total())
            .bind(&order.id)
            .execute(&mut *tx)
            .await?;

        // Dropping the transaction without reaching this commit rolls every
        // step back.
        tx.commit().await?;

        tracing::debug!(order_id = %order.id, item_count = order.items.len(), "Order updated");
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rebuild_preserves_fields_and_item_order() {
        let header = OrderRow {
            id: "o1".to_string(),
            customer_id: "c1".to_string(),
        };
        let items = vec![
            OrderItemRow {
                id: "i1".to_string(),
                name: "Product 1".to_string(),
                price: 10.0,
                product_id: "p1".to_string(),
                quantity: 2,
            },
            OrderItemRow {
                id: "i2".to_string(),
                name: "Product 2".to_string(),
                price: 5.0,
                product_id: "p2".to_string(),
                quantity: 1,
            },
        ];

        let order = rebuild_order(header, items).unwrap();

        assert_eq!(order.id, "o1");
        assert_eq!(order.customer_id, "c1");
        assert_eq!(order.items[0].id, "i1");
        assert_eq!(order.items[1].id, "i2");
        assert_eq!(order.total(), 25.0);
    }

    #[test]
    fn test_rebuild_rejects_a_header_without_items() {
        let header = OrderRow {
            id: "o1".to_string(),
            customer_id: "c1".to_string(),
        };

        let result = rebuild_order(header, vec![]);

        assert!(matches!(
            result,
            Err(RepositoryError::Corrupted { entity: "order", .. })
        ));
    }
}
