use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::customer::{Address, Customer};
use super::{CustomerRepository, RepositoryError};

// ============================================================================
// Customer Repository - Postgres
// ============================================================================

/// Postgres-backed customer storage. The address is flattened into nullable
/// columns on the customer row.
pub struct PostgresCustomerRepository {
    pool: PgPool,
}

impl PostgresCustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CustomerRow {
    id: String,
    name: String,
    street: Option<String>,
    number: Option<i32>,
    zip: Option<String>,
    city: Option<String>,
    active: bool,
    reward_points: i32,
}

const SELECT_CUSTOMER: &str =
    "SELECT id, name, street, number, zip, city, active, reward_points FROM customers";

/// Rebuilds the aggregate from one row, re-running the domain validations.
fn rebuild_customer(row: CustomerRow) -> Result<Customer, RepositoryError> {
    let entity_id = row.id.clone();

    let address = match (row.street, row.number, row.zip, row.city) {
        (Some(street), Some(number), Some(zip), Some(city)) => {
            let number = u32::try_from(number).map_err(|_| {
                RepositoryError::corrupted("customer", entity_id.clone(), "negative address number")
            })?;
            let address = Address::new(street, number, zip, city)
                .map_err(|e| RepositoryError::corrupted("customer", entity_id.clone(), e))?;
            Some(address)
        }
        (None, None, None, None) => None,
        _ => {
            return Err(RepositoryError::corrupted(
                "customer",
                entity_id,
                "partially stored address",
            ))
        }
    };

    let mut customer = Customer::new(row.id, row.name)
        .map_err(|e| RepositoryError::corrupted("customer", entity_id.clone(), e))?;

    if let Some(address) = address {
        customer.change_address(address);
    }
    if row.active {
        customer
            .activate()
            .map_err(|e| RepositoryError::corrupted("customer", entity_id.clone(), e))?;
    }
    customer.reward_points = u32::try_from(row.reward_points).map_err(|_| {
        RepositoryError::corrupted("customer", entity_id, "negative reward points")
    })?;

    Ok(customer)
}

#[async_trait]
impl CustomerRepository for PostgresCustomerRepository {
    async fn create(&self, customer: &Customer) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO customers (id, name, street, number, zip, city, active, reward_points) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(&customer.id)
        .bind(&customer.name)
        .bind(customer.address.as_ref().map(|a| a.street.clone()))
        .bind(customer.address.as_ref().map(|a| a.number as i32))
        .bind(customer.address.as_ref().map(|a| a.zip.clone()))
        .bind(customer.address.as_ref().map(|a| a.city.clone()))
        .bind(customer.active)
        .bind(customer.reward_points as i32)
        .execute(&self.pool)
        .await?;

        tracing::debug!(customer_id = %customer.id, "Customer created");
        Ok(())
    }

    async fn find(&self, id: &str) -> Result<Customer, RepositoryError> {
        let row: CustomerRow = sqlx::query_as(&format!("{SELECT_CUSTOMER} WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| RepositoryError::not_found("customer", id))?;

        rebuild_customer(row)
    }

    async fn find_all(&self) -> Result<Vec<Customer>, RepositoryError> {
        let rows: Vec<CustomerRow> = sqlx::query_as(SELECT_CUSTOMER)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(rebuild_customer).collect()
    }

    async fn update(&self, customer: &Customer) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE customers SET name = $1, street = $2, number = $3, zip = $4, city = $5, \
             active = $6, reward_points = $7 WHERE id = $8",
        )
        .bind(&customer.name)
        .bind(customer.address.as_ref().map(|a| a.street.clone()))
        .bind(customer.address.as_ref().map(|a| a.number as i32))
        .bind(customer.address.as_ref().map(|a| a.zip.clone()))
        .bind(customer.address.as_ref().map(|a| a.city.clone()))
        .bind(customer.active)
        .bind(customer.reward_points as i32)
        .bind(&customer.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found("customer", customer.id.as_str()));
        }
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> CustomerRow {
        CustomerRow {
            id: "c1".to_string(),
            name: "John".to_string(),
            street: Some("Main Street".to_string()),
            number: Some(123),
            zip: Some("0000".to_string()),
            city: Some("Springfield".to_string()),
            active: true,
            reward_points: 25,
        }
    }

    #[test]
    fn test_rebuild_restores_address_activation_and_points() {
        let customer = rebuild_customer(row()).unwrap();

        assert_eq!(customer.id, "c1");
        assert!(customer.active);
        assert_eq!(customer.reward_points, 25);
        assert_eq!(
            customer.address.unwrap().to_string(),
            "Main Street, 123, 0000 Springfield"
        );
    }

    #[test]
    fn test_rebuild_without_address_columns() {
        let mut no_address = row();
        no_address.street = None;
        no_address.number = None;
        no_address.zip = None;
        no_address.city = None;
        no_address.active = false;

        let customer = rebuild_customer(no_address).unwrap();

        assert!(customer.address.is_none());
        assert!(!customer.active);
    }

    #[test]
    fn test_rebuild_rejects_a_partial_address() {
        let mut partial = row();
        partial.zip = None;

        let result = rebuild_customer(partial);

        assert!(matches!(result, Err(RepositoryError::Corrupted { .. })));
    }

    #[test]
    fn test_rebuild_rejects_active_without_address() {
        let mut invalid = row();
        invalid.street = None;
        invalid.number = None;
        invalid.zip = None;
        invalid.city = None;

        let result = rebuild_customer(invalid);

        assert!(matches!(result, Err(RepositoryError::Corrupted { .. })));
    }

    #[test]
    fn test_rebuild_rejects_negative_reward_points() {
        let mut invalid = row();
        invalid.reward_points = -1;

        let result = rebuild_customer(invalid);

        assert!(matches!(result, Err(RepositoryError::Corrupted { .. })));
    }
}
