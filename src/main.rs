use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use order_domain::config::Config;
use order_domain::db::{
    self, CustomerRepository, OrderRepository, PostgresCustomerRepository,
    PostgresOrderRepository, PostgresProductRepository, ProductRepository,
};
use order_domain::domain::customer::{
    Address, Customer, CustomerAddressChangedEvent, CustomerAddressChangedLogHandler,
    CustomerCreatedEvent, CustomerCreatedFirstLogHandler, CustomerCreatedSecondLogHandler,
};
use order_domain::domain::order::{Order, OrderItem, OrderPlacedEvent};
use order_domain::domain::product::Product;
use order_domain::events::EventDispatcher;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging with environment-based filtering
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,order_domain=debug")),
        )
        .init();

    tracing::info!("🚀 Starting order management demo");

    // === 1. Connect to Postgres and apply migrations ===
    let config = Config::from_env();
    let pool = db::connect(&config)
        .await
        .context("connecting to Postgres")?;
    db::run_migrations(&pool).await.context("applying migrations")?;

    // === 2. Wire the event dispatcher ===
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(
        "CustomerCreatedEvent",
        Arc::new(CustomerCreatedFirstLogHandler),
    );
    dispatcher.register(
        "CustomerCreatedEvent",
        Arc::new(CustomerCreatedSecondLogHandler),
    );
    dispatcher.register(
        "CustomerAddressChangedEvent",
        Arc::new(CustomerAddressChangedLogHandler),
    );

    // === 3. Create a customer and notify its events ===
    let customer_repository = PostgresCustomerRepository::new(pool.clone());
    let mut customer = Customer::new(uuid::Uuid::new_v4().to_string(), "John Doe")?;
    customer_repository.create(&customer).await?;
    dispatcher.notify(&CustomerCreatedEvent::new(&customer))?;

    let address = Address::new("Main Street", 123, "13330-250", "Springfield")?;
    customer.change_address(address.clone());
    customer.activate()?;
    customer_repository.update(&customer).await?;
    dispatcher.notify(&CustomerAddressChangedEvent::new(&customer, &address))?;
    tracing::info!("✅ Customer ready: {}", customer.id);

    // === 4. Register a product ===
    let product_repository = PostgresProductRepository::new(pool.clone());
    let product = Product::new(uuid::Uuid::new_v4().to_string(), "Product 1", 10.0)?;
    product_repository.create(&product).await?;
    tracing::info!("✅ Product ready: {}", product.id);

    // === 5. Place an order ===
    let order_repository = PostgresOrderRepository::new(pool.clone());
    let item = OrderItem::new(
        uuid::Uuid::new_v4().to_string(),
        product.name.clone(),
        product.price,
        product.id.clone(),
        2,
    );
    let mut order = Order::new(
        uuid::Uuid::new_v4().to_string(),
        customer.id.clone(),
        vec![item],
    )?;
    order_repository.create(&order).await?;
    dispatcher.notify(&OrderPlacedEvent::new(&order))?;
    tracing::info!("✅ Order created: {} (total {})", order.id, order.total());

    // === 6. Replace the item set and update ===
    order.add_item(OrderItem::new(
        uuid::Uuid::new_v4().to_string(),
        product.name.clone(),
        product.price,
        product.id.clone(),
        3,
    ))?;
    order_repository.update(&order).await?;

    let reloaded = order_repository.find(&order.id).await?;
    tracing::info!(
        "✅ Order updated: {} item(s), total {}",
        reloaded.items.len(),
        reloaded.total()
    );

    // === 7. List everything ===
    let orders = order_repository.find_all().await?;
    tracing::info!("🎉 Demo complete: {} order(s) in storage", orders.len());

    Ok(())
}
