use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::config::Config;
use crate::error::AppResult;
use crate::models::*;
use crate::repository::{OrderRepository, ProductRepository};

/// Connection source probed by `GET /health`.
#[async_trait]
pub trait Datastore: Send + Sync {
    /// Acquire (and immediately release) one connection.
    async fn check_connection(&self) -> AppResult<()>;
}

// ── Pool ──────────────────────────────────────────────────────────────────────

pub async fn connect(config: &Config) -> anyhow::Result<PgPool> {
    info!(
        max_connections = config.max_connections,
        acquire_timeout_s = config.acquire_timeout.as_secs(),
        "Connecting to PostgreSQL..."
    );
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.database_url)
        .await?;
    info!("Database connection pool established.");
    Ok(pool)
}

pub async fn run_migrations(pool: &PgPool) -> anyhow::Result<()> {
    info!("Running migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Migrations complete.");
    Ok(())
}

// ── Products ──────────────────────────────────────────────────────────────────

pub async fn fetch_all_products(pool: &PgPool) -> AppResult<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT product_id, product_name, product_description FROM products",
    )
    .fetch_all(pool)
    .await?;

    Ok(products)
}

pub async fn insert_product(pool: &PgPool, payload: &CreateProduct) -> AppResult<Product> {
    let product = sqlx::query_as::<_, Product>(
        r#"
        INSERT INTO products (product_name, product_description)
        VALUES ($1, $2)
        RETURNING product_id, product_name, product_description
        "#,
    )
    .bind(&payload.product_name)
    .bind(&payload.product_description)
    .fetch_one(pool)
    .await?;

    Ok(product)
}

// ── Orders ────────────────────────────────────────────────────────────────────

/// Insert, or overwrite every column of an existing row with the same id.
pub async fn upsert_order(pool: &PgPool, order: &Order) -> AppResult<Order> {
    let order = sqlx::query_as::<_, Order>(
        r#"
        INSERT INTO orders (order_id, product_id, quantity, total_price)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (order_id) DO UPDATE
        SET product_id  = EXCLUDED.product_id,
            quantity    = EXCLUDED.quantity,
            total_price = EXCLUDED.total_price
        RETURNING order_id, product_id, quantity, total_price
        "#,
    )
    .bind(order.order_id)
    .bind(order.product_id)
    .bind(order.quantity)
    .bind(order.total_price)
    .fetch_one(pool)
    .await?;

    Ok(order)
}

pub async fn fetch_order_by_id(pool: &PgPool, order_id: i64) -> AppResult<Option<Order>> {
    let order = sqlx::query_as::<_, Order>(
        "SELECT order_id, product_id, quantity, total_price FROM orders WHERE order_id = $1",
    )
    .bind(order_id)
    .fetch_optional(pool)
    .await?;

    Ok(order)
}

pub async fn fetch_all_orders(pool: &PgPool) -> AppResult<Vec<Order>> {
    let orders = sqlx::query_as::<_, Order>(
        "SELECT order_id, product_id, quantity, total_price FROM orders",
    )
    .fetch_all(pool)
    .await?;

    Ok(orders)
}

// ── Trait impls ───────────────────────────────────────────────────────────────

#[async_trait]
impl ProductRepository for PgPool {
    async fn save(&self, product: CreateProduct) -> AppResult<Product> {
        insert_product(self, &product).await
    }

    async fn find_all(&self) -> AppResult<Vec<Product>> {
        fetch_all_products(self).await
    }
}

#[async_trait]
impl OrderRepository for PgPool {
    async fn save(&self, order: Order) -> AppResult<Order> {
        upsert_order(self, &order).await
    }

    async fn find_by_id(&self, order_id: i64) -> AppResult<Option<Order>> {
        fetch_order_by_id(self, order_id).await
    }

    async fn find_all(&self) -> AppResult<Vec<Order>> {
        fetch_all_orders(self).await
    }
}

#[async_trait]
impl Datastore for PgPool {
    async fn check_connection(&self) -> AppResult<()> {
        self.acquire().await?;
        Ok(())
    }
}
