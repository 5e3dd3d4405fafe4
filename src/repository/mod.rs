//! Persistence gateways, one per entity table.
//!
//! Handlers and services only see these traits. `sqlx::PgPool` implements
//! them in [`crate::db`] and [`InMemoryStore`] implements them for tests and
//! local runs without a database.

mod memory;

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{CreateProduct, Order, Product};

pub use memory::InMemoryStore;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a product. The datastore always assigns a fresh `product_id`.
    async fn save(&self, product: CreateProduct) -> AppResult<Product>;

    /// All products, in no particular order. Empty table gives an empty vec.
    async fn find_all(&self) -> AppResult<Vec<Product>>;
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Insert or overwrite the order keyed by `order.order_id`.
    async fn save(&self, order: Order) -> AppResult<Order>;

    async fn find_by_id(&self, order_id: i64) -> AppResult<Option<Order>>;

    async fn find_all(&self) -> AppResult<Vec<Order>>;
}
