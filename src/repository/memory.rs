use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::db::Datastore;
use crate::error::AppResult;
use crate::models::{CreateProduct, Order, Product};
use crate::repository::{OrderRepository, ProductRepository};

/// Process-local store with the same semantics as the Postgres tables:
/// product ids come from an incrementing sequence, orders are keyed by the
/// caller's id and overwritten on save.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    products: RwLock<ProductTable>,
    orders: RwLock<BTreeMap<i64, Order>>,
}

#[derive(Debug, Default)]
struct ProductTable {
    last_id: i64,
    rows: Vec<Product>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryStore {
    async fn save(&self, product: CreateProduct) -> AppResult<Product> {
        let mut table = self.products.write().await;
        table.last_id += 1;
        let saved = Product {
            product_id: table.last_id,
            product_name: product.product_name,
            product_description: product.product_description,
        };
        table.rows.push(saved.clone());
        Ok(saved)
    }

    async fn find_all(&self) -> AppResult<Vec<Product>> {
        Ok(self.products.read().await.rows.clone())
    }
}

#[async_trait]
impl OrderRepository for InMemoryStore {
    async fn save(&self, order: Order) -> AppResult<Order> {
        self.orders.write().await.insert(order.order_id, order.clone());
        Ok(order)
    }

    async fn find_by_id(&self, order_id: i64) -> AppResult<Option<Order>> {
        Ok(self.orders.read().await.get(&order_id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Order>> {
        Ok(self.orders.read().await.values().cloned().collect())
    }
}

#[async_trait]
impl Datastore for InMemoryStore {
    async fn check_connection(&self) -> AppResult<()> {
        Ok(())
    }
}
