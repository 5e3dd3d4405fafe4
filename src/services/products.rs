use std::sync::Arc;

use tracing::debug;

use crate::error::AppResult;
use crate::models::{CreateProduct, Product};
use crate::repository::ProductRepository;

/// Pass-through over the product repository. Adds no validation: a product
/// with an empty or missing name is stored as-is.
#[derive(Clone)]
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn save_product(&self, product: CreateProduct) -> AppResult<Product> {
        debug!(name = ?product.product_name, "Saving product");
        self.repository.save(product).await
    }

    pub async fn get_products(&self) -> AppResult<Vec<Product>> {
        self.repository.find_all().await
    }
}
