use serde::{Deserialize, Serialize};

/// Catalog product. `product_id` is assigned by the datastore on insert and
/// never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: i64,
    pub product_name: Option<String>,
    pub product_description: Option<String>,
}

// ── Request payloads ─────────────────────────────────────────────────────────

/// Body of `POST /products`. A `productId` sent by the client is not part of
/// this type and is dropped during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    pub product_name: Option<String>,
    pub product_description: Option<String>,
}
