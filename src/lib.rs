use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod response;
pub mod services;

use crate::db::Datastore;
use crate::repository::ProductRepository;
use crate::services::ProductService;

/// Shared application state, cheap to clone (everything sits behind Arc).
#[derive(Clone)]
pub struct AppState {
    pub products: ProductService,
    pub datastore: Arc<dyn Datastore>,
}

impl AppState {
    /// Wire every collaborator to one backing store.
    pub fn new<S>(store: Arc<S>) -> Self
    where
        S: ProductRepository + Datastore + 'static,
    {
        Self {
            products: ProductService::new(store.clone()),
            datastore: store,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/health", get(handlers::health))

        // ── Products ────────────────────────────────────────────────────────
        .route(
            "/products",
            get(handlers::products::list_products).post(handlers::products::create_product),
        )

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
