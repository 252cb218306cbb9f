//! Route configuration.

use crate::api::handlers;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use std::sync::Arc;

/// Creates the API router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Products
        .route("/api/v1/products", get(handlers::list_products))
        .route("/api/v1/products/{id}", get(handlers::get_product))
        // Categories
        .route("/api/v1/categories", get(handlers::list_categories))
        .route(
            "/api/v1/categories/{category}/products",
            get(handlers::list_category_products),
        )
        .with_state(state)
}
