//! API request handlers.
//!
//! Every data handler borrows the pool through `state.store.pool()`, which
//! fails fast with a 503 while the service runs degraded. A query error on
//! one request maps to a 500 for that caller only; the readiness decision
//! made at startup is never revisited here.

use crate::db::Product;
use crate::error::ApiError;
use crate::models::{
    CategoriesListResponse, HealthResponse, ProductResponse, ProductsListResponse,
};
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use std::sync::Arc;


// ============================================================================
// Health Check
// ============================================================================

/// Health check endpoint.
///
/// Always answers 200 so the HTTP surface stays reachable for monitoring
/// even when the store never came up; readiness is visible in the payload.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is reachable", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: state.store.outcome().as_str().to_string(),
    })
}

// ============================================================================
// Products
// ============================================================================

/// List all products.
#[utoipa::path(
    get,
    path = "/api/v1/products",
    responses(
        (status = 200, description = "All products ordered by id", body = ProductsListResponse),
        (status = 503, description = "Store unavailable")
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ProductsListResponse>, ApiError> {
    let pool = state.store.pool()?;

    let rows: Vec<Product> = sqlx::query_as("SELECT * FROM products ORDER BY id")
        .fetch_all(pool)
        .await
        .map_err(|e| ApiError::Database(e.to_string()))?;

    let products: Vec<ProductResponse> = rows.into_iter().map(ProductResponse::from).collect();
    let count = products.len();

    Ok(Json(ProductsListResponse { products, count }))
}

/// Get a product by id.
#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    params(
        ("id" = i32, Path, description = "Product identifier")
    ),
    responses(
        (status = 200, description = "Product details", body = ProductResponse),
        (status = 404, description = "Product not found"),
        (status = 503, description = "Store unavailable")
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ProductResponse>, ApiError> {
    let pool = state.store.pool()?;

    let row: Option<Product> = sqlx::query_as("SELECT * FROM products WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| ApiError::Database(e.to_string()))?;

    match row {
        Some(product) => Ok(Json(ProductResponse::from(product))),
        None => Err(ApiError::ProductNotFound(id)),
    }
}

// ============================================================================
// Categories
// ============================================================================

/// List distinct category labels.
#[utoipa::path(
    get,
    path = "/api/v1/categories",
    responses(
        (status = 200, description = "Distinct category labels, sorted", body = CategoriesListResponse),
        (status = 503, description = "Store unavailable")
    ),
    tag = "Categories"
)]
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoriesListResponse>, ApiError> {
    let pool = state.store.pool()?;

    let rows: Vec<(String,)> =
        sqlx::query_as("SELECT DISTINCT category FROM products ORDER BY category")
            .fetch_all(pool)
            .await
            .map_err(|e| ApiError::Database(e.to_string()))?;

    let categories: Vec<String> = rows.into_iter().map(|(category,)| category).collect();
    let count = categories.len();

    Ok(Json(CategoriesListResponse { categories, count }))
}

/// List products in a category.
#[utoipa::path(
    get,
    path = "/api/v1/categories/{category}/products",
    params(
        ("category" = String, Path, description = "Category label")
    ),
    responses(
        (status = 200, description = "Products in the category", body = ProductsListResponse),
        (status = 404, description = "Category not found"),
        (status = 503, description = "Store unavailable")
    ),
    tag = "Categories"
)]
pub async fn list_category_products(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
) -> Result<Json<ProductsListResponse>, ApiError> {
    let pool = state.store.pool()?;

    let rows: Vec<Product> =
        sqlx::query_as("SELECT * FROM products WHERE category = $1 ORDER BY id")
            .bind(&category)
            .fetch_all(pool)
            .await
            .map_err(|e| ApiError::Database(e.to_string()))?;

    // Categories exist only on products, so an empty result means the label
    // is unknown rather than an empty-but-known category.
    if rows.is_empty() {
        return Err(ApiError::CategoryNotFound(category));
    }

    let products: Vec<ProductResponse> = rows.into_iter().map(ProductResponse::from).collect();
    let count = products.len();

    Ok(Json(ProductsListResponse { products, count }))
}
