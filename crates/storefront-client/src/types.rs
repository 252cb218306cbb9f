//! Response types for the Storefront API.
//!
//! Prices are carried as strings on the wire (the backend serializes decimal
//! values that way), so this crate keeps them as strings rather than pulling
//! in a decimal dependency of its own.

use serde::{Deserialize, Serialize};


/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Store readiness: "connected" or "unavailable".
    pub database: String,
}

impl HealthResponse {
    /// Whether the backend reports its store as usable.
    #[must_use]
    pub fn is_database_connected(&self) -> bool {
        self.database == "connected"
    }
}

/// A single product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier.
    pub id: i32,
    /// Product name.
    pub name: String,
    /// Product description.
    pub description: String,
    /// Price as a decimal string, e.g. "89.99".
    pub price: String,
    /// Image URI.
    pub image_url: String,
    /// Category label.
    pub category: String,
    /// Units in stock.
    pub stock_quantity: i32,
    /// Record creation timestamp (RFC 3339).
    pub created_at: String,
}

/// Response listing products.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductsListResponse {
    /// Products, ordered by id.
    pub products: Vec<Product>,
    /// Number of products returned.
    pub count: usize,
}

/// Response listing category labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesListResponse {
    /// Distinct category labels, sorted.
    pub categories: Vec<String>,
    /// Number of categories returned.
    pub count: usize,
}

/// Error response body returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
    /// Error code.
    pub code: String,
}
