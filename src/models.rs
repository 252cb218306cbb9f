//! Request and response models for the REST API.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::db::Product;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Store readiness: "connected" or "unavailable".
    pub database: String,
}

/// A single product.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    /// Unique identifier.
    pub id: i32,
    /// Product name.
    pub name: String,
    /// Product description.
    pub description: String,
    /// Price in the store currency.
    #[schema(value_type = String, example = "89.99")]
    pub price: Decimal,
    /// Image URI.
    pub image_url: String,
    /// Category label.
    pub category: String,
    /// Units in stock.
    pub stock_quantity: i32,
    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            image_url: product.image_url,
            category: product.category,
            stock_quantity: product.stock_quantity,
            created_at: product.created_at,
        }
    }
}

/// Response listing products.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductsListResponse {
    /// Products, ordered by id.
    pub products: Vec<ProductResponse>,
    /// Number of products returned.
    pub count: usize,
}

/// Response listing category labels.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoriesListResponse {
    /// Distinct category labels, sorted.
    pub categories: Vec<String>,
    /// Number of categories returned.
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn fixture_product() -> Product {
        Product {
            id: 1,
            name: "Wireless Headphones".to_string(),
            description: "Over-ear Bluetooth headphones".to_string(),
            price: dec!(89.99),
            image_url: "https://images.example.com/p/1.jpg".to_string(),
            category: "Electronics".to_string(),
            stock_quantity: 50,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_product_response_from_row() {
        let response = ProductResponse::from(fixture_product());
        assert_eq!(response.id, 1);
        assert_eq!(response.name, "Wireless Headphones");
        assert_eq!(response.price, dec!(89.99));
        assert_eq!(response.category, "Electronics");
        assert_eq!(response.stock_quantity, 50);
    }

    #[test]
    fn test_product_response_serializes_decimal_price() {
        let response = ProductResponse::from(fixture_product());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["price"], serde_json::json!("89.99"));
    }

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            database: "unavailable".to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"status\":\"healthy\""));
        assert!(json.contains("\"database\":\"unavailable\""));
    }

    #[test]
    fn test_product_response_openapi_schema_covers_all_fields() {
        use utoipa::PartialSchema;

        let schema = ProductResponse::schema();
        let json = serde_json::to_value(&schema).unwrap();

        let properties = json["properties"].as_object().unwrap();
        for field in [
            "id",
            "name",
            "description",
            "price",
            "image_url",
            "category",
            "stock_quantity",
            "created_at",
        ] {
            assert!(properties.contains_key(field), "missing schema for {}", field);
        }
    }

    #[test]
    fn test_products_list_response_count() {
        let response = ProductsListResponse {
            products: vec![ProductResponse::from(fixture_product())],
            count: 1,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["count"], 1);
        assert_eq!(json["products"].as_array().unwrap().len(), 1);
    }
}
