//! Product table schema and the fixed sample catalog.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// DDL for the products table. `IF NOT EXISTS` keeps re-runs idempotent;
/// the CHECK constraints enforce the non-negative price and stock invariants.
pub const CREATE_PRODUCTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id SERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    description TEXT NOT NULL,
    price NUMERIC(10, 2) NOT NULL CHECK (price >= 0),
    image_url TEXT NOT NULL,
    category TEXT NOT NULL,
    stock_quantity INTEGER NOT NULL CHECK (stock_quantity >= 0),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

/// Product record from the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    /// Unique identifier, assigned by the database.
    pub id: i32,
    /// Product name.
    pub name: String,
    /// Product description.
    pub description: String,
    /// Price in the store currency.
    pub price: Decimal,
    /// Image URI.
    pub image_url: String,
    /// Free-text category label.
    pub category: String,
    /// Units in stock.
    pub stock_quantity: i32,
    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// A catalog entry to insert when the table is empty.
///
/// Ids and timestamps are left to the database, so the seed rows carry only
/// the user-visible columns.
#[derive(Debug, Clone)]
pub struct SeedProduct {
    /// Product name.
    pub name: &'static str,
    /// Product description.
    pub description: &'static str,
    /// Price in the store currency.
    pub price: Decimal,
    /// Image URI.
    pub image_url: &'static str,
    /// Free-text category label.
    pub category: &'static str,
    /// Units in stock.
    pub stock_quantity: i32,
}

/// The fixed sample catalog, inserted one row at a time in this order when
/// bootstrap finds the table empty.
#[must_use]
pub fn sample_catalog() -> Vec<SeedProduct> {
    vec![
        SeedProduct {
            name: "Wireless Headphones",
            description: "Over-ear Bluetooth headphones with active noise cancellation",
            price: dec!(89.99),
            image_url: "https://images.example.com/products/wireless-headphones.jpg",
            category: "Electronics",
            stock_quantity: 50,
        },
        SeedProduct {
            name: "Smart Watch",
            description: "Fitness tracker with heart rate monitor and GPS",
            price: dec!(149.99),
            image_url: "https://images.example.com/products/smart-watch.jpg",
            category: "Electronics",
            stock_quantity: 30,
        },
        SeedProduct {
            name: "Canvas Backpack",
            description: "Water-resistant everyday backpack with laptop sleeve",
            price: dec!(59.99),
            image_url: "https://images.example.com/products/canvas-backpack.jpg",
            category: "Accessories",
            stock_quantity: 75,
        },
        SeedProduct {
            name: "Ceramic Mug Set",
            description: "Set of four stoneware mugs, dishwasher safe",
            price: dec!(24.99),
            image_url: "https://images.example.com/products/ceramic-mug-set.jpg",
            category: "Home & Kitchen",
            stock_quantity: 120,
        },
        SeedProduct {
            name: "Yoga Mat",
            description: "Non-slip exercise mat, 6mm thick with carrying strap",
            price: dec!(34.99),
            image_url: "https://images.example.com/products/yoga-mat.jpg",
            category: "Sports",
            stock_quantity: 60,
        },
    ]
}
