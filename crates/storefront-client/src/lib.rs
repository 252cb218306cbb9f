//! HTTP client library for the Storefront API.
//!
//! This crate provides a typed HTTP client for the demo storefront backend.
//! It covers the health endpoint and the read-only product/category surface,
//! and surfaces the backend's degraded mode as a dedicated error variant.
//!
//! # Example
//!
//! ```no_run
//! use storefront_client::{ClientConfig, StorefrontClient};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), storefront_client::Error> {
//!     let client = StorefrontClient::new(ClientConfig {
//!         base_url: "http://localhost:8080".into(),
//!         timeout: Duration::from_secs(30),
//!     })?;
//!
//!     // Check health and store readiness
//!     let health = client.health_check().await?;
//!     println!("Status: {}, database: {}", health.status, health.database);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::{ClientConfig, StorefrontClient};
pub use error::Error;
pub use types::*;
