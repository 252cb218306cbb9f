//! HTTP client for the storefront API.

use crate::error::Error;
use crate::types::*;
use reqwest::Client;
use std::time::Duration;

#[cfg(test)]
mod tests;

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API (e.g., "http://localhost:8080").
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// HTTP client for the Storefront API.
#[derive(Debug, Clone)]
pub struct StorefrontClient {
    client: Client,
    base_url: String,
}

impl StorefrontClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a new client with default configuration.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::new(ClientConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        })
    }

    // ========================================================================
    // Health
    // ========================================================================

    /// Performs a health check.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn health_check(&self) -> Result<HealthResponse, Error> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    // ========================================================================
    // Products
    // ========================================================================

    /// Lists all products.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn list_products(&self) -> Result<ProductsListResponse, Error> {
        let url = format!("{}/api/v1/products", self.base_url);
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    /// Gets a product by id.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_product(&self, id: i32) -> Result<Product, Error> {
        let url = format!("{}/api/v1/products/{}", self.base_url, id);
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    // ========================================================================
    // Categories
    // ========================================================================

    /// Lists distinct category labels.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn list_categories(&self) -> Result<CategoriesListResponse, Error> {
        let url = format!("{}/api/v1/categories", self.base_url);
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    /// Lists products in a category.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn list_category_products(
        &self,
        category: &str,
    ) -> Result<ProductsListResponse, Error> {
        let url = self.category_products_url(category);
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    /// Builds the category-products URL, percent-encoding the free-text
    /// label so `/`, `?`, `#` and friends stay inside the path segment.
    fn category_products_url(&self, category: &str) -> String {
        format!(
            "{}/api/v1/categories/{}/products",
            self.base_url,
            urlencoding::encode(category)
        )
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();

        if status.is_success() {
            // Decode from text so a malformed body surfaces as a JSON error
            // rather than a generic HTTP failure.
            let text = resp.text().await?;
            Ok(serde_json::from_str(&text)?)
        } else if status.as_u16() == 404 {
            let text = resp.text().await.unwrap_or_default();
            Err(Error::NotFound(text))
        } else if status.as_u16() == 503 {
            let text = resp.text().await.unwrap_or_default();
            Err(Error::ServiceUnavailable(text))
        } else {
            let text = resp.text().await.unwrap_or_default();
            Err(Error::Api {
                status: status.as_u16(),
                message: text,
            })
        }
    }
}
