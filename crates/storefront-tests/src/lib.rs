//! Integration tests for the Storefront API.
//!
//! These tests require the API server to be running against a reachable
//! database. Configure the server URL via the `API_BASE_URL` environment
//! variable (default: `http://localhost:8080`).

use std::time::Duration;
use storefront_client::{ClientConfig, StorefrontClient};

/// Gets the API base URL from environment or uses default.
#[must_use]
pub fn get_api_url() -> String {
    std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string())
}

/// Creates a test client configured for the API.
///
/// # Errors
/// Returns error if client creation fails.
pub fn create_test_client() -> Result<StorefrontClient, storefront_client::Error> {
    StorefrontClient::new(ClientConfig {
        base_url: get_api_url(),
        timeout: Duration::from_secs(10),
    })
}
