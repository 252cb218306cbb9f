//! Unit tests for client module.

use super::*;

// ============================================================================
// ClientConfig Tests
// ============================================================================

#[test]
fn test_client_config_default() {
    let config = ClientConfig::default();

    assert_eq!(config.base_url, "http://localhost:8080");
    assert_eq!(config.timeout, Duration::from_secs(30));
}

#[test]
fn test_client_config_custom() {
    let config = ClientConfig {
        base_url: "http://api.example.com:9000".to_string(),
        timeout: Duration::from_secs(60),
    };

    assert_eq!(config.base_url, "http://api.example.com:9000");
    assert_eq!(config.timeout, Duration::from_secs(60));
}

// ============================================================================
// StorefrontClient Creation Tests
// ============================================================================

#[test]
fn test_storefront_client_new() {
    let config = ClientConfig::default();
    let client = StorefrontClient::new(config);

    assert!(client.is_ok());
}

#[test]
fn test_storefront_client_with_base_url() {
    let client = StorefrontClient::with_base_url("http://localhost:3000");

    assert!(client.is_ok());
}

#[test]
fn test_storefront_client_base_url_trimmed() {
    let client = StorefrontClient::with_base_url("http://localhost:3000/").unwrap();

    assert_eq!(client.base_url, "http://localhost:3000");
}

// ============================================================================
// URL Building Tests
// ============================================================================

#[test]
fn test_category_url_plain_label() {
    let client = StorefrontClient::with_base_url("http://localhost:8080").unwrap();

    assert_eq!(
        client.category_products_url("Electronics"),
        "http://localhost:8080/api/v1/categories/Electronics/products"
    );
}

#[test]
fn test_category_url_encodes_spaces_and_ampersands() {
    let client = StorefrontClient::with_base_url("http://localhost:8080").unwrap();

    assert_eq!(
        client.category_products_url("Home & Kitchen"),
        "http://localhost:8080/api/v1/categories/Home%20%26%20Kitchen/products"
    );
}

#[test]
fn test_category_url_keeps_reserved_characters_in_the_segment() {
    let client = StorefrontClient::with_base_url("http://localhost:8080").unwrap();

    let url = client.category_products_url("a/b?c#d");

    // None of the raw delimiters may survive into the URL structure.
    assert_eq!(
        url,
        "http://localhost:8080/api/v1/categories/a%2Fb%3Fc%23d/products"
    );
}

#[test]
fn test_storefront_client_clone() {
    let client = StorefrontClient::with_base_url("http://localhost:3000").unwrap();
    let cloned = client.clone();

    assert_eq!(cloned.base_url, client.base_url);
}
