//! Integration tests for configuration and the REST client.
//!
//! These tests verify client construction, version selection, the headers
//! sent with every request, and path normalization.

use serde_json::json;
use shopify_rest::clients::RestError;
use shopify_rest::{
    AccessToken, ApiVersion, ConfigError, HostUrl, RestClient, ShopDomain, ShopifyConfig,
};
use wiremock::matchers::{header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(host: Option<&str>) -> ShopifyConfig {
    let mut builder = ShopifyConfig::builder()
        .shop(ShopDomain::new("test-shop").unwrap())
        .access_token(AccessToken::new("shpat_test").unwrap());
    if let Some(host) = host {
        builder = builder.api_host(HostUrl::new(host).unwrap());
    }
    builder.build().unwrap()
}

// ============================================================================
// Configuration Tests
// ============================================================================

#[test]
fn test_config_requires_shop_and_token() {
    let missing_shop = ShopifyConfig::builder()
        .access_token(AccessToken::new("shpat_test").unwrap())
        .build();
    assert!(matches!(
        missing_shop,
        Err(ConfigError::MissingRequiredField { field: "shop" })
    ));

    let missing_token = ShopifyConfig::builder()
        .shop(ShopDomain::new("test-shop").unwrap())
        .build();
    assert!(matches!(
        missing_token,
        Err(ConfigError::MissingRequiredField {
            field: "access_token"
        })
    ));
}

#[test]
fn test_config_base_url() {
    assert_eq!(
        config_for(None).base_url(),
        "https://test-shop.myshopify.com"
    );
    assert_eq!(
        config_for(Some("http://localhost:4010/")).base_url(),
        "http://localhost:4010"
    );
}

#[test]
fn test_invalid_config_values_are_rejected() {
    assert!(AccessToken::new("").is_err());
    assert!(ShopDomain::new("").is_err());
    assert!(HostUrl::new("localhost:4010").is_err());
}

// ============================================================================
// RestClient Construction Tests
// ============================================================================

#[test]
fn test_rest_client_creates_with_default_version() {
    let client = RestClient::new(&config_for(None)).unwrap();

    assert_eq!(client.api_version(), &ApiVersion::latest());
}

#[test]
fn test_rest_client_with_version_override() {
    let client = RestClient::with_version(&config_for(None), ApiVersion::V2025_07).unwrap();

    assert_eq!(client.api_version(), &ApiVersion::V2025_07);
    assert_eq!(client.http_client().base_path(), "/admin/api/2025-07");
}

#[test]
fn test_rest_client_is_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
}

#[test]
fn test_multiple_clients_for_different_shops() {
    let first = ShopifyConfig::builder()
        .shop(ShopDomain::new("shop-one").unwrap())
        .access_token(AccessToken::new("token-1").unwrap())
        .build()
        .unwrap();
    let second = ShopifyConfig::builder()
        .shop(ShopDomain::new("shop-two").unwrap())
        .access_token(AccessToken::new("token-2").unwrap())
        .build()
        .unwrap();

    let first = RestClient::new(&first).unwrap();
    let second = RestClient::new(&second).unwrap();

    assert_eq!(
        first.http_client().base_uri(),
        "https://shop-one.myshopify.com"
    );
    assert_eq!(
        second.http_client().base_uri(),
        "https://shop-two.myshopify.com"
    );
}

// ============================================================================
// Request Tests
// ============================================================================

#[tokio::test]
async fn test_requests_carry_token_and_user_agent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/shop.json"))
        .and(header("X-Shopify-Access-Token", "shpat_test"))
        .and(header("Accept", "application/json"))
        .and(header_exists("User-Agent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"shop": {"id": 1}})))
        .expect(1)
        .mount(&server)
        .await;

    let client =
        RestClient::with_version(&config_for(Some(&server.uri())), ApiVersion::V2025_10).unwrap();
    let response = client.get("shop", None).await.unwrap();

    assert_eq!(response.code, 200);
    assert_eq!(response.body["shop"]["id"], 1);
}

#[tokio::test]
async fn test_paths_are_normalized() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/products/42.json"))
        .and(query_param("fields", "id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"product": {"id": 42}})))
        .expect(2)
        .mount(&server)
        .await;

    let client =
        RestClient::with_version(&config_for(Some(&server.uri())), ApiVersion::V2025_10).unwrap();
    let query = Some([("fields".to_string(), "id".to_string())].into_iter().collect());

    client.get("/products/42", query.clone()).await.unwrap();
    client.get("products/42.json", query).await.unwrap();
}

#[tokio::test]
async fn test_non_2xx_is_returned_as_response() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/admin/api/2025-10/products/1.json"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"errors": "Not Found"}))
                .insert_header("X-Request-Id", "req-404")
                .insert_header("X-Shopify-Shop-Api-Call-Limit", "39/40"),
        )
        .mount(&server)
        .await;

    let client =
        RestClient::with_version(&config_for(Some(&server.uri())), ApiVersion::V2025_10).unwrap();
    let response = client.delete("products/1", None).await.unwrap();

    assert_eq!(response.code, 404);
    assert!(!response.is_ok());
    assert_eq!(response.request_id(), Some("req-404"));
    assert_eq!(response.api_call_limit.unwrap().remaining(), 1);
}

#[tokio::test]
async fn test_empty_path_is_rejected_before_sending() {
    let server = MockServer::start().await;
    let client = RestClient::new(&config_for(Some(&server.uri()))).unwrap();

    let result = client.get("/.json", None).await;

    assert!(matches!(result, Err(RestError::InvalidPath { .. })));
    assert!(server.received_requests().await.unwrap().is_empty());
}
