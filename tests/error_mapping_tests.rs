//! Integration tests for mapping HTTP failures onto `ResourceError`.

use serde_json::json;
use shopify_rest::rest::resources::{Payout, Product, ProductsResource};
use shopify_rest::rest::{list_with_pagination, PageOptions, ResourceError, RestResource};
use shopify_rest::{
    AccessToken, ApiVersion, HostUrl, HttpError, RestClient, RestError, ShopDomain, ShopifyConfig,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API: &str = "/admin/api/2025-10";

async fn setup() -> (MockServer, RestClient) {
    let server = MockServer::start().await;
    let config = ShopifyConfig::builder()
        .shop(ShopDomain::new("test-shop").unwrap())
        .access_token(AccessToken::new("shpat_test").unwrap())
        .api_version(ApiVersion::V2025_10)
        .api_host(HostUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    let client = RestClient::new(&config).unwrap();
    (server, client)
}

// ============================================================================
// Status Codes
// ============================================================================

#[tokio::test]
async fn test_404_is_not_found_with_id() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(format!("{API}/products/999.json")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"errors": "Not Found"})))
        .mount(&server)
        .await;

    let error = Product::find(&client, 999, None).await.unwrap_err();

    assert!(matches!(
        &error,
        ResourceError::NotFound { resource: "Product", id } if id == "999"
    ));
    assert_eq!(error.status(), Some(404));
}

#[tokio::test]
async fn test_404_on_list_has_unknown_id() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(format!("{API}/shopify_payments/payouts.json")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"errors": "Not Found"})))
        .mount(&server)
        .await;

    let error = Payout::all(&client, None).await.unwrap_err();

    assert!(matches!(
        &error,
        ResourceError::NotFound { resource: "Payout", id } if id == "unknown"
    ));
}

#[tokio::test]
async fn test_422_is_validation_failed() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(format!("{API}/products.json")))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(json!({"errors": {"title": ["can't be blank"]}}))
                .insert_header("X-Request-Id", "req-422"),
        )
        .mount(&server)
        .await;

    let error = Product::default().create(&client).await.unwrap_err();

    match &error {
        ResourceError::ValidationFailed { errors, request_id } => {
            assert_eq!(errors.get("title"), Some(&vec!["can't be blank".to_string()]));
            assert_eq!(request_id.as_deref(), Some("req-422"));
        }
        other => panic!("expected ValidationFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_500_is_api_error_with_request_id() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(format!("{API}/products/count.json")))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({"errors": "Internal Server Error"}))
                .insert_header("X-Request-Id", "req-500"),
        )
        .mount(&server)
        .await;

    let error = Product::count(&client, None).await.unwrap_err();

    match &error {
        ResourceError::Api(api) => {
            assert_eq!(api.code, 500);
            assert_eq!(api.message, "Internal Server Error");
            assert_eq!(api.request_id.as_deref(), Some("req-500"));
        }
        other => panic!("expected Api, got {other:?}"),
    }
    assert_eq!(error.request_id(), Some("req-500"));
}

#[tokio::test]
async fn test_429_is_returned_not_retried() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(format!("{API}/products.json")))
        .respond_with(
            ResponseTemplate::new(429)
                .set_body_json(json!({"errors": "Exceeded 2 calls per second for api client."}))
                .insert_header("Retry-After", "1.0"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let error = Product::all(&client, None).await.unwrap_err();

    assert_eq!(error.status(), Some(429));
}

#[tokio::test]
async fn test_non_json_error_body_is_kept_as_message() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(format!("{API}/products.json")))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let error = Product::all(&client, None).await.unwrap_err();

    match error {
        ResourceError::Api(api) => {
            assert_eq!(api.code, 502);
            assert_eq!(api.message, "Bad Gateway");
        }
        other => panic!("expected Api, got {other:?}"),
    }
}

// ============================================================================
// Bodies And Transport
// ============================================================================

#[tokio::test]
async fn test_count_without_number_is_decode_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(format!("{API}/products/count.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": "many"})))
        .mount(&server)
        .await;

    assert!(matches!(
        Product::count(&client, None).await,
        Err(ResourceError::Decode {
            resource: "Product",
            ..
        })
    ));
}

#[tokio::test]
async fn test_find_without_wrapping_key_is_decode_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(format!("{API}/products/1.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .mount(&server)
        .await;

    let error = Product::find(&client, 1, None).await.unwrap_err();

    assert!(matches!(error, ResourceError::Decode { .. }));
    assert_eq!(error.status(), None);
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let config = ShopifyConfig::builder()
        .shop(ShopDomain::new("test-shop").unwrap())
        .access_token(AccessToken::new("shpat_test").unwrap())
        .api_host(HostUrl::new(uri).unwrap())
        .build()
        .unwrap();
    let client = RestClient::new(&config).unwrap();

    let result =
        list_with_pagination::<ProductsResource, PageOptions>(&client, "products", None).await;

    assert!(matches!(
        result,
        Err(ResourceError::Rest(RestError::Http(HttpError::Network(_))))
    ));
}
