//! Integration tests for metafields owned by the shop and by products.

use serde_json::json;
use shopify_rest::rest::resources::common::MetafieldOwner;
use shopify_rest::rest::resources::{Metafield, MetafieldCountParams, MetafieldListParams};
use shopify_rest::rest::{PageOptions, ResourceError, RestResource};
use shopify_rest::{AccessToken, ApiVersion, HostUrl, RestClient, ShopDomain, ShopifyConfig};
use wiremock::matchers::{body_json, method, path, query_param};
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

fn shop_metafield(id: u64, key: &str) -> serde_json::Value {
    json!({
        "id": id,
        "namespace": "inventory",
        "key": key,
        "value": "25",
        "type": "number_integer",
        "owner_resource": "shop",
        "owner_id": 548_380_009
    })
}

// ============================================================================
// Shop Metafields
// ============================================================================

#[tokio::test]
async fn test_shop_metafields_use_top_level_path() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(format!("{API}/metafields.json")))
        .and(query_param("namespace", "inventory"))
        .and(query_param("type", "number_integer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "metafields": [shop_metafield(721_389_482, "warehouse")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = MetafieldListParams {
        namespace: Some("inventory".to_string()),
        metafield_type: Some("number_integer".to_string()),
        ..Default::default()
    };
    let metafields = Metafield::all_for_owner(&client, MetafieldOwner::Shop, Some(params))
        .await
        .unwrap();

    assert_eq!(metafields.len(), 1);
    assert_eq!(metafields[0].owner(), Some(MetafieldOwner::Shop));
    assert_eq!(metafields[0].key.as_deref(), Some("warehouse"));
}

#[tokio::test]
async fn test_plain_all_lists_shop_metafields() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(format!("{API}/metafields.json")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"metafields": []})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let metafields = Metafield::all(&client, None).await.unwrap();
    assert!(metafields.is_empty());
}

#[tokio::test]
async fn test_page_for_owner_keeps_owner_path() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(format!("{API}/products/632910392/metafields.json")))
        .and(query_param("page_info", "abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "metafields": [{"id": 1, "owner_resource": "product", "owner_id": 632_910_392}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let options = PageOptions::new().with_page_info("abc");
    let page = Metafield::page_for_owner(&client, MetafieldOwner::Product(632_910_392), &options)
        .await
        .unwrap();

    assert_eq!(page[0].owner(), Some(MetafieldOwner::Product(632_910_392)));
}

#[tokio::test]
async fn test_count_shop_metafields() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(format!("{API}/metafields/count.json")))
        .and(query_param("namespace", "inventory"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 3})))
        .expect(1)
        .mount(&server)
        .await;

    let params = MetafieldCountParams {
        namespace: Some("inventory".to_string()),
        ..Default::default()
    };
    let count = Metafield::count_for_owner(&client, MetafieldOwner::Shop, Some(params))
        .await
        .unwrap();
    assert_eq!(count, 3);
}

#[tokio::test]
async fn test_create_and_delete_shop_metafield() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(format!("{API}/metafields.json")))
        .and(body_json(json!({
            "metafield": {
                "namespace": "inventory",
                "key": "warehouse",
                "value": "25",
                "type": "number_integer"
            }
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"metafield": shop_metafield(1_069_228_936, "warehouse")})),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path(format!("{API}/metafields/1069228936.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let draft = Metafield {
        namespace: Some("inventory".to_string()),
        key: Some("warehouse".to_string()),
        value: Some("25".to_string()),
        metafield_type: Some("number_integer".to_string()),
        ..Default::default()
    };
    let created = draft.create(&client).await.unwrap();
    assert_eq!(created.id, Some(1_069_228_936));
    assert_eq!(created.owner(), Some(MetafieldOwner::Shop));

    created.delete(&client).await.unwrap();
}

// ============================================================================
// Owner Taken From The Instance
// ============================================================================

#[tokio::test]
async fn test_decoded_product_metafield_updates_under_its_product() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(format!("{API}/products/632910392/metafields/845366454.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "metafield": {
                "id": 845_366_454,
                "namespace": "translation",
                "key": "title_fr",
                "value": "produit",
                "type": "single_line_text_field",
                "owner_resource": "product",
                "owner_id": 632_910_392
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path(format!("{API}/products/632910392/metafields/845366454.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "metafield": {"id": 845_366_454, "value": "nouveau produit"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut metafield = Metafield::find_for_owner(
        &client,
        MetafieldOwner::Product(632_910_392),
        845_366_454,
        None,
    )
    .await
    .unwrap()
    .into_inner();

    metafield.value = Some("nouveau produit".to_string());
    let saved = metafield.save(&client).await.unwrap();
    assert_eq!(saved.value.as_deref(), Some("nouveau produit"));
}

#[tokio::test]
async fn test_missing_metafield_is_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(format!("{API}/metafields/404.json")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"errors": "Not Found"})))
        .mount(&server)
        .await;

    let result = Metafield::find_for_owner(&client, MetafieldOwner::Shop, 404, None).await;

    assert!(matches!(
        result,
        Err(ResourceError::NotFound { resource: "Metafield", ref id }) if id == "404"
    ));
}
