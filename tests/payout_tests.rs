//! Integration tests for Shopify Payments payouts and balance transactions.

use chrono::NaiveDate;
use serde_json::json;
use shopify_rest::rest::resources::{
    Payout, PayoutListParams, PayoutStatus, PayoutTransaction, PayoutTransactionListParams,
};
use shopify_rest::rest::{ResourceError, RestResource};
use shopify_rest::{AccessToken, ApiVersion, HostUrl, RestClient, ShopDomain, ShopifyConfig};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PAYOUTS_PATH: &str = "/admin/api/2025-10/shopify_payments/payouts.json";
const TRANSACTIONS_PATH: &str = "/admin/api/2025-10/shopify_payments/balance/transactions.json";

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

fn transaction(id: u64, payout_id: u64) -> serde_json::Value {
    json!({
        "id": id,
        "type": "charge",
        "test": false,
        "payout_id": payout_id,
        "payout_status": "paid",
        "currency": "USD",
        "amount": "102.00",
        "fee": "2.13",
        "net": "99.87",
        "source_id": 1_058_896_025,
        "source_type": "charge",
        "source_order_id": 217_130_470,
        "source_order_transaction_id": 1_052_478_436,
        "processed_at": "2024-01-02T15:09:51-05:00"
    })
}

// ============================================================================
// Payouts
// ============================================================================

#[tokio::test]
async fn test_find_payout() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/shopify_payments/payouts/623721858.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "payout": {
                "id": 623_721_858,
                "status": "paid",
                "date": "2012-11-12",
                "currency": "USD",
                "amount": "41.90",
                "summary": {
                    "adjustments_fee_amount": "0.12",
                    "adjustments_gross_amount": "2.13",
                    "charges_fee_amount": "1.32",
                    "charges_gross_amount": "44.52",
                    "refunds_fee_amount": "-0.23",
                    "refunds_gross_amount": "-3.54",
                    "reserved_funds_fee_amount": "0.00",
                    "reserved_funds_gross_amount": "0.00",
                    "retried_payouts_fee_amount": "0.00",
                    "retried_payouts_gross_amount": "0.00"
                }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let payout = Payout::find(&client, 623_721_858, None).await.unwrap();

    assert_eq!(payout.status, Some(PayoutStatus::Paid));
    assert_eq!(payout.date, NaiveDate::from_ymd_opt(2012, 11, 12));
    assert_eq!(payout.amount.as_deref(), Some("41.90"));
    assert_eq!(
        payout.summary.as_ref().unwrap().charges_gross_amount.as_deref(),
        Some("44.52")
    );
}

#[tokio::test]
async fn test_list_payouts_by_status_and_date() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(PAYOUTS_PATH))
        .and(query_param("status", "in_transit"))
        .and(query_param("date_min", "2024-01-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "payouts": [
                {"id": 1, "status": "in_transit", "date": "2024-01-05", "currency": "USD", "amount": "10.00"},
                {"id": 2, "status": "in_transit", "date": "2024-01-06", "currency": "USD", "amount": "20.00"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = PayoutListParams {
        status: Some(PayoutStatus::InTransit),
        date_min: NaiveDate::from_ymd_opt(2024, 1, 1),
        ..Default::default()
    };
    let payouts = Payout::all(&client, Some(params)).await.unwrap();

    assert_eq!(payouts.len(), 2);
    assert!(payouts
        .iter()
        .all(|p| p.status == Some(PayoutStatus::InTransit)));
    assert!(!payouts.has_next_page());
}

#[tokio::test]
async fn test_payout_writes_fail_without_request() {
    let (server, client) = setup().await;
    let payout = Payout {
        id: Some(623_721_858),
        ..Default::default()
    };

    assert!(matches!(
        payout.save(&client).await,
        Err(ResourceError::PathResolutionFailed {
            resource: "Payout",
            operation: "update"
        })
    ));
    assert!(matches!(
        payout.delete(&client).await,
        Err(ResourceError::PathResolutionFailed { .. })
    ));
    assert!(matches!(
        Payout::count(&client, None).await,
        Err(ResourceError::PathResolutionFailed {
            operation: "count",
            ..
        })
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}

// ============================================================================
// Balance Transactions
// ============================================================================

#[tokio::test]
async fn test_list_transactions_for_payout_filter() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(TRANSACTIONS_PATH))
        .and(query_param("payout_id", "623721858"))
        .and(query_param("test", "false"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"transactions": [transaction(699_519_475, 623_721_858)]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let params = PayoutTransactionListParams {
        payout_id: Some(623_721_858),
        test: Some(false),
        ..Default::default()
    };
    let transactions = PayoutTransaction::all(&client, Some(params)).await.unwrap();

    assert_eq!(transactions.len(), 1);
    let first = &transactions[0];
    assert_eq!(first.transaction_type.as_deref(), Some("charge"));
    assert_eq!(first.payout_status, Some(PayoutStatus::Paid));
    assert_eq!(first.net.as_deref(), Some("99.87"));
    assert!(first.processed_at.is_some());
}

#[tokio::test]
async fn test_transactions_for_payout_follows_every_page() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(TRANSACTIONS_PATH))
        .and(query_param("page_info", "second"))
        .and(query_param("payout_id", "623721858"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"transactions": [transaction(3, 623_721_858)]}))
                .insert_header(
                    "Link",
                    format!(
                        "<{}{TRANSACTIONS_PATH}?payout_id=623721858&page_info=first>; rel=\"previous\"",
                        server.uri()
                    )
                    .as_str(),
                ),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(TRANSACTIONS_PATH))
        .and(query_param("payout_id", "623721858"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({
                    "transactions": [transaction(1, 623_721_858), transaction(2, 623_721_858)]
                }))
                .insert_header(
                    "Link",
                    format!(
                        "<{}{TRANSACTIONS_PATH}?payout_id=623721858&page_info=second>; rel=\"next\"",
                        server.uri()
                    )
                    .as_str(),
                ),
        )
        .expect(1)
        .mount(&server)
        .await;

    let transactions = Payout::transactions_for_payout(&client, 623_721_858)
        .await
        .unwrap();

    let ids: Vec<u64> = transactions.iter().filter_map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert!(transactions
        .iter()
        .all(|t| t.payout_id == Some(623_721_858)));
}

#[tokio::test]
async fn test_transactions_for_unknown_payout_is_empty() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(TRANSACTIONS_PATH))
        .and(query_param("payout_id", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"transactions": []})))
        .expect(1)
        .mount(&server)
        .await;

    let transactions = Payout::transactions_for_payout(&client, 1).await.unwrap();
    assert!(transactions.is_empty());
}
