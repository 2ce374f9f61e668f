//! Shopify Payments balance transactions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::{ListResource, ReadOnlyResource, ResourceOperation, ResourcePath, RestResource};

use super::payout::PayoutStatus;

/// A movement of money in the Shopify Payments balance.
///
/// `amount`, `fee` and `net` are decimal strings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PayoutTransaction {
    pub id: Option<u64>,

    /// `charge`, `refund`, `dispute`, `reserve`, `adjustment`, `payout`, ...
    #[serde(rename = "type")]
    pub transaction_type: Option<String>,

    pub test: Option<bool>,

    /// The payout the transaction was paid out with, if any yet.
    pub payout_id: Option<u64>,

    pub payout_status: Option<PayoutStatus>,

    pub currency: Option<String>,

    pub amount: Option<String>,

    pub fee: Option<String>,

    pub net: Option<String>,

    pub source_id: Option<u64>,

    pub source_type: Option<String>,

    pub source_order_id: Option<u64>,

    pub source_order_transaction_id: Option<u64>,

    pub processed_at: Option<DateTime<Utc>>,
}

/// The body of a balance transaction list response.
#[derive(Debug, Clone, Deserialize)]
pub struct PayoutTransactionsResource {
    pub transactions: Vec<PayoutTransaction>,
}

impl ListResource for PayoutTransactionsResource {
    type Item = PayoutTransaction;
    const NAME: &'static str = "PayoutTransaction";

    fn into_items(self) -> Vec<PayoutTransaction> {
        self.transactions
    }
}

impl RestResource for PayoutTransaction {
    type Id = u64;
    type FindParams = ();
    type AllParams = PayoutTransactionListParams;
    type CountParams = ();
    type List = PayoutTransactionsResource;

    const NAME: &'static str = "PayoutTransaction";

    const PATHS: &'static [ResourcePath] = &[ResourcePath::new(
        ResourceOperation::All,
        &[],
        "shopify_payments/balance/transactions",
    )];

    fn get_id(&self) -> Option<u64> {
        self.id
    }

    fn resource_key() -> String {
        "transaction".to_string()
    }
}

impl ReadOnlyResource for PayoutTransaction {}

/// Parameters for listing balance transactions.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PayoutTransactionListParams {
    /// Only transactions paid out with this payout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_status: Option<PayoutStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_id: Option<u64>,

    /// Only test (or only live) transactions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,
}
