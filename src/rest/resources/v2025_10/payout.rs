//! Shopify Payments payouts.
//!
//! Payouts are read-only: Shopify creates them when it moves money from the
//! Shopify Payments balance to the merchant's bank account.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::RestResource;
//! use shopify_rest::rest::resources::v2025_10::{Payout, PayoutListParams, PayoutStatus};
//!
//! let params = PayoutListParams {
//!     status: Some(PayoutStatus::Paid),
//!     ..Default::default()
//! };
//! let payouts = Payout::all(&client, Some(params)).await?;
//!
//! let transactions = Payout::transactions_for_payout(&client, payouts[0].id.unwrap()).await?;
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::{
    ListResource, ReadOnlyResource, ResourceError, ResourceOperation, ResourcePath, RestResource,
};

use super::payout_transaction::{PayoutTransaction, PayoutTransactionListParams};

/// Where a payout is in its lifecycle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PayoutStatus {
    Scheduled,
    InTransit,
    Paid,
    Failed,
    Canceled,
}

/// Totals of the balance transactions that make up a payout.
///
/// Amounts are decimal strings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PayoutSummary {
    pub adjustments_fee_amount: Option<String>,
    pub adjustments_gross_amount: Option<String>,
    pub charges_fee_amount: Option<String>,
    pub charges_gross_amount: Option<String>,
    pub refunds_fee_amount: Option<String>,
    pub refunds_gross_amount: Option<String>,
    pub reserved_funds_fee_amount: Option<String>,
    pub reserved_funds_gross_amount: Option<String>,
    pub retried_payouts_fee_amount: Option<String>,
    pub retried_payouts_gross_amount: Option<String>,
}

/// A transfer of funds to the merchant's bank account.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Payout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Date the payout was issued.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    /// ISO 4217 currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Net amount, as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PayoutStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<PayoutSummary>,
}

/// The body of a payout list response.
#[derive(Debug, Clone, Deserialize)]
pub struct PayoutsResource {
    pub payouts: Vec<Payout>,
}

impl ListResource for PayoutsResource {
    type Item = Payout;
    const NAME: &'static str = "Payout";

    fn into_items(self) -> Vec<Payout> {
        self.payouts
    }
}

impl RestResource for Payout {
    type Id = u64;
    type FindParams = ();
    type AllParams = PayoutListParams;
    type CountParams = ();
    type List = PayoutsResource;

    const NAME: &'static str = "Payout";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(ResourceOperation::Find, &["id"], "shopify_payments/payouts/{id}"),
        ResourcePath::new(ResourceOperation::All, &[], "shopify_payments/payouts"),
    ];

    fn get_id(&self) -> Option<u64> {
        self.id
    }
}

impl ReadOnlyResource for Payout {}

impl Payout {
    /// Fetches every balance transaction of a payout, following all pages.
    ///
    /// # Errors
    ///
    /// Fails with the first error of any page.
    pub async fn transactions_for_payout(
        client: &RestClient,
        payout_id: u64,
    ) -> Result<Vec<PayoutTransaction>, ResourceError> {
        let params = PayoutTransactionListParams {
            payout_id: Some(payout_id),
            ..Default::default()
        };
        let transactions = PayoutTransaction::all_pages(client, Some(params)).await?;

        tracing::debug!(
            "Loaded {} transaction(s) for payout {}",
            transactions.len(),
            payout_id
        );
        Ok(transactions)
    }
}

/// Parameters for listing payouts.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PayoutListParams {
    /// Page cursor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,

    /// Only payouts with an id lower than this.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_id: Option<u64>,

    /// Only payouts with an id higher than this.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PayoutStatus>,

    /// Inclusive lower bound on `date`, as `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_min: Option<NaiveDate>,

    /// Inclusive upper bound on `date`, as `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_max: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}
