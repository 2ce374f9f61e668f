//! REST resources for API version 2025-10.
//!
//! | Resource | Path | Operations |
//! |---|---|---|
//! | [`Product`] | `products` | find, all, page, all_pages, count, create, update, delete, product metafields |
//! | [`Payout`] | `shopify_payments/payouts` | find, all, page, all_pages, `transactions_for_payout` |
//! | [`PayoutTransaction`] | `shopify_payments/balance/transactions` | all, page, all_pages |
//! | [`Metafield`] | `products/{product_id}/metafields`, `metafields` | all of the above, per [`MetafieldOwner`](common::MetafieldOwner) |
//!
//! Each resource has a `*Resource` list container implementing
//! [`ListResource`](crate::rest::ListResource).

pub mod common;

mod metafield;
mod payout;
mod payout_transaction;
mod product;

pub use metafield::{
    Metafield, MetafieldCountParams, MetafieldFindParams, MetafieldListParams, MetafieldsResource,
};
pub use payout::{Payout, PayoutListParams, PayoutStatus, PayoutSummary, PayoutsResource};
pub use payout_transaction::{
    PayoutTransaction, PayoutTransactionListParams, PayoutTransactionsResource,
};
pub use product::{
    Product, ProductCountParams, ProductFindParams, ProductListParams, ProductStatus,
    ProductsResource,
};
