//! # Shopify REST
//!
//! Typed Shopify Admin REST resources with cursor-based pagination.
//!
//! ## Overview
//!
//! - Validated configuration via [`ShopifyConfig`] and [`ShopifyConfigBuilder`]
//! - An async transport ([`HttpClient`], [`RestClient`]) over `reqwest`
//! - CRUD resources ([`rest::resources`]): products, payouts, payout balance
//!   transactions and metafields
//! - `Link` header pagination: every list call returns the cursors of the
//!   adjacent pages, and [`rest::RestResource::all_pages`] follows them to the end
//!
//! The access token must already be obtained; this crate does not implement
//! OAuth, rate limiting or retries.
//!
//! ## Quick Start
//!
//! ```rust
//! use shopify_rest::{AccessToken, ApiVersion, RestClient, ShopDomain, ShopifyConfig};
//!
//! let config = ShopifyConfig::builder()
//!     .shop(ShopDomain::new("my-store").unwrap())
//!     .access_token(AccessToken::new("shpat_xxx").unwrap())
//!     .api_version(ApiVersion::V2025_10)
//!     .build()
//!     .unwrap();
//!
//! let client = RestClient::new(&config).unwrap();
//! assert_eq!(client.api_version(), &ApiVersion::V2025_10);
//! ```
//!
//! ## Paging Through a List
//!
//! ```rust,ignore
//! use shopify_rest::rest::RestResource;
//! use shopify_rest::rest::resources::{Product, ProductListParams};
//!
//! let params = ProductListParams { limit: Some(50), ..Default::default() };
//! let mut page = Product::all(&client, Some(params)).await?;
//!
//! loop {
//!     for product in page.iter() {
//!         println!("{:?}", product.title);
//!     }
//!     let Some(next) = page.next_page_options().cloned() else { break };
//!     page = Product::page(&client, &next).await?;
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is passed explicitly
//! - **Fail-fast validation**: newtypes validate on construction
//! - **Thread-safe**: clients and responses are `Send + Sync`
//! - **Stateless pagination**: a page's cursors are all that is needed to resume

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

pub use config::{AccessToken, ApiVersion, HostUrl, ShopDomain, ShopifyConfig, ShopifyConfigBuilder};
pub use error::ConfigError;

pub use clients::{
    ApiCallLimit, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, InvalidHttpRequestError, RestClient, RestError,
};

pub use rest::{PageOptions, Pagination, ResourceError, ResourceResponse};
