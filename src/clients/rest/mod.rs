//! REST layer over [`HttpClient`](crate::clients::HttpClient).
//!
//! [`RestClient`] prefixes every path with `/admin/api/{version}` and
//! normalizes it to the `{path}.json` form the Admin API expects:
//!
//! - Leading slashes are stripped: `/products` -> `products.json`
//! - An existing `.json` suffix is kept once: `products.json` -> `products.json`
//! - An empty path is rejected with [`RestError::InvalidPath`]
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::RestClient;
//!
//! let client = RestClient::new(&config)?;
//! let response = client.get("products/count", None).await?;
//! println!("{}", response.body["count"]);
//! ```

mod client;
mod errors;

pub use client::{Query, RestClient};
pub use errors::RestError;
