//! Resources, grouped by API version.
//!
//! The latest version is re-exported here:
//!
//! ```rust,ignore
//! use shopify_rest::rest::resources::Product;
//! // same as
//! use shopify_rest::rest::resources::v2025_10::Product;
//! ```

pub mod v2025_10;

pub use v2025_10::*;
