//! Typed REST resources and the pagination protocol behind their list calls.
//!
//! - [`RestResource`]: CRUD operations driven by path templates
//! - [`ReadOnlyResource`]: marker for resources without write paths
//! - [`list_with_pagination`] / [`collect_all_pages`]: paged list requests
//! - [`Pagination`] / [`PageOptions`]: cursors parsed from the `Link` header
//! - [`ResourceResponse`]: decoded data plus response metadata
//! - [`ResourceError`]: errors of resource operations
//! - [`resources`]: the resources themselves, by API version
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::RestResource;
//! use shopify_rest::rest::resources::Product;
//!
//! let product = Product::find(&client, 632910392, None).await?;
//! println!("{:?}", product.title);
//!
//! let first = Product::all(&client, None).await?;
//! if let Some(next) = first.next_page_options() {
//!     let second = Product::page(&client, next).await?;
//! }
//!
//! let count = Product::count(&client, None).await?;
//! ```

mod errors;
mod pagination;
mod path;
mod query;
mod resource;
mod response;

pub mod resources;

pub use errors::{ApiError, ResourceError};
pub use pagination::{
    collect_all_pages, list_with_pagination, parse_link_header, LinkRelation, ListResource,
    PageOptions, Pagination,
};
pub use path::{build_path, get_path, ResourceOperation, ResourcePath};
pub use query::serialize_to_query;
pub use resource::{ParentIds, ReadOnlyResource, RestResource};
pub use response::ResourceResponse;
