//! Cursor-based pagination over the `Link` response header.
//!
//! List endpoints return at most one page of items. When more pages exist the
//! response carries a `Link` header with up to two entries:
//!
//! ```text
//! <https://shop.myshopify.com/admin/api/2025-10/products.json?limit=50&page_info=abc>; rel="previous",
//! <https://shop.myshopify.com/admin/api/2025-10/products.json?limit=50&page_info=def>; rel="next"
//! ```
//!
//! [`parse_link_header`] turns that header into [`PageOptions`] keyed by
//! [`LinkRelation`], and [`Pagination`] holds the resulting pair. A
//! [`PageOptions`] serializes back into the query parameters of its URL, so it
//! can be passed as the options of the next list call.
//!
//! Parsing never fails: entries that do not match the expected shape are
//! skipped, and a missing header yields an empty [`Pagination`].
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::{list_with_pagination, PageOptions};
//! use shopify_rest::rest::resources::v2025_10::ProductsResource;
//!
//! let mut options = PageOptions::new().with_limit(50);
//! loop {
//!     let page = list_with_pagination::<ProductsResource, _>(&client, "products", Some(&options)).await?;
//!     for product in page.iter() {
//!         println!("{:?}", product.title);
//!     }
//!     match page.pagination().next_page_options.clone() {
//!         Some(next) => options = next,
//!         None => break,
//!     }
//! }
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::clients::{HttpResponse, Query, RestClient};
use crate::rest::query::serialize_to_query;
use crate::rest::{ResourceError, ResourceResponse};

/// Matches one `Link` entry: `<url>; rel="previous|next"`.
static LINK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^ *<([^>]+)>; rel="(previous|next)" *$"#).expect("link pattern is valid")
});

/// Direction of a `Link` entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LinkRelation {
    /// `rel="previous"`
    Previous,
    /// `rel="next"`
    Next,
}

impl LinkRelation {
    /// Returns the `rel` value as it appears in the header.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Previous => "previous",
            Self::Next => "next",
        }
    }

    fn from_rel(rel: &str) -> Option<Self> {
        match rel {
            "previous" => Some(Self::Previous),
            "next" => Some(Self::Next),
            _ => None,
        }
    }
}

impl fmt::Display for LinkRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The query parameters of a page link.
///
/// `page_info`, `limit` and `fields` get typed fields; any other parameter
/// present in the link is kept in `extra` and sent back unchanged.
///
/// # Example
///
/// ```rust
/// use shopify_rest::rest::PageOptions;
///
/// let options = PageOptions::from_url(
///     "https://shop.example.com/admin/api/2023-01/products.json?limit=50&page_info=abc123",
/// )
/// .unwrap();
///
/// assert_eq!(options.limit, Some(50));
/// assert_eq!(options.page_info.as_deref(), Some("abc123"));
/// assert_eq!(options.to_query_string(), "limit=50&page_info=abc123");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageOptions {
    /// Opaque cursor identifying the page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,

    /// Maximum number of items per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Comma-separated list of fields to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,

    /// Every other parameter carried by the link.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl PageOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page cursor.
    #[must_use]
    pub fn with_page_info(mut self, page_info: impl Into<String>) -> Self {
        self.page_info = Some(page_info.into());
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Restricts the returned fields.
    #[must_use]
    pub fn with_fields(mut self, fields: impl Into<String>) -> Self {
        self.fields = Some(fields.into());
        self
    }

    /// Reads the options from the query string of an absolute URL.
    ///
    /// Returns `None` when the URL cannot be parsed or `limit` is not an
    /// unsigned integer.
    #[must_use]
    pub fn from_url(url: &str) -> Option<Self> {
        let url = Url::parse(url).ok()?;
        let mut options = Self::default();

        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "page_info" => options.page_info = Some(value.into_owned()),
                "limit" => options.limit = Some(value.parse().ok()?),
                "fields" => options.fields = Some(value.into_owned()),
                _ => {
                    options.extra.insert(key.into_owned(), value.into_owned());
                }
            }
        }

        Some(options)
    }

    /// Returns the options as query parameters.
    #[must_use]
    pub fn to_query(&self) -> Query {
        let mut query = self.extra.clone();
        if let Some(page_info) = &self.page_info {
            query.insert("page_info".to_string(), page_info.clone());
        }
        if let Some(limit) = self.limit {
            query.insert("limit".to_string(), limit.to_string());
        }
        if let Some(fields) = &self.fields {
            query.insert("fields".to_string(), fields.clone());
        }
        query
    }

    /// Renders the options as a percent-encoded query string, keys in order.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.to_query()
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Returns `true` if no parameter is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.page_info.is_none()
            && self.limit.is_none()
            && self.fields.is_none()
            && self.extra.is_empty()
    }
}

impl fmt::Display for PageOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

/// Cursors for the pages around the current one.
///
/// `None` means there is no page in that direction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Options that fetch the next page.
    pub next_page_options: Option<PageOptions>,
    /// Options that fetch the previous page.
    pub previous_page_options: Option<PageOptions>,
}

impl Pagination {
    /// Builds the pair from a raw `Link` header value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_rest::rest::Pagination;
    ///
    /// let pagination = Pagination::from_link_header(
    ///     r#"<https://shop.example.com/admin/api/2023-01/products.json?limit=50&page_info=abc123>; rel="next""#,
    /// );
    ///
    /// assert!(pagination.has_next_page());
    /// assert!(!pagination.has_previous_page());
    /// ```
    #[must_use]
    pub fn from_link_header(header: &str) -> Self {
        let mut links = parse_link_header(header);
        Self {
            next_page_options: links.remove(&LinkRelation::Next),
            previous_page_options: links.remove(&LinkRelation::Previous),
        }
    }

    /// Builds the pair from a response's `Link` header, if any.
    #[must_use]
    pub fn from_response(response: &HttpResponse) -> Self {
        response
            .link()
            .map(|link| Self::from_link_header(&link))
            .unwrap_or_default()
    }

    /// Returns `true` if a next page exists.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.next_page_options.is_some()
    }

    /// Returns `true` if a previous page exists.
    #[must_use]
    pub const fn has_previous_page(&self) -> bool {
        self.previous_page_options.is_some()
    }

    /// Returns `true` if neither cursor is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.next_page_options.is_none() && self.previous_page_options.is_none()
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PageOptions>();
    assert_send_sync::<Pagination>();
};

/// Parses a `Link` header into page options keyed by relation.
///
/// Entries are separated by `,`. Entries that do not match
/// `<url>; rel="previous|next"`, whose URL cannot be parsed, or whose `limit`
/// is not an unsigned integer are skipped. When a relation appears more than
/// once, the last entry wins.
#[must_use]
pub fn parse_link_header(header: &str) -> HashMap<LinkRelation, PageOptions> {
    let mut links = HashMap::new();

    for entry in header.split(',') {
        let Some(captures) = LINK_REGEX.captures(entry) else {
            if !entry.trim().is_empty() {
                tracing::trace!("Skipping unrecognized Link entry: {}", entry.trim());
            }
            continue;
        };

        let Some(relation) = LinkRelation::from_rel(&captures[2]) else {
            continue;
        };

        match PageOptions::from_url(&captures[1]) {
            Some(options) => {
                links.insert(relation, options);
            }
            None => {
                tracing::trace!("Skipping {} link with unusable URL: {}", relation, &captures[1]);
            }
        }
    }

    links
}

/// A list response body, one top-level key holding the items.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use shopify_rest::rest::ListResource;
///
/// #[derive(Deserialize)]
/// struct Widgets {
///     widgets: Vec<String>,
/// }
///
/// impl ListResource for Widgets {
///     type Item = String;
///     const NAME: &'static str = "Widget";
///
///     fn into_items(self) -> Vec<String> {
///         self.widgets
///     }
/// }
/// ```
pub trait ListResource: DeserializeOwned {
    /// The item type.
    type Item;

    /// Resource name used in error messages.
    const NAME: &'static str;

    /// Unwraps the items.
    fn into_items(self) -> Vec<Self::Item>;
}

/// Fetches one page from a list endpoint.
///
/// `options` is serialized into query parameters (see
/// [`serialize_to_query`](crate::rest::serialize_to_query)); pass the
/// [`PageOptions`] from a previous response's [`Pagination`] to move between
/// pages. The body is decoded into `C` and its `Link` header into the
/// response's [`Pagination`].
///
/// # Errors
///
/// - [`ResourceError::NotFound`], [`ResourceError::ValidationFailed`] or
///   [`ResourceError::Api`] for a non-2xx status
/// - [`ResourceError::Decode`] if the body does not match `C`
/// - [`ResourceError::Serialize`] if `options` cannot be serialized
/// - [`ResourceError::Rest`] for transport failures
pub async fn list_with_pagination<C, O>(
    client: &RestClient,
    path: &str,
    options: Option<&O>,
) -> Result<ResourceResponse<Vec<C::Item>>, ResourceError>
where
    C: ListResource,
    O: Serialize + ?Sized,
{
    let query = options
        .map(|o| serialize_to_query(o, C::NAME))
        .transpose()?
        .filter(|q| !q.is_empty());

    let response = client.get(path, query).await?;

    if !response.is_ok() {
        return Err(ResourceError::from_response(&response, C::NAME, None));
    }

    let pagination = Pagination::from_response(&response);
    let rate_limit = response.api_call_limit;
    let request_id = response.request_id().map(ToString::to_string);

    let container: C = serde_json::from_value(response.body).map_err(|source| {
        ResourceError::Decode {
            resource: C::NAME,
            source,
        }
    })?;
    let items = container.into_items();

    tracing::debug!(
        "Fetched {} {} item(s) from {} (next page: {}, previous page: {})",
        items.len(),
        C::NAME,
        path,
        pagination.has_next_page(),
        pagination.has_previous_page()
    );

    Ok(ResourceResponse::new(
        items,
        pagination,
        rate_limit,
        request_id,
    ))
}

/// Fetches every page of a list endpoint, following `next` links.
///
/// Iteration stops at the first response without a `next` relation.
///
/// # Errors
///
/// Fails with the first error returned by [`list_with_pagination`]; items
/// from earlier pages are discarded.
pub async fn collect_all_pages<C, O>(
    client: &RestClient,
    path: &str,
    options: Option<&O>,
) -> Result<Vec<C::Item>, ResourceError>
where
    C: ListResource,
    O: Serialize + ?Sized,
{
    let mut page = list_with_pagination::<C, O>(client, path, options).await?;
    let mut items = Vec::new();

    loop {
        let next = page.pagination().next_page_options.clone();
        items.extend(page.into_inner());

        match next {
            Some(next) => {
                page = list_with_pagination::<C, PageOptions>(client, path, Some(&next)).await?;
            }
            None => break,
        }
    }

    Ok(items)
}
