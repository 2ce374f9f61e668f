//! Response wrapper for resource operations.
//!
//! [`ResourceResponse<T>`] pairs decoded data with the metadata of the HTTP
//! response: [`Pagination`] cursors, the call limit, and the request id. It
//! derefs to `T`, so a `ResourceResponse<Vec<Product>>` can be iterated,
//! indexed, and measured like the vector itself.
//!
//! # Example
//!
//! ```rust,ignore
//! let response = Product::all(&client, None).await?;
//!
//! for product in response.iter() {
//!     println!("{:?}", product.title);
//! }
//!
//! if let Some(next) = response.next_page_options() {
//!     let more = Product::page(&client, next).await?;
//! }
//! ```

use std::ops::{Deref, DerefMut};

use serde::de::{DeserializeOwned, Error as _};

use crate::clients::{ApiCallLimit, HttpResponse};
use crate::rest::{PageOptions, Pagination, ResourceError};

/// Decoded data plus response metadata.
///
/// # Example
///
/// ```rust
/// use shopify_rest::rest::{PageOptions, Pagination, ResourceResponse};
///
/// let response = ResourceResponse::new(
///     vec!["a", "b"],
///     Pagination {
///         next_page_options: Some(PageOptions::new().with_page_info("next")),
///         previous_page_options: None,
///     },
///     None,
///     Some("req-1".to_string()),
/// );
///
/// assert_eq!(response.len(), 2);
/// assert!(response.has_next_page());
/// assert!(!response.has_previous_page());
/// assert_eq!(response.request_id(), Some("req-1"));
/// ```
#[derive(Debug, Clone)]
pub struct ResourceResponse<T> {
    data: T,
    pagination: Pagination,
    rate_limit: Option<ApiCallLimit>,
    request_id: Option<String>,
}

impl<T> ResourceResponse<T> {
    /// Creates a response from its parts.
    #[must_use]
    pub const fn new(
        data: T,
        pagination: Pagination,
        rate_limit: Option<ApiCallLimit>,
        request_id: Option<String>,
    ) -> Self {
        Self {
            data,
            pagination,
            rate_limit,
            request_id,
        }
    }

    /// Consumes the response and returns the data.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Returns the data.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Returns the data mutably.
    #[must_use]
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Returns the pagination cursors. Empty for non-list responses.
    #[must_use]
    pub const fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Returns `true` if a next page exists.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.pagination.has_next_page()
    }

    /// Returns `true` if a previous page exists.
    #[must_use]
    pub const fn has_previous_page(&self) -> bool {
        self.pagination.has_previous_page()
    }

    /// Returns the options that fetch the next page.
    #[must_use]
    pub const fn next_page_options(&self) -> Option<&PageOptions> {
        self.pagination.next_page_options.as_ref()
    }

    /// Returns the options that fetch the previous page.
    #[must_use]
    pub const fn previous_page_options(&self) -> Option<&PageOptions> {
        self.pagination.previous_page_options.as_ref()
    }

    /// Returns the call limit reported with the response.
    #[must_use]
    pub const fn rate_limit(&self) -> Option<&ApiCallLimit> {
        self.rate_limit.as_ref()
    }

    /// Returns the `X-Request-Id` of the response.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Transforms the data, keeping the metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> ResourceResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ResourceResponse {
            data: f(self.data),
            pagination: self.pagination,
            rate_limit: self.rate_limit,
            request_id: self.request_id,
        }
    }
}

impl<T: DeserializeOwned> ResourceResponse<T> {
    /// Decodes `body[key]` from a successful response.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Decode`] if `key` is missing or its value does
    /// not match `T`.
    pub fn from_http_response(
        response: HttpResponse,
        key: &str,
        resource: &'static str,
    ) -> Result<Self, ResourceError> {
        let pagination = Pagination::from_response(&response);
        let rate_limit = response.api_call_limit;
        let request_id = response.request_id().map(ToString::to_string);

        let HttpResponse { mut body, .. } = response;
        let value = body
            .get_mut(key)
            .map(serde_json::Value::take)
            .ok_or_else(|| ResourceError::Decode {
                resource,
                source: serde_json::Error::custom(format!("missing key `{key}` in response body")),
            })?;

        let data = serde_json::from_value(value)
            .map_err(|source| ResourceError::Decode { resource, source })?;

        Ok(Self {
            data,
            pagination,
            rate_limit,
            request_id,
        })
    }
}

impl<T> Deref for ResourceResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for ResourceResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceResponse<String>>();
    assert_send_sync::<ResourceResponse<Vec<String>>>();
};
