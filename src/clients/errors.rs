//! Transport error types.
//!
//! The HTTP layer only fails when a request cannot be sent or cannot be
//! built. Non-2xx responses are returned as ordinary [`HttpResponse`]s and
//! interpreted by the resource layer.
//!
//! [`HttpResponse`]: crate::clients::HttpResponse

use thiserror::Error;

/// A request that fails local validation before it is sent.
///
/// # Example
///
/// ```rust
/// use shopify_rest::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "post".to_string(),
/// };
/// assert_eq!(error.to_string(), "Cannot use post without specifying data.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was built without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A GET or DELETE request was built with a body.
    #[error("Cannot send a body with {method}.")]
    UnexpectedBody {
        /// The HTTP method that does not accept a body.
        method: String,
    },
}

/// Errors raised by [`HttpClient`](crate::clients::HttpClient).
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Connection, TLS, or protocol failure reported by the transport.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
