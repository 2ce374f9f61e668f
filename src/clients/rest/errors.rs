//! REST client error type.

use crate::clients::HttpError;
use thiserror::Error;

/// Errors raised by [`RestClient`](crate::clients::RestClient).
///
/// # Example
///
/// ```rust
/// use shopify_rest::clients::RestError;
///
/// let error = RestError::InvalidPath { path: String::new() };
/// assert_eq!(error.to_string(), "Invalid REST API path: ");
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// The path is empty after normalization.
    #[error("Invalid REST API path: {path}")]
    InvalidPath {
        /// The path as given.
        path: String,
    },

    /// The transport failed.
    #[error(transparent)]
    Http(#[from] HttpError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::InvalidHttpRequestError;

    #[test]
    fn test_invalid_path_message_includes_path() {
        let error = RestError::InvalidPath {
            path: "/.json".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid REST API path: /.json");
    }

    #[test]
    fn test_http_error_is_transparent() {
        let http_error = HttpError::InvalidRequest(InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        });
        let rest_error: RestError = http_error.into();

        assert!(matches!(rest_error, RestError::Http(_)));
        assert_eq!(
            rest_error.to_string(),
            "Cannot use post without specifying data."
        );
    }
}
