//! Resource-level error types.
//!
//! HTTP statuses are mapped onto semantic variants:
//!
//! - **404**: [`ResourceError::NotFound`]
//! - **422**: [`ResourceError::ValidationFailed`]
//! - **Any other non-2xx**: [`ResourceError::Api`]
//!
//! A 2xx body that does not match the expected shape is a
//! [`ResourceError::Decode`]; transport failures pass through unchanged.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::{ResourceError, RestResource};
//!
//! match Product::find(&client, 123, None).await {
//!     Ok(product) => println!("Found: {:?}", product.title),
//!     Err(ResourceError::NotFound { resource, id }) => {
//!         println!("{resource} {id} is gone");
//!     }
//!     Err(ResourceError::ValidationFailed { errors, .. }) => {
//!         for (field, messages) in errors {
//!             println!("{field}: {messages:?}");
//!         }
//!     }
//!     Err(e) => println!("status {:?}: {e}", e.status()),
//! }
//! ```

use std::collections::HashMap;
use std::fmt;

use crate::clients::{HttpError, HttpResponse, RestError};
use serde_json::Value;
use thiserror::Error;

/// A non-2xx response that is neither a 404 nor a 422.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code.
    pub code: u16,
    /// Human-readable message extracted from the body.
    pub message: String,
    /// The raw `errors` payload, when the body had one.
    pub errors: Option<Value>,
    /// The `X-Request-Id` of the failed request.
    pub request_id: Option<String>,
}

impl ApiError {
    /// Builds an `ApiError` from a response.
    #[must_use]
    pub fn from_response(response: &HttpResponse) -> Self {
        Self {
            code: response.code,
            message: error_message(response.code, &response.body),
            errors: response.body.get("errors").cloned(),
            request_id: response.request_id().map(ToString::to_string),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;
        if let Some(request_id) = &self.request_id {
            write!(f, " (request id: {request_id})")?;
        }
        Ok(())
    }
}

/// Error type for resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource does not exist (HTTP 404).
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// Resource type name, e.g. `"Product"`.
        resource: &'static str,
        /// The requested id, or `"unknown"` for collection paths.
        id: String,
    },

    /// The API rejected the payload (HTTP 422).
    #[error("Validation failed: {errors:?}")]
    ValidationFailed {
        /// Field name to messages; array or string payloads are stored under `"base"`.
        errors: HashMap<String, Vec<String>>,
        /// The `X-Request-Id` of the failed request.
        request_id: Option<String>,
    },

    /// Any other non-2xx response.
    #[error("Shopify API error {0}")]
    Api(ApiError),

    /// A 2xx body did not match the expected JSON shape.
    #[error("Failed to decode {resource} response: {source}")]
    Decode {
        /// Resource type name.
        resource: &'static str,
        /// The underlying decode failure.
        #[source]
        source: serde_json::Error,
    },

    /// Request parameters or a resource body could not be serialized.
    #[error("Failed to serialize request for {resource}: {source}")]
    Serialize {
        /// Resource type name.
        resource: &'static str,
        /// The underlying serialization failure.
        #[source]
        source: serde_json::Error,
    },

    /// No path template matches the operation and the ids at hand.
    #[error("Cannot resolve path for {resource}::{operation} with provided IDs")]
    PathResolutionFailed {
        /// Resource type name.
        resource: &'static str,
        /// The attempted operation, e.g. `"find"`.
        operation: &'static str,
    },

    /// Transport failure.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// REST client failure.
    #[error(transparent)]
    Rest(#[from] RestError),
}

impl ResourceError {
    /// Maps a non-2xx response onto a variant.
    #[must_use]
    pub fn from_response(response: &HttpResponse, resource: &'static str, id: Option<&str>) -> Self {
        match response.code {
            404 => Self::NotFound {
                resource,
                id: id.unwrap_or("unknown").to_string(),
            },
            422 => Self::ValidationFailed {
                errors: parse_validation_errors(&response.body),
                request_id: response.request_id().map(ToString::to_string),
            },
            _ => Self::Api(ApiError::from_response(response)),
        }
    }

    /// Returns the HTTP status for errors that came from an API response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::ValidationFailed { .. } => Some(422),
            Self::Api(error) => Some(error.code),
            _ => None,
        }
    }

    /// Returns the request id, when the failed response carried one.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::ValidationFailed { request_id, .. } => request_id.as_deref(),
            Self::Api(error) => error.request_id.as_deref(),
            _ => None,
        }
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};

fn string_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_str().map_or_else(|| item.to_string(), ToString::to_string))
            .collect(),
        Value::String(s) => vec![s.clone()],
        Value::Null => Vec::new(),
        other => vec![other.to_string()],
    }
}

/// Reads the `errors` payload of a 422 body.
///
/// Shopify sends either `{"errors": {"field": ["msg"]}}`,
/// `{"errors": ["msg"]}` or `{"errors": "msg"}`.
fn parse_validation_errors(body: &Value) -> HashMap<String, Vec<String>> {
    let mut result = HashMap::new();

    match body.get("errors") {
        Some(Value::Object(map)) => {
            for (field, messages) in map {
                result.insert(field.clone(), string_list(messages));
            }
        }
        Some(errors @ (Value::Array(_) | Value::String(_))) => {
            let messages = string_list(errors);
            if !messages.is_empty() {
                result.insert("base".to_string(), messages);
            }
        }
        _ => {}
    }

    result
}

/// Extracts a readable message from an error body.
fn error_message(code: u16, body: &Value) -> String {
    if let Some(errors) = body.get("errors") {
        let message = match errors {
            Value::Object(map) => {
                let mut parts: Vec<String> = map
                    .iter()
                    .map(|(field, messages)| format!("{field}: {}", string_list(messages).join(", ")))
                    .collect();
                parts.sort();
                parts.join("; ")
            }
            other => string_list(other).join(", "),
        };
        if !message.is_empty() {
            return message;
        }
    }

    if let Some(error) = body.get("error").and_then(Value::as_str) {
        return body
            .get("error_description")
            .and_then(Value::as_str)
            .map_or_else(|| error.to_string(), |desc| format!("{error}: {desc}"));
    }

    if let Some(raw) = body.get("raw_body").and_then(Value::as_str) {
        return raw.to_string();
    }

    format!("HTTP {code}")
}
