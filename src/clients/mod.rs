//! HTTP transport for the Admin REST API.
//!
//! # Overview
//!
//! - [`HttpClient`]: sends one request and returns the response, whatever its status
//! - [`HttpRequest`] / [`HttpMethod`]: a request relative to the client's base path
//! - [`HttpResponse`]: status, lower-cased headers, and JSON body
//! - [`RestClient`]: adds the `/admin/api/{version}` prefix and `.json` paths
//!
//! The transport has no retry policy and never interprets pagination
//! headers; both belong to callers.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{ApiCallLimit, HttpResponse};

pub use rest::{Query, RestClient, RestError};
