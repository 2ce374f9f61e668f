//! [`RestClient`] implementation.

use std::collections::BTreeMap;

use crate::clients::rest::RestError;
use crate::clients::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::config::{ApiVersion, ShopifyConfig};

/// Query parameters for a REST call.
pub type Query = BTreeMap<String, String>;

/// Client for the Admin REST API of one shop.
///
/// Responses are returned whatever their status; see
/// [`HttpClient::request`].
///
/// # Example
///
/// ```rust,ignore
/// use shopify_rest::{ApiVersion, RestClient};
///
/// let client = RestClient::with_version(&config, ApiVersion::V2025_07)?;
/// let response = client.get("shopify_payments/payouts", None).await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    http_client: HttpClient,
    api_version: ApiVersion,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a client using the configured API version.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the transport cannot be created.
    pub fn new(config: &ShopifyConfig) -> Result<Self, RestError> {
        Self::create_client(config, config.api_version().clone())
    }

    /// Creates a client pinned to `version` instead of the configured one.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the transport cannot be created.
    pub fn with_version(config: &ShopifyConfig, version: ApiVersion) -> Result<Self, RestError> {
        if &version != config.api_version() {
            tracing::debug!(
                "Rest client overriding default API version {} with {}",
                config.api_version(),
                version
            );
        }
        Self::create_client(config, version)
    }

    fn create_client(config: &ShopifyConfig, api_version: ApiVersion) -> Result<Self, RestError> {
        let base_path = format!("/admin/api/{api_version}");
        let http_client = HttpClient::new(base_path, config)?;

        Ok(Self {
            http_client,
            api_version,
        })
    }

    /// Returns the API version used in request paths.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] for an empty path and
    /// [`RestError::Http`] for transport failures.
    pub async fn get(&self, path: &str, query: Option<Query>) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Get, path, None, query).await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] for an empty path and
    /// [`RestError::Http`] for transport failures.
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<Query>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Post, path, Some(body), query)
            .await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] for an empty path and
    /// [`RestError::Http`] for transport failures.
    pub async fn put(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<Query>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Put, path, Some(body), query)
            .await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] for an empty path and
    /// [`RestError::Http`] for transport failures.
    pub async fn delete(&self, path: &str, query: Option<Query>) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Delete, path, None, query)
            .await
    }

    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<Query>,
    ) -> Result<HttpResponse, RestError> {
        let normalized_path = normalize_path(path)?;

        let mut builder = HttpRequest::builder(method, normalized_path);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        if let Some(query) = query {
            builder = builder.query(query);
        }

        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;
        Ok(self.http_client.request(request).await?)
    }
}

/// Strips leading slashes and ensures a single `.json` suffix.
fn normalize_path(path: &str) -> Result<String, RestError> {
    let trimmed = path.trim_start_matches('/');
    let trimmed = trimmed.strip_suffix(".json").unwrap_or(trimmed);

    if trimmed.is_empty() {
        return Err(RestError::InvalidPath {
            path: path.to_string(),
        });
    }

    Ok(format!("{trimmed}.json"))
}
