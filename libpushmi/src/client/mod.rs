//! HTTP client for registry tag endpoints.
//!
//! A thin blocking wrapper around reqwest. It issues exactly one GET per
//! call: no retries, no pagination, no token exchange.

use crate::auth::Credentials;
use crate::error::{PushmiError, Result};
use crate::registry::RegistryAdapter;
use reqwest::StatusCode;
use reqwest::blocking::Client as ReqwestClient;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use url::Url;


/// Configuration for the HTTP client.
///
/// # Examples
///
/// ```
/// use libpushmi::client::ClientConfig;
///
/// let config = ClientConfig::new()
///     .with_timeout(60)
///     .with_endpoint("gcr.io", "http://localhost:5000");
/// assert_eq!(config.timeout_seconds, Some(60));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Request timeout in seconds; `None` keeps reqwest's default
    pub timeout_seconds: Option<u64>,
    /// Base URL overrides keyed by registry hostname
    pub endpoints: HashMap<String, String>,
}

impl ClientConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the request timeout in seconds.
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }

    /// Routes requests for `registry` to `base_url` instead of the
    /// adapter's own endpoint. The adapter's path is kept.
    pub fn with_endpoint(mut self, registry: impl Into<String>, base_url: impl Into<String>) -> Self {
        self.endpoints.insert(registry.into(), base_url.into());
        self
    }
}

/// Blocking HTTP client for registry tag APIs.
#[derive(Debug, Clone)]
pub struct Client {
    /// The underlying HTTP client
    http_client: ReqwestClient,
    /// Normalized base URL overrides keyed by registry hostname
    endpoints: HashMap<String, String>,
}

impl Client {
    /// Creates a new client with default configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use libpushmi::client::Client;
    ///
    /// let client = Client::new().unwrap();
    /// ```
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a new client with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if an endpoint override is not a valid URL or the
    /// HTTP client cannot be built.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let endpoints = config
            .endpoints
            .iter()
            .map(|(registry, url)| Ok((registry.clone(), Self::normalize_url(url)?)))
            .collect::<Result<HashMap<_, _>>>()?;

        let mut builder = ReqwestClient::builder().user_agent(concat!(
            "pushmi/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }

        let http_client = builder
            .build()
            .map_err(|e| PushmiError::network_with_source("Failed to create HTTP client", e))?;

        Ok(Self {
            http_client,
            endpoints,
        })
    }

    /// Normalizes an endpoint URL by ensuring it has a scheme and removing
    /// trailing slashes.
    fn normalize_url(url: &str) -> Result<String> {
        let url = url.trim();

        if url.is_empty() {
            return Err(PushmiError::network("Endpoint URL cannot be empty"));
        }

        let url = if !url.starts_with("http://") && !url.starts_with("https://") {
            format!("https://{}", url)
        } else {
            url.to_string()
        };

        Url::parse(&url).map_err(|e| {
            PushmiError::network_with_source(format!("Invalid endpoint URL '{}'", url), e)
        })?;

        Ok(url.trim_end_matches('/').to_string())
    }

    /// Returns the base URL requests for `adapter` are sent to.
    pub fn endpoint_for<'a>(&'a self, adapter: &'a RegistryAdapter) -> &'a str {
        self.endpoints
            .get(adapter.name)
            .map(String::as_str)
            .unwrap_or(adapter.endpoint)
    }

    /// Performs a GET and parses the body as JSON.
    ///
    /// Only a 200 response is accepted; anything else becomes
    /// [`PushmiError::RegistryRequestFailed`].
    pub fn get_json(&self, url: &str, credentials: Option<&Credentials>) -> Result<Value> {
        let mut request = self.http_client.get(url);

        if let Some(creds) = credentials {
            request = request.header(reqwest::header::AUTHORIZATION, creds.to_header_value());
        }

        let response = request
            .send()
            .map_err(|e| Self::translate_reqwest_error(e, url))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(PushmiError::request_failed(status.as_u16(), url));
        }

        let body = response.text().map_err(|e| {
            PushmiError::network_with_source(format!("Failed to read response from {}", url), e)
        })?;

        serde_json::from_str(&body)
            .map_err(|e| PushmiError::unexpected_response_with_source("body is not valid JSON", url, e))
    }

    /// Translates a reqwest error into a PushmiError.
    fn translate_reqwest_error(error: reqwest::Error, url: &str) -> PushmiError {
        if error.is_timeout() {
            PushmiError::network_with_source(format!("Request to {} timed out", url), error)
        } else if error.is_connect() {
            PushmiError::network_with_source(format!("Failed to connect to {}", url), error)
        } else if error.is_request() {
            PushmiError::network_with_source(format!("Failed to send request to {}", url), error)
        } else {
            PushmiError::network_with_source(
                format!("Network error communicating with {}", url),
                error,
            )
        }
    }
}
