/*
[INPUT]:  HTTP configuration (base URL, API key, timeouts, failure observer)
[OUTPUT]: Configured reqwest-backed transport ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::http::observer::{FailedRequest, LogObserver, ResponseObserver};
use crate::http::{PnpError, Result};

/// Base URL of the license-management API
pub const LICENSE_BASE_URL: &str = "https://ls.proxynetworkpro.com/v1";

/// Header carrying the license key on every request
pub const API_KEY_HEADER: &str = "x-api-key";

/// HTTP client configuration
///
/// Timeouts are unset by default, leaving them to reqwest.
#[derive(Clone)]
pub struct ClientConfig {
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
    pub user_agent: Option<String>,
    pub license_base_url: String,
    pub observer: Arc<dyn ResponseObserver>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            connect_timeout: None,
            user_agent: None,
            license_base_url: LICENSE_BASE_URL.to_string(),
            observer: Arc::new(LogObserver),
        }
    }
}

impl ClientConfig {
    /// Replace the failure observer
    pub fn with_observer(mut self, observer: impl ResponseObserver + 'static) -> Self {
        self.observer = Arc::new(observer);
        self
    }

    /// Point the license registry at a different endpoint
    pub fn with_license_base_url(mut self, url: impl Into<String>) -> Self {
        self.license_base_url = url.into();
        self
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("user_agent", &self.user_agent)
            .field("license_base_url", &self.license_base_url)
            .finish_non_exhaustive()
    }
}

/// A single API call: method, path segments, query pairs and optional JSON body
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    method: Method,
    segments: Vec<String>,
    query: Vec<(String, String)>,
    body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, resource: &str) -> Self {
        Self {
            method,
            segments: vec![resource.to_string()],
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(resource: &str) -> Self {
        Self::new(Method::GET, resource)
    }

    pub fn post(resource: &str) -> Self {
        Self::new(Method::POST, resource)
    }

    pub fn put(resource: &str) -> Self {
        Self::new(Method::PUT, resource)
    }

    pub fn patch(resource: &str) -> Self {
        Self::new(Method::PATCH, resource)
    }

    pub fn delete(resource: &str) -> Self {
        Self::new(Method::DELETE, resource)
    }

    /// Append one path segment; it is percent-encoded as a whole
    pub fn segment(mut self, segment: impl fmt::Display) -> Self {
        self.segments.push(segment.to_string());
        self
    }

    pub fn query(mut self, key: &str, value: impl fmt::Display) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Unencoded path, e.g. `/proxy-providers/7/bandwidth-usage`
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }
}

/// Capability shared by all registries: send one request, get the parsed body
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> Result<Value>;
}

/// reqwest-backed transport bound to one base URL and API key
#[derive(Clone)]
pub struct HttpClient {
    http_client: Client,
    base_url: Url,
    observer: Arc<dyn ResponseObserver>,
}

impl HttpClient {
    /// Create a client for `base_url` authenticated with `api_key`
    pub fn new(base_url: &str, api_key: &str, config: &ClientConfig) -> Result<Self> {
        let mut api_key = HeaderValue::from_str(api_key)
            .map_err(|e| PnpError::Config(format!("Invalid API key header value: {e}")))?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(API_KEY_HEADER), api_key);

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }
        let http_client = builder
            .build()
            .map_err(|e| PnpError::Config(format!("Failed to build HTTP client: {e}")))?;

        let base_url = Url::parse(base_url.trim_end_matches('/'))?;
        if base_url.cannot_be_a_base() {
            return Err(PnpError::Config(format!(
                "Base URL cannot carry a path: {base_url}"
            )));
        }

        Ok(Self {
            http_client,
            base_url,
            observer: config.observer.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the URL for a request, without its query string
    fn endpoint_url(&self, request: &ApiRequest) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| PnpError::Config(format!("Base URL cannot carry a path: {}", self.base_url)))?
            .pop_if_empty()
            .extend(request.segments());
        Ok(url)
    }

    fn report(&self, failure: FailedRequest) -> FailedRequest {
        self.observer.on_failure(&failure);
        failure
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn execute(&self, request: ApiRequest) -> Result<Value> {
        let endpoint = self.endpoint_url(&request)?;
        let report_url = endpoint.to_string();

        let mut url = endpoint;
        if !request.query_pairs().is_empty() {
            url.query_pairs_mut().extend_pairs(request.query_pairs());
        }

        debug!(method = %request.method(), url = %url, "sending request");

        let mut builder = self.http_client.request(request.method().clone(), url);
        if let Some(body) = request.body() {
            builder = builder.json(body);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(err) => {
                self.report(FailedRequest {
                    method: request.method().clone(),
                    url: report_url,
                    status: None,
                    message: Some(err.to_string()),
                });
                return Err(PnpError::Http(err));
            }
        };

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(err) => {
                self.report(FailedRequest {
                    method: request.method().clone(),
                    url: report_url,
                    status: Some(status),
                    message: Some(err.to_string()),
                });
                return Err(PnpError::Http(err));
            }
        };

        if !status.is_success() {
            let failure = self.report(FailedRequest {
                method: request.method().clone(),
                url: report_url,
                status: Some(status),
                message: server_error_message(&bytes),
            });
            return Err(PnpError::Api {
                method: failure.method,
                url: failure.url,
                status,
                message: failure.message,
                headers,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        Ok(parse_body(&bytes))
    }
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

/// Empty bodies become `Null`, non-JSON bodies are kept as text
fn parse_body(bytes: &[u8]) -> Value {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}

fn server_error_message(bytes: &[u8]) -> Option<String> {
    let body: Value = serde_json::from_slice(bytes).ok()?;
    match body.get("error")? {
        Value::String(message) => Some(message.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

pub(crate) fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    Ok(serde_json::from_value(value)?)
}
