//! Transport seam between the client and the network.
//!
//! The client builds [`RawRequest`]s and hands them to a [`Transport`], which
//! returns the status code and raw body of whatever the server answered. The
//! default implementation is backed by `reqwest`; tests substitute their own
//! transport to exercise the client without a live network.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Method;

use super::config::ClientConfig;
use super::error::ClientError;

/// A request as handed to the transport: everything needed to put it on the
/// wire, with the body still in structured form.
#[derive(Debug, Clone)]
pub struct RawRequest {
    /// HTTP method.
    pub method: Method,

    /// Path relative to the transport's base URL, e.g. `sales`.
    pub path: String,

    /// Headers in insertion order; later entries win on duplicate names.
    pub headers: Vec<(String, String)>,

    /// Query parameters to be URL-encoded.
    pub query: Vec<(String, String)>,

    /// JSON request body, if any.
    pub body: Option<serde_json::Value>,
}

/// A response as returned by the transport, body undecoded.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,

    /// Raw response body.
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Whether the status code is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failure that occurred before any response was obtained, such as a DNS
/// error, a refused connection or a timeout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("transport error: {message}")]
pub struct TransportError {
    /// Human-readable description of the failure.
    pub message: String,

    /// Status code, when the underlying error carries one.
    pub status: Option<u16>,
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self {
            message: err.to_string(),
            status: err.status().map(|s| s.as_u16()),
        }
    }
}

/// The injectable capability that performs the actual network call.
///
/// Implementations must be safe for sequential reuse across calls; the client
/// never issues concurrent sub-requests.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends the request and returns the raw response.
    async fn send(&self, request: RawRequest) -> Result<RawResponse, TransportError>;
}

/// Default transport backed by a `reqwest` client bound to a base URL.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
    http: reqwest::Client,
}

impl HttpTransport {
    /// Creates a transport bound to the configuration's base URL, with JSON
    /// content negotiation headers applied to every request.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be created.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| ClientError::Api {
                message: format!("failed to build HTTP client: {e}"),
                status: None,
            })?;

        Ok(Self {
            base_url: config.base_url.clone(),
            http,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: RawRequest) -> Result<RawResponse, TransportError> {
        let url = format!("{}{}", self.base_url, request.path);
        let mut builder = self.http.request(request.method, &url);

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(TransportError::from)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(TransportError::from)?;

        Ok(RawResponse {
            status,
            body: body.to_vec(),
        })
    }
}
