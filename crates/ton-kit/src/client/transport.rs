//! HTTP transport: the one seam between the typed client and the network.

use std::time::Duration;

use futures::future::BoxFuture;
use tracing::debug;

use crate::codec::Query;
use crate::error::{Error, TransportError};

/// Default production endpoint.
pub const MAINNET_BASE_URL: &str = "https://toncenter.com";

/// Testnet endpoint.
pub const TESTNET_BASE_URL: &str = "https://testnet.toncenter.com";

/// Transport configuration.
#[derive(Clone, Debug)]
pub struct TransportConfig {
    /// Base URL all request paths are appended to.
    pub base_url: String,
    /// Emit a `tracing` debug event per HTTP round trip.
    pub enable_logging: bool,
    /// TCP connect timeout in milliseconds.
    pub connect_timeout_ms: u64,
    /// Whole-request read timeout in milliseconds.
    pub read_timeout_ms: u64,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            base_url: MAINNET_BASE_URL.to_string(),
            enable_logging: false,
            connect_timeout_ms: 10_000,
            read_timeout_ms: 30_000,
        }
    }
}

/// The two operations the client needs from an HTTP stack.
///
/// [`HttpTransport`] is the production implementation; tests substitute a
/// stub. Futures are boxed so the trait stays dyn-compatible. Dropping a
/// returned future cancels the underlying request, which is how caller
/// cancellation reaches the socket.
pub trait Transport: Send + Sync {
    /// Perform a GET and return the response body.
    ///
    /// Non-2xx responses fail with [`TransportError::Status`]; network-level
    /// failures with [`TransportError::Http`].
    fn get<'a>(
        &'a self,
        path: &'a str,
        query: &'a Query,
    ) -> BoxFuture<'a, Result<String, TransportError>>;

    /// Perform a POST with the given body and return the response body.
    fn post<'a>(
        &'a self,
        path: &'a str,
        body: String,
        content_type: &'a str,
    ) -> BoxFuture<'a, Result<String, TransportError>>;
}

/// Production transport over a pooled [`reqwest::Client`].
///
/// The pool is released when the last clone is dropped; there is no
/// explicit close beyond that.
#[derive(Clone)]
pub struct HttpTransport {
    base_url: String,
    enable_logging: bool,
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport from its configuration.
    pub fn new(config: TransportConfig) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(Duration::from_millis(config.read_timeout_ms))
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            enable_logging: config.enable_logging,
            client,
        })
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read_body(response: reqwest::Response) -> Result<String, TransportError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(TransportError::Status {
                code: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}

impl Transport for HttpTransport {
    fn get<'a>(
        &'a self,
        path: &'a str,
        query: &'a Query,
    ) -> BoxFuture<'a, Result<String, TransportError>> {
        Box::pin(async move {
            if self.enable_logging {
                debug!(path, params = query.len(), "GET");
            }
            let response = self
                .client
                .get(self.url(path))
                .query(query)
                .send()
                .await?;
            Self::read_body(response).await
        })
    }

    fn post<'a>(
        &'a self,
        path: &'a str,
        body: String,
        content_type: &'a str,
    ) -> BoxFuture<'a, Result<String, TransportError>> {
        Box::pin(async move {
            if self.enable_logging {
                debug!(path, bytes = body.len(), "POST");
            }
            let response = self
                .client
                .post(self.url(path))
                .header("Content-Type", content_type)
                .body(body)
                .send()
                .await?;
            Self::read_body(response).await
        })
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .finish()
    }
}
