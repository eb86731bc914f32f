//! The main Ton client.

use std::sync::Arc;

use crate::error::Error;

use super::transport::{
    HttpTransport, MAINNET_BASE_URL, TESTNET_BASE_URL, Transport, TransportConfig,
};
use super::v2::V2Api;
use super::v3::V3Api;

/// The main client for the TON Center indexing API.
///
/// `Ton` owns the HTTP transport and exposes the two endpoint namespaces:
/// [`v2()`](Ton::v2) for the legacy tonlib-style interface and
/// [`v3()`](Ton::v3) for the REST interface. Both share one connection
/// pool against one base URL.
///
/// The client is cheap to clone and safe to share: the facades and codec
/// are stateless, so concurrent calls from independent tasks need no
/// coordination.
///
/// # Example
///
/// ```rust,no_run
/// use ton_kit::Ton;
///
/// #[tokio::main]
/// async fn main() -> Result<(), ton_kit::Error> {
///     let ton = Ton::mainnet()
///         .logging(true)
///         .read_timeout_ms(60_000)
///         .build()?;
///
///     let info = ton.v2().masterchain_info().await?;
///     println!("seqno {}", info.last.seqno);
///
///     ton.close();
///     Ok(())
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Ton {
    v2: V2Api,
    v3: V3Api,
}

impl Ton {
    /// Create a builder for the production endpoint.
    pub fn mainnet() -> TonBuilder {
        TonBuilder::new(MAINNET_BASE_URL)
    }

    /// Create a builder for the testnet endpoint.
    pub fn testnet() -> TonBuilder {
        TonBuilder::new(TESTNET_BASE_URL)
    }

    /// Create a builder with a custom base URL.
    pub fn custom(base_url: impl Into<String>) -> TonBuilder {
        TonBuilder::new(base_url)
    }

    /// Create a client over an externally supplied transport.
    ///
    /// This is the seam for substituting the HTTP stack, e.g. a recording
    /// stub in tests or a middleware-wrapped client.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            v2: V2Api::new(transport.clone()),
            v3: V3Api::new(transport),
        }
    }

    /// The legacy v2 interface.
    pub fn v2(&self) -> &V2Api {
        &self.v2
    }

    /// The v3 REST interface.
    pub fn v3(&self) -> &V3Api {
        &self.v3
    }

    /// Tear the client down, releasing pooled connections.
    ///
    /// Consuming `self` makes the release a one-time operation per clone.
    /// Calls still in flight on other clones keep the pool alive until they
    /// finish or are cancelled; the sockets go away with the last owner.
    pub fn close(self) {
        drop(self);
    }
}

/// Fluent builder for [`Ton`].
#[derive(Clone, Debug)]
pub struct TonBuilder {
    config: TransportConfig,
}

impl TonBuilder {
    fn new(base_url: impl Into<String>) -> Self {
        Self {
            config: TransportConfig {
                base_url: base_url.into(),
                ..TransportConfig::default()
            },
        }
    }

    /// Emit a `tracing` debug event per HTTP round trip.
    pub fn logging(mut self, enable: bool) -> Self {
        self.config.enable_logging = enable;
        self
    }

    /// TCP connect timeout in milliseconds.
    pub fn connect_timeout_ms(mut self, millis: u64) -> Self {
        self.config.connect_timeout_ms = millis;
        self
    }

    /// Whole-request read timeout in milliseconds.
    pub fn read_timeout_ms(mut self, millis: u64) -> Self {
        self.config.read_timeout_ms = millis;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<Ton, Error> {
        let transport = HttpTransport::new(self.config)?;
        Ok(Ton::with_transport(Arc::new(transport)))
    }
}
