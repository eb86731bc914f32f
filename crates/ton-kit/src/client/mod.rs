//! Client module for the TON Center API.
//!
//! This module provides the core client infrastructure:
//!
//! - [`Ton`] — The main client, the single entry point for all operations
//! - [`TonBuilder`] — Fluent builder for configuring the client
//! - [`Transport`] — The HTTP seam; [`HttpTransport`] is the reqwest-backed
//!   production implementation
//! - [`V2Api`] / [`V3Api`] — One facade per API variant
//!
//! Facade methods are stateless: each one performs exactly one HTTP round
//! trip and returns a fully decoded value or a typed error. Concurrency is
//! entirely the caller's business — issue as many calls as you like from
//! independent tasks; the only shared resource is the transport's
//! connection pool.

mod ton;
mod transport;
mod v2;
mod v3;

pub use crate::codec::Query;
pub use ton::{Ton, TonBuilder};
pub use transport::{
    HttpTransport, MAINNET_BASE_URL, TESTNET_BASE_URL, Transport, TransportConfig,
};
pub use v2::V2Api;
pub use v3::V3Api;
